//! ICS generation for the merged calendar.
//!
//! Events are written back as they were read, properties in their original
//! order. Only the VCALENDAR properties are generated here; framing and line
//! folding come from icalendar's reserialization type.

use icalendar::parser::{Calendar, Property};

use super::component::escape_text;
use crate::calendar::MergedCalendar;

/// Format version written to every merged calendar.
pub const ICALENDAR_VERSION: &str = "2.0";

/// Serialize a merged calendar to .ics text.
pub fn generate_ics(calendar: &MergedCalendar) -> String {
    let mut properties = vec![
        text_property("PRODID", calendar.product_id()),
        Property::new_ref("VERSION", ICALENDAR_VERSION),
    ];
    if let Some(name) = calendar.name() {
        properties.push(text_property("X-WR-CALNAME", name));
    }

    Calendar {
        properties,
        components: calendar
            .events()
            .iter()
            .map(|event| event.component.clone())
            .collect(),
    }
    .to_string()
}

fn text_property(name: &'static str, value: &str) -> Property<'static> {
    Property {
        name: name.into(),
        val: escape_text(value).into(),
        params: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarMetadata;
    use crate::ics::parse_events;

    fn calendar_from(ics: &str) -> MergedCalendar {
        let mut calendar = MergedCalendar::new(CalendarMetadata {
            product_id: "-//Merged Uni Plan//DE".into(),
            name: None,
        });
        for event in parse_events(ics).expect("Should parse") {
            calendar.push(event);
        }
        calendar
    }

    const SOURCE: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:evt-1@sked\r\n\
SUMMARY:Networks Lab (Group A)\r\n\
DTSTART;TZID=Europe/Berlin:20241001T120000\r\n\
ORGANIZER;CN=\"Doe, Jane\":mailto:prof@example.org\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn test_header_and_crlf() {
        let ics = generate_ics(&calendar_from(SOURCE));

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nPRODID:-//Merged Uni Plan//DE\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(!ics.contains("X-WR-CALNAME"));
        assert!(!ics.contains("DTSTAMP"));
        assert!(ics.split("\r\n").all(|line| !line.contains('\n')));
    }

    #[test]
    fn test_calendar_name_is_emitted() {
        let mut calendar = MergedCalendar::new(CalendarMetadata {
            product_id: "-//calmerge//EN".into(),
            name: Some("Uni, Semester 3".into()),
        });
        calendar.push(parse_events(SOURCE).unwrap().remove(0));

        let ics = generate_ics(&calendar);
        assert!(ics.contains("X-WR-CALNAME:Uni\\, Semester 3\r\n"));
    }

    #[test]
    fn test_events_are_written_verbatim() {
        let ics = generate_ics(&calendar_from(SOURCE));

        assert!(ics.contains("SUMMARY:Networks Lab (Group A)\r\n"));
        assert!(ics.contains("DTSTART;TZID=Europe/Berlin:20241001T120000\r\n"));
        assert!(ics.contains("ORGANIZER;CN=\"Doe, Jane\":mailto:prof@example.org\r\n"));
        assert!(ics.contains("BEGIN:VALARM\r\nACTION:DISPLAY\r\nTRIGGER:-PT15M\r\nEND:VALARM\r\n"));
    }

    #[test]
    fn test_output_parses_back_to_same_events() {
        let original = parse_events(SOURCE).unwrap();
        let ics = generate_ics(&calendar_from(SOURCE));
        let reparsed = parse_events(&ics).expect("Generated ICS should parse");

        assert_eq!(reparsed.len(), original.len());
        assert_eq!(reparsed[0].summary, original[0].summary);
        assert_eq!(reparsed[0].start, original[0].start);
        assert_eq!(reparsed[0].component, original[0].component);
    }

    #[test]
    fn test_long_lines_are_folded() {
        let description = "Übung ".repeat(40);
        let source = format!(
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:long\r\nSUMMARY:Übung\r\nDTSTART:20241001T080000Z\r\nDESCRIPTION:{}\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
            description
        );
        let ics = generate_ics(&calendar_from(&source));

        for physical in ics.trim_end_matches("\r\n").split("\r\n") {
            assert!(physical.len() <= 75, "line too long: {:?}", physical);
        }
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("DESCRIPTION:{}\r\n", description)));
    }
}
