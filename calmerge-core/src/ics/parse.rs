//! ICS parsing using the icalendar crate's parser.

use icalendar::{
    DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::debug;

use super::component::{EventStart, RawEvent, to_owned_component};
use crate::error::{CalMergeError, CalMergeResult};

/// Parse a calendar document and return every VEVENT in it.
///
/// Components are walked recursively in document order; anything that is
/// not an event (VTIMEZONE, VTODO, VFREEBUSY, ...) is skipped.
pub fn parse_events(content: &str) -> CalMergeResult<Vec<RawEvent>> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let is_calendar = content
        .get(..15)
        .is_some_and(|head| head.eq_ignore_ascii_case("BEGIN:VCALENDAR"));
    if !is_calendar {
        return Err(CalMergeError::IcsParse(
            "document does not start with BEGIN:VCALENDAR".into(),
        ));
    }

    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| CalMergeError::IcsParse(e.to_string()))?;

    let mut events = Vec::new();
    collect_events(&calendar.components, &mut events);
    Ok(events)
}

fn collect_events(components: &[Component<'_>], events: &mut Vec<RawEvent>) {
    for component in components {
        if component.name.to_string().eq_ignore_ascii_case("VEVENT") {
            events.push(to_raw_event(component));
        }
        collect_events(&component.components, events);
    }
}

fn to_raw_event(vevent: &Component<'_>) -> RawEvent {
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.as_str().to_string());

    let start = vevent.find_prop("DTSTART").and_then(|p| {
        let parsed = DatePerhapsTime::try_from(p).ok().map(EventStart::from);
        if parsed.is_none() {
            debug!(value = %p.val, "Unreadable DTSTART");
        }
        parsed
    });

    RawEvent {
        summary,
        start,
        component: to_owned_component(vevent),
    }
}
