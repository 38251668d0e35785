//! Events pulled out of a feed.
//!
//! The icalendar parser borrows from the unfolded input text. Each event
//! keeps an owned copy of its parsed component so it can outlive the feed
//! body and be written back out unchanged.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime, ValueType,
    parser::{Component, Parameter, Property},
};

/// Copy a parsed component (and everything below it) out of the input
/// buffer.
///
/// The parser decodes TEXT values and strips the quotes around parameter
/// values. Both are undone here so the copy serializes back to what the
/// feed contained.
pub fn to_owned_component(component: &Component<'_>) -> Component<'static> {
    Component {
        name: component.name.to_owned(),
        properties: component.properties.iter().map(to_owned_property).collect(),
        components: component.components.iter().map(to_owned_component).collect(),
    }
}

fn to_owned_property(prop: &Property<'_>) -> Property<'static> {
    let is_text = icalendar::Property::from(prop.clone()).value_type() == Some(ValueType::Text);
    let val = if is_text {
        escape_text(prop.val.as_str()).into()
    } else {
        prop.val.to_owned()
    };

    Property {
        name: prop.name.to_owned(),
        val,
        params: prop
            .params
            .iter()
            .map(|param| Parameter {
                key: param.key.to_owned(),
                val: param.val.as_ref().map(|v| quote_param(v.as_str()).into()),
            })
            .collect(),
    }
}

/// RFC 5545 TEXT escaping.
pub(crate) fn escape_text(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace(',', r"\,")
        .replace(';', r"\;")
        .replace('\n', r"\n")
}

fn quote_param(value: &str) -> String {
    let already_quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
    if !already_quoted && value.contains([':', ';', ',']) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Start of an event, as written in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventStart {
    Date(NaiveDate),
    Utc(DateTime<Utc>),
    Floating(NaiveDateTime),
    Zoned { datetime: NaiveDateTime, tzid: String },
}

impl EventStart {
    /// The moment this start denotes, for starts that are pinned to one.
    ///
    /// All-day and floating starts have none. Neither does a zoned start
    /// whose TZID is not an IANA name, or whose wall time falls into a DST
    /// gap.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            EventStart::Utc(dt) => Some(*dt),
            EventStart::Zoned { datetime, tzid } => {
                let tz: Tz = tzid.trim_start_matches('/').parse().ok()?;
                tz.from_local_datetime(datetime)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
            }
            EventStart::Date(_) | EventStart::Floating(_) => None,
        }
    }
}

impl From<DatePerhapsTime> for EventStart {
    fn from(dpt: DatePerhapsTime) -> Self {
        match dpt {
            DatePerhapsTime::Date(d) => EventStart::Date(d),
            DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
                CalendarDateTime::Utc(dt) => EventStart::Utc(dt),
                CalendarDateTime::Floating(naive) => EventStart::Floating(naive),
                CalendarDateTime::WithTimezone { date_time, tzid } => EventStart::Zoned {
                    datetime: date_time,
                    tzid,
                },
            },
        }
    }
}

impl fmt::Display for EventStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStart::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventStart::Utc(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M UTC")),
            EventStart::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            EventStart::Zoned { datetime, tzid } => {
                write!(f, "{} {}", datetime.format("%Y-%m-%d %H:%M"), tzid)
            }
        }
    }
}

/// A VEVENT pulled out of a feed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// Decoded SUMMARY text, if the event has one.
    pub summary: Option<String>,
    /// Parsed DTSTART. `None` when missing or unreadable.
    pub start: Option<EventStart>,
    /// The complete component, passed through to the output untouched.
    pub component: Component<'static>,
}

impl RawEvent {
    /// Title used for filtering; a missing summary reads as empty.
    pub fn title(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon_on(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_zoned_start_resolves_to_utc() {
        let berlin = EventStart::Zoned {
            datetime: noon_on(1),
            tzid: "Europe/Berlin".into(),
        };

        assert_eq!(
            berlin.instant(),
            Some(Utc.with_ymd_and_hms(2024, 10, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unknown_tzid_has_no_instant() {
        let custom = EventStart::Zoned {
            datetime: noon_on(1),
            tzid: "W. Europe Standard Time".into(),
        };

        assert_eq!(custom.instant(), None);
        assert_eq!(EventStart::Floating(noon_on(1)).instant(), None);
    }

    #[test]
    fn test_text_values_are_escaped_again() {
        let summary = Property::new_ref("SUMMARY", "Grundlagen, Data Science");
        let url = Property::new_ref("URL", "https://sked.example.org/plan?g=a,b");

        assert_eq!(to_owned_property(&summary).val.as_str(), r"Grundlagen\, Data Science");
        assert_eq!(
            to_owned_property(&url).val.as_str(),
            "https://sked.example.org/plan?g=a,b"
        );
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn test_param_values_with_separators_are_requoted() {
        let prop = Property {
            name: "ORGANIZER".into(),
            val: "mailto:prof@example.org".into(),
            params: vec![
                Parameter::new_ref("CN", Some("Doe, Jane")),
                Parameter::new_ref("ROLE", Some("CHAIR")),
            ],
        };

        let owned = to_owned_property(&prop);
        assert_eq!(owned.params[0].val.as_ref().map(|v| v.as_str()), Some("\"Doe, Jane\""));
        assert_eq!(owned.params[1].val.as_ref().map(|v| v.as_str()), Some("CHAIR"));
    }
}
