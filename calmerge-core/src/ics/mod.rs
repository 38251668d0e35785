//! ICS parsing and generation.
//!
//! Both directions go through the icalendar crate's parser types: events
//! are kept as owned parser components and written back with the parser's
//! `Calendar`.

mod component;
mod generate;
mod parse;

pub use component::{EventStart, RawEvent};
pub use generate::{ICALENDAR_VERSION, generate_ics};
pub use parse::parse_events;
