//! The merged output calendar.

use std::path::Path;

use crate::error::CalMergeResult;
use crate::ics::{self, RawEvent};

/// Identifying fields of the output calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMetadata {
    /// Written as PRODID.
    pub product_id: String,
    /// Written as X-WR-CALNAME when set.
    pub name: Option<String>,
}

/// Events that survived filtering and dedup, in merge order.
#[derive(Debug, Clone)]
pub struct MergedCalendar {
    metadata: CalendarMetadata,
    events: Vec<RawEvent>,
}

impl MergedCalendar {
    pub fn new(metadata: CalendarMetadata) -> Self {
        MergedCalendar {
            metadata,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: RawEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[RawEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn product_id(&self) -> &str {
        &self.metadata.product_id
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    pub fn to_ics(&self) -> String {
        ics::generate_ics(self)
    }

    /// Write the calendar to `path`, replacing whatever was there.
    pub fn write_to(&self, path: &Path) -> CalMergeResult<()> {
        std::fs::write(path, self.to_ics())?;
        Ok(())
    }
}
