//! Duplicate detection across feeds.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::ics::EventStart;
use crate::title::normalize_title;

/// Start component of a [`DedupKey`].
///
/// Starts pinned to a moment compare as instants, so a UTC start and the
/// same moment written with a TZID are equal. All-day and floating starts,
/// and zoned starts with an unknown TZID, compare as written and never
/// equal an instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StartKey {
    Instant(DateTime<Utc>),
    Written(EventStart),
}

impl From<EventStart> for StartKey {
    fn from(start: EventStart) -> Self {
        match start.instant() {
            Some(instant) => StartKey::Instant(instant),
            None => StartKey::Written(start),
        }
    }
}

/// Identity of an event for dedup purposes: start plus normalized title.
/// Location, description and every other property are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub start: StartKey,
    pub title: String,
}

impl DedupKey {
    pub fn new(start: EventStart, raw_title: &str) -> Self {
        DedupKey {
            start: StartKey::from(start),
            title: normalize_title(raw_title),
        }
    }
}

/// Keys seen during one merge run.
#[derive(Debug, Default)]
pub struct SeenEvents {
    keys: HashSet<DedupKey>,
}

impl SeenEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: DedupKey) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
