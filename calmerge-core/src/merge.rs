//! The merge pipeline: ingest each feed, drop filtered and duplicate
//! events, collect the rest into one calendar.

use tracing::{debug, info, warn};

use crate::calendar::{CalendarMetadata, MergedCalendar};
use crate::dedup::{DedupKey, SeenEvents};
use crate::feed::{FeedFetcher, ingest_feed};
use crate::filter::KeywordFilter;
use crate::ics::RawEvent;

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Events extracted from all feeds, whatever happened to them.
    pub examined: usize,
    pub retained: usize,
    pub filtered: usize,
    pub duplicates: usize,
    pub skipped_no_start: usize,
    pub feeds_loaded: usize,
    pub feeds_failed: usize,
}

#[derive(Debug)]
pub struct MergeOutcome {
    pub calendar: MergedCalendar,
    pub report: MergeReport,
}

/// What happened to a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDecision {
    /// No usable DTSTART; dropped without being counted as filtered or
    /// duplicate.
    NoStart,
    Filtered { keyword: String },
    Duplicate,
    Kept,
}

/// Accumulates events for one merge run.
pub struct EventMerger<'a> {
    filter: &'a KeywordFilter,
    seen: SeenEvents,
    calendar: MergedCalendar,
    report: MergeReport,
}

impl<'a> EventMerger<'a> {
    pub fn new(filter: &'a KeywordFilter, metadata: CalendarMetadata) -> Self {
        EventMerger {
            filter,
            seen: SeenEvents::new(),
            calendar: MergedCalendar::new(metadata),
            report: MergeReport::default(),
        }
    }

    /// Run one event through start check, keyword filter and dedup.
    pub fn offer(&mut self, event: RawEvent) -> MergeDecision {
        self.report.examined += 1;

        let Some(start) = event.start.clone() else {
            debug!(title = event.title(), "Event has no start time, skipping");
            self.report.skipped_no_start += 1;
            return MergeDecision::NoStart;
        };

        if let Some(keyword) = self.filter.matching_keyword(event.title()) {
            info!("Filtering event because of keyword '{}': {}", keyword, event.title());
            self.report.filtered += 1;
            return MergeDecision::Filtered {
                keyword: keyword.to_string(),
            };
        }

        if !self.seen.insert(DedupKey::new(start.clone(), event.title())) {
            info!("Duplicate, skipping: {} @ {}", event.title(), start);
            self.report.duplicates += 1;
            return MergeDecision::Duplicate;
        }

        self.calendar.push(event);
        self.report.retained += 1;
        MergeDecision::Kept
    }

    pub fn report(&self) -> &MergeReport {
        &self.report
    }

    pub fn finish(self) -> MergeOutcome {
        MergeOutcome {
            calendar: self.calendar,
            report: self.report,
        }
    }
}

/// Merge `feeds` in order into one calendar.
///
/// A feed that cannot be fetched or parsed is logged and skipped. Output
/// order is feed order, then document order within each feed.
pub async fn merge_feeds<F, S>(
    fetcher: &F,
    feeds: &[S],
    filter: &KeywordFilter,
    metadata: CalendarMetadata,
) -> MergeOutcome
where
    F: FeedFetcher,
    S: AsRef<str>,
{
    let mut merger = EventMerger::new(filter, metadata);

    for url in feeds {
        let url = url.as_ref();
        info!("Loading {} ...", url);

        let events = match ingest_feed(fetcher, url).await {
            Ok(events) => events,
            Err(e) => {
                warn!("Skipping feed: {}", e);
                merger.report.feeds_failed += 1;
                continue;
            }
        };
        merger.report.feeds_loaded += 1;

        for event in events {
            merger.offer(event);
        }
    }

    let outcome = merger.finish();
    debug!(report = ?outcome.report, "Merge finished");
    outcome
}
