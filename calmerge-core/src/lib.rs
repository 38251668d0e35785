//! Core of calmerge: merges several iCalendar feeds into one calendar.
//!
//! The pipeline lives in [`merge`]:
//! - [`feed`] fetches and parses each feed
//! - [`filter`] drops events by title keyword
//! - [`dedup`] drops events already seen under the same start and
//!   normalized title ([`title`])
//! - [`calendar`] holds the survivors and writes them out via [`ics`]

pub mod calendar;
pub mod config;
pub mod dedup;
pub mod error;
pub mod feed;
pub mod filter;
pub mod ics;
pub mod merge;
pub mod title;

pub use calendar::{CalendarMetadata, MergedCalendar};
pub use config::MergeConfig;
pub use error::{CalMergeError, CalMergeResult, FeedError};
pub use feed::{FeedFetcher, HttpFetcher};
pub use filter::KeywordFilter;
pub use merge::{MergeOutcome, MergeReport, merge_feeds};
