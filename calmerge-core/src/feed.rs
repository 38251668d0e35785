//! Feed retrieval.
//!
//! A feed is any URL serving an iCalendar document. Retrieval goes through
//! [`FeedFetcher`] so the merge pipeline can run against canned documents in
//! tests; [`HttpFetcher`] is the real implementation.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::FeedError;
use crate::ics::{self, RawEvent};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Source of raw calendar documents.
#[allow(async_fn_in_trait)]
pub trait FeedFetcher {
    /// Retrieve the document body served at `url`.
    async fn fetch(&self, url: &str) -> Result<String, FeedError>;
}

/// Fetches feeds over HTTP(S) with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("calmerge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpFetcher { client })
    }
}

impl FeedFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        let target = feed_url(url)?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|source| FeedError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FeedError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

/// Parse a configured feed URL, rewriting `webcal://` subscriptions to
/// `https://`.
pub fn feed_url(raw: &str) -> Result<Url, FeedError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| FeedError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let rewritten = match trimmed.split_once("://") {
        Some((scheme, rest))
            if scheme.eq_ignore_ascii_case("webcal") || scheme.eq_ignore_ascii_case("webcals") =>
        {
            format!("https://{}", rest)
        }
        _ => trimmed.to_string(),
    };

    let url = Url::parse(&rewritten).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Fetch one feed and extract its events.
pub async fn ingest_feed<F: FeedFetcher>(fetcher: &F, url: &str) -> Result<Vec<RawEvent>, FeedError> {
    let body = fetcher.fetch(url).await?;

    let events = ics::parse_events(&body).map_err(|e| FeedError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    debug!(url, events = events.len(), "Parsed feed");
    Ok(events)
}
