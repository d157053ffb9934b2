//! connpass event listing API client.
//!
//! This module provides the HTTP [`EventSource`] implementation: request
//! building, response parsing, and the pacing the public API expects.

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::event::RawEvent;
use crate::source::{BoxFuture, EventSource};
use crate::window::YearMonth;

/// Base URL for the connpass event listing API.
pub const API_BASE_URL: &str = "https://connpass.com/api/v1/event/";

/// Minimum pause before each request, per the API's implicit rate limit.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(5);

/// HTTP client for the connpass event listing endpoint.
///
/// Every fetch is preceded by a fixed pause. The pause is part of the fetch
/// contract: callers iterating many (series, year-month) pairs stay under
/// the upstream rate limit without any coordination of their own, as long as
/// they fetch sequentially.
#[derive(Debug)]
pub struct ConnpassClient {
    http: reqwest::Client,
    base_url: Url,
    fetch_delay: Duration,
}

impl ConnpassClient {
    /// Creates a client against the public API with default pacing.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL.parse().expect("valid base URL"))
    }

    /// Creates a client against a specific base URL.
    pub fn with_base_url(base_url: Url) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url,
            fetch_delay: DEFAULT_FETCH_DELAY,
        }
    }

    /// Builder: overrides the pause inserted before each request.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Builds the listing URL for one (series, year-month) pair.
    fn request_url(&self, series_id: &str, year_month: YearMonth) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("ym", &year_month.to_string())
            .append_pair("series_id", series_id)
            // order=2: most recently updated first. Downstream regroups by
            // series, so the ordering itself is not load-bearing.
            .append_pair("order", "2");
        url
    }

    async fn fetch_inner(&self, series_id: &str, year_month: YearMonth) -> Result<Vec<RawEvent>> {
        tokio::time::sleep(self.fetch_delay).await;

        let url = self.request_url(series_id, year_month);
        debug!(%series_id, %year_month, "fetching event listing");

        let response = self.http.get(url).send().await.map_err(Error::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Network)?;

        if !status.is_success() {
            return Err(Error::upstream(status.as_u16(), body));
        }

        let events = parse_events(&body, series_id)?;
        debug!(%series_id, %year_month, count = events.len(), "fetched events");
        Ok(events)
    }
}

impl Default for ConnpassClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for ConnpassClient {
    fn fetch<'a>(
        &'a self,
        series_id: &'a str,
        year_month: YearMonth,
    ) -> BoxFuture<'a, Result<Vec<RawEvent>>> {
        Box::pin(self.fetch_inner(series_id, year_month))
    }
}

/// Decodes a listing response body into raw events for `series_id`.
pub(crate) fn parse_events(body: &str, series_id: &str) -> Result<Vec<RawEvent>> {
    let listing: ApiEventList = serde_json::from_str(body).map_err(Error::Decode)?;

    let events = listing
        .events
        .into_iter()
        .map(|event| RawEvent {
            series_id: series_id.to_string(),
            series_title: event.series.title,
            title: event.title,
            url: event.event_url,
            started_at: event.started_at,
            ended_at: event.ended_at,
        })
        .collect();

    Ok(events)
}

/// Response from the event listing endpoint.
#[derive(Debug, Deserialize)]
struct ApiEventList {
    #[serde(default)]
    events: Vec<ApiEvent>,
}

/// A single event as the API reports it.
#[derive(Debug, Deserialize)]
struct ApiEvent {
    title: String,
    event_url: String,
    started_at: DateTime<FixedOffset>,
    ended_at: DateTime<FixedOffset>,
    series: ApiSeries,
}

/// The series (event group) an event belongs to.
#[derive(Debug, Deserialize)]
struct ApiSeries {
    title: String,
}
