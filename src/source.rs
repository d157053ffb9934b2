//! EventSource trait definition.
//!
//! This module defines [`EventSource`], the abstraction over the upstream
//! event listing. One call covers exactly one (series, year-month) pair
//! because the upstream API cannot be queried by arbitrary date range; the
//! aggregator iterates the pairs and merges the results.

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::event::RawEvent;
use crate::window::YearMonth;

/// A boxed future for async trait methods, keeping the trait object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A source of raw event listings.
///
/// Implementations are expected to pace their own requests; the aggregator
/// calls `fetch` strictly sequentially and relies on that pacing to respect
/// the upstream rate limit across the whole (series × year-month) matrix.
pub trait EventSource: Send + Sync {
    /// Fetches all listed events for `series_id` within `year_month`.
    ///
    /// Zero listed events is a normal, empty result, not an error.
    ///
    /// # Errors
    ///
    /// [`Error::Upstream`] on a non-success status, [`Error::Decode`] on an
    /// unexpected body, [`Error::Network`] on transport failure.
    ///
    /// [`Error::Upstream`]: crate::error::Error::Upstream
    /// [`Error::Decode`]: crate::error::Error::Decode
    /// [`Error::Network`]: crate::error::Error::Network
    fn fetch<'a>(
        &'a self,
        series_id: &'a str,
        year_month: YearMonth,
    ) -> BoxFuture<'a, Result<Vec<RawEvent>>>;
}
