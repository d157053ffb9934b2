//! Event data model.
//!
//! [`RawEvent`] is the upstream record as one fetch reports it, still scoped
//! to the series that returned it. [`Event`] is the normalized unit with the
//! series identity stripped out; [`SeriesEvents`] carries that identity at
//! the container level instead.

use chrono::{DateTime, FixedOffset};

/// An upstream event record, scoped to the (series, year-month) fetch that
/// produced it.
///
/// Not retained after conversion into an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    /// Identifier of the series the fetch was scoped to.
    pub series_id: String,
    /// Title of that series, as the upstream reports it.
    pub series_title: String,
    /// The event title.
    pub title: String,
    /// Public page for the event.
    pub url: String,
    /// When the event starts, in the upstream's reported offset.
    pub started_at: DateTime<FixedOffset>,
    /// When the event ends.
    pub ended_at: DateTime<FixedOffset>,
}

impl RawEvent {
    /// Strips the series identity; it is carried by [`SeriesEvents`] instead.
    pub fn into_event(self) -> Event {
        Event {
            title: self.title,
            url: self.url,
            started_at: self.started_at,
            ended_at: self.ended_at,
        }
    }
}

/// A normalized event, immutable once created.
///
/// Equality and hashing cover every field; the aggregator deduplicates on
/// the full tuple so no field can silently differ between "duplicates".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    pub title: String,
    pub url: String,
    pub started_at: DateTime<FixedOffset>,
    pub ended_at: DateTime<FixedOffset>,
}

/// All in-window events for one series.
///
/// The aggregator only ever builds this for a series with at least one
/// qualifying event, and `events` has set semantics on the full event tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEvents {
    pub series_id: String,
    pub series_title: String,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> RawEvent {
        RawEvent {
            series_id: "123".to_string(),
            series_title: "Tokyo Rust Meetup".to_string(),
            title: "Rust LT Night #12".to_string(),
            url: "https://example.connpass.com/event/9999/".to_string(),
            started_at: "2024-03-05T19:00:00+09:00".parse().unwrap(),
            ended_at: "2024-03-05T21:00:00+09:00".parse().unwrap(),
        }
    }

    #[test]
    fn into_event_drops_series_identity() {
        let event = sample_raw().into_event();
        assert_eq!(event.title, "Rust LT Night #12");
        assert_eq!(event.url, "https://example.connpass.com/event/9999/");
    }

    #[test]
    fn events_equal_on_full_tuple() {
        let a = sample_raw().into_event();
        let b = sample_raw().into_event();
        assert_eq!(a, b);

        let mut c = sample_raw();
        c.url = "https://example.connpass.com/event/10000/".to_string();
        assert_ne!(a, c.into_event());
    }
}
