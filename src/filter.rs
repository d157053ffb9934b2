//! Client-side date-window filtering.
//!
//! The upstream API can only be queried by calendar month, so the window
//! bounds are applied here after each fetch.

use chrono::{DateTime, FixedOffset};

use crate::event::RawEvent;
use crate::window::NotifyWindow;

/// Retains events whose start time falls within the given bounds.
///
/// Both bounds are inclusive. An absent bound leaves that side open; with
/// neither bound set, every event passes.
pub fn filter_events(
    events: Vec<RawEvent>,
    from: Option<DateTime<FixedOffset>>,
    to: Option<DateTime<FixedOffset>>,
) -> Vec<RawEvent> {
    events
        .into_iter()
        .filter(|event| {
            from.is_none_or(|from| from <= event.started_at)
                && to.is_none_or(|to| event.started_at <= to)
        })
        .collect()
}

/// Retains events starting inside `window`, bounds inclusive.
pub fn filter_in_window(events: Vec<RawEvent>, window: &NotifyWindow) -> Vec<RawEvent> {
    filter_events(events, Some(window.from()), Some(window.to()))
}
