//! Cross-partition event aggregation.
//!
//! Drives one fetch per (series, year-month) pair, applies the window
//! filter, and folds the partial results into one deduplicated
//! [`SeriesEvents`] per series.

use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::event::{Event, SeriesEvents};
use crate::filter::filter_in_window;
use crate::source::EventSource;
use crate::window::NotifyWindow;

/// Fetches, filters, and merges events for every configured series.
///
/// Fetches run strictly sequentially so the source's pacing holds across the
/// whole matrix. Any fetch error aborts the run immediately; no partial
/// result is returned.
///
/// The output holds one entry per series with at least one in-window event,
/// in configured series order. A series with nothing in the window produces
/// no entry at all. Within a series, events from all partitions are merged
/// by set union on the full (title, url, started_at, ended_at) tuple — a
/// window crossing a month boundary makes the same event show up in both
/// partition fetches — and then sorted by start time.
pub async fn aggregate(
    source: &dyn EventSource,
    series_ids: &[String],
    window: &NotifyWindow,
) -> Result<Vec<SeriesEvents>> {
    let mut merged = Vec::new();

    for series_id in series_ids {
        let mut seen: HashSet<Event> = HashSet::new();
        let mut series_title: Option<String> = None;
        let mut events: Vec<Event> = Vec::new();

        for &year_month in window.year_months() {
            let fetched = source.fetch(series_id, year_month).await?;
            let in_window = filter_in_window(fetched, window);
            debug!(%series_id, %year_month, kept = in_window.len(), "filtered partition");

            for raw in in_window {
                // The upstream title is stable within a run; any partition
                // that contributed an event can supply it.
                if series_title.is_none() {
                    series_title = Some(raw.series_title.clone());
                }
                let event = raw.into_event();
                if seen.insert(event.clone()) {
                    events.push(event);
                }
            }
        }

        let Some(series_title) = series_title else {
            continue;
        };

        events.sort_by_key(|event| event.started_at);
        merged.push(SeriesEvents {
            series_id: series_id.clone(),
            series_title,
            events,
        });
    }

    Ok(merged)
}
