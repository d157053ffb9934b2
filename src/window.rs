//! Notification time window computation.
//!
//! A run notifies events starting between the invocation time and seven days
//! later. The upstream API is queried per calendar month, so the window also
//! carries the set of year-month partitions it spans: one partition normally,
//! two when the window crosses a month boundary.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Local};

/// Number of days the window reaches into the future.
const WINDOW_DAYS: i64 = 7;

/// A calendar year-month, the upstream API's unit of query granularity.
///
/// Displays as `YYYYMM` with a zero-padded month, the format the listing
/// endpoint expects in its `ym` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Returns the year-month containing the given instant.
    pub fn of(date: DateTime<FixedOffset>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// The forward-looking date range an event must start in to be notified.
///
/// Computed once per run, immutable afterward.
#[derive(Debug, Clone)]
pub struct NotifyWindow {
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
    year_months: Vec<YearMonth>,
}

impl NotifyWindow {
    /// Computes the window starting at `now`.
    ///
    /// The window spans exactly seven days. Both the month of `from` and the
    /// month of `to` become query partitions; near the end of a month the
    /// first partition alone would miss events early in the next one. A
    /// partition may well yield zero in-window events after filtering.
    pub fn compute(now: DateTime<FixedOffset>) -> Self {
        let to = now + Duration::days(WINDOW_DAYS);

        let mut year_months = vec![YearMonth::of(now)];
        let to_ym = YearMonth::of(to);
        if to_ym != year_months[0] {
            year_months.push(to_ym);
        }

        Self {
            from: now,
            to,
            year_months,
        }
    }

    /// Computes the window starting at the local wall clock.
    pub fn current() -> Self {
        Self::compute(Local::now().fixed_offset())
    }

    /// Lower bound of the window (the invocation time).
    pub fn from(&self) -> DateTime<FixedOffset> {
        self.from
    }

    /// Upper bound of the window.
    pub fn to(&self) -> DateTime<FixedOffset> {
        self.to
    }

    /// The year-month partitions the window spans, in chronological order.
    pub fn year_months(&self) -> &[YearMonth] {
        &self.year_months
    }

    /// Returns true if `t` falls inside the window, bounds inclusive.
    pub fn contains(&self, t: DateTime<FixedOffset>) -> bool {
        self.from <= t && t <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTime<FixedOffset> {
        s.parse().unwrap()
    }

    #[test]
    fn window_spans_exactly_seven_days() {
        let window = NotifyWindow::compute(dt("2024-03-05T09:30:00+09:00"));
        assert_eq!(window.to() - window.from(), Duration::days(7));
    }

    #[test]
    fn single_partition_within_one_month() {
        let window = NotifyWindow::compute(dt("2024-03-05T09:30:00+09:00"));
        let partitions: Vec<String> = window.year_months().iter().map(|ym| ym.to_string()).collect();
        assert_eq!(partitions, vec!["202403"]);
    }

    #[test]
    fn two_partitions_when_crossing_month_boundary() {
        let window = NotifyWindow::compute(dt("2024-03-28T12:00:00+09:00"));
        let partitions: Vec<String> = window.year_months().iter().map(|ym| ym.to_string()).collect();
        assert_eq!(partitions, vec!["202403", "202404"]);
    }

    #[test]
    fn two_partitions_when_crossing_year_boundary() {
        let window = NotifyWindow::compute(dt("2024-12-29T00:00:00+09:00"));
        let partitions: Vec<String> = window.year_months().iter().map(|ym| ym.to_string()).collect();
        assert_eq!(partitions, vec!["202412", "202501"]);
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let now = dt("2024-03-05T09:30:00+09:00");
        let window = NotifyWindow::compute(now);

        assert!(window.contains(window.from()));
        assert!(window.contains(window.to()));
        assert!(window.contains(dt("2024-03-08T00:00:00+09:00")));
        assert!(!window.contains(now - Duration::seconds(1)));
        assert!(!window.contains(window.to() + Duration::seconds(1)));
    }

    #[test]
    fn contains_compares_instants_across_offsets() {
        let window = NotifyWindow::compute(dt("2024-03-05T09:30:00+09:00"));
        // Same instant as `from`, expressed in UTC.
        assert!(window.contains(dt("2024-03-05T00:30:00+00:00")));
    }

    #[test]
    fn year_month_display_pads_month() {
        let ym = YearMonth {
            year: 2024,
            month: 3,
        };
        assert_eq!(ym.to_string(), "202403");

        let ym = YearMonth {
            year: 2024,
            month: 11,
        };
        assert_eq!(ym.to_string(), "202411");
    }
}
