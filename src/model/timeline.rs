use chrono::{DateTime, Duration, Utc};

use super::task::Task;

/// Number of ticks spread between the earliest and latest timestamp before
/// padding.
pub const BASE_TICK_COUNT: i32 = 6;

/// Interval used when every timestamp in the tree is the same instant.
pub const FALLBACK_INTERVAL_MS: i64 = 30 * 60 * 1000;

/// Span of the window when the tree carries no timestamps at all.
pub const EMPTY_SPAN_MS: i64 = 3 * 60 * 60 * 1000;

/// The padded time range every bar is positioned against.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub interval: Duration,
    pub ticks: Vec<DateTime<Utc>>,
}

impl TimeWindow {
    /// Derive the window from every parseable timestamp in the tree.
    /// `now` is only read when the tree has no timestamps.
    pub fn from_tree(root: &Task, now: DateTime<Utc>) -> Self {
        let mut min: Option<DateTime<Utc>> = None;
        let mut max: Option<DateTime<Utc>> = None;
        for instant in root.iter().flat_map(|t| [t.start(), t.end()]).flatten() {
            min = Some(min.map_or(instant, |m| m.min(instant)));
            max = Some(max.map_or(instant, |m| m.max(instant)));
        }

        let (min, max) = match (min, max) {
            (Some(min), Some(max)) => (min, max),
            _ => (now, now + Duration::milliseconds(EMPTY_SPAN_MS)),
        };
        Self::padded(min, max)
    }

    /// Spread [`BASE_TICK_COUNT`] ticks over `[min, max]`, then pad one
    /// interval on each side. A side that would leave chrono's range stays
    /// unpadded, and ticks stop at the last representable instant.
    pub fn padded(min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        let total_ms = (max - min).num_milliseconds();
        let interval_ms = if total_ms > 0 {
            total_ms / i64::from(BASE_TICK_COUNT - 1)
        } else {
            FALLBACK_INTERVAL_MS
        };
        // Sub-5ms spans round down to zero.
        let interval = Duration::milliseconds(interval_ms.max(1));

        let start = min.checked_sub_signed(interval).unwrap_or(min);
        let end = max.checked_add_signed(interval).unwrap_or(max);
        let ticks = (0..BASE_TICK_COUNT + 2)
            .map_while(|i| interval.checked_mul(i).and_then(|d| start.checked_add_signed(d)))
            .take_while(|tick| *tick <= end)
            .collect();

        Self {
            start,
            end,
            interval,
            ticks,
        }
    }

    pub fn span_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Pull an instant into the window.
    pub fn clamp(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.clamp(self.start, self.end)
    }

    /// Position of an instant as a fraction of the window, clamped to [0, 1].
    pub fn fraction(&self, instant: DateTime<Utc>) -> f64 {
        let span = self.span_ms();
        if span <= 0 {
            return 0.0;
        }
        let offset = (self.clamp(instant) - self.start).num_milliseconds();
        (offset as f64 / span as f64).clamp(0.0, 1.0)
    }
}
