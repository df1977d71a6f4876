use super::task::Task;
use super::timeline::TimeWindow;

/// Horizontal placement of a dated bar, as fractions of the window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpan {
    pub offset_fraction: f64,
    pub width_fraction: f64,
    /// Width of the progress fill, already scaled by the bar's own width.
    pub progress_fraction: f64,
    /// The task's own interval reached past the window and was clamped.
    pub out_of_range: bool,
}

impl BarSpan {
    pub fn end_fraction(&self) -> f64 {
        self.offset_fraction + self.width_fraction
    }
}

/// How a task's bar is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarLayout {
    /// Missing or unparseable endpoint: a placeholder spanning the whole row.
    Undated,
    Dated(BarSpan),
}

impl BarLayout {
    /// Left edge of the visible bar as a fraction of the track.
    pub fn start_fraction(&self) -> f64 {
        match self {
            BarLayout::Undated => 0.0,
            BarLayout::Dated(span) => span.offset_fraction,
        }
    }

    pub fn is_undated(&self) -> bool {
        matches!(self, BarLayout::Undated)
    }
}

/// Map a task onto the window.
pub fn layout_bar(task: &Task, window: &TimeWindow) -> BarLayout {
    let (Some(start), Some(end)) = (task.start(), task.end()) else {
        return BarLayout::Undated;
    };
    let span = window.span_ms();
    if span <= 0 {
        return BarLayout::Undated;
    }

    let clamped_start = window.clamp(start);
    let clamped_end = window.clamp(end);
    let duration = (clamped_end - clamped_start).num_milliseconds().max(0);

    let offset_fraction = window.fraction(clamped_start);
    // Guard float rounding so offset + width never exceeds the track.
    let width_fraction = (duration as f64 / span as f64).min(1.0 - offset_fraction);
    let progress_fraction = width_fraction * f64::from(task.percent()) / 100.0;

    BarLayout::Dated(BarSpan {
        offset_fraction,
        width_fraction,
        progress_fraction,
        out_of_range: start < window.start || end > window.end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn window() -> TimeWindow {
        TimeWindow::padded(
            Utc.with_ymd_and_hms(2025, 4, 29, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 4, 29, 12, 0, 0).unwrap(),
        )
    }

    fn dated(start: &str, end: &str, progress: u8) -> Task {
        Task::new("t", "T")
            .with_times(
                &format!("2025/04/29 {start}.000 +0000"),
                &format!("2025/04/29 {end}.000 +0000"),
            )
            .with_progress(progress)
    }

    #[test]
    fn proportional_bar() {
        // Window is 09:36..12:24, 168 minutes.
        let task = dated("10:00:00", "12:00:00", 50);
        let BarLayout::Dated(span) = layout_bar(&task, &window()) else {
            panic!("expected a dated bar");
        };
        assert!((span.offset_fraction - 24.0 / 168.0).abs() < 1e-9);
        assert!((span.width_fraction - 120.0 / 168.0).abs() < 1e-9);
        assert!((span.progress_fraction - 60.0 / 168.0).abs() < 1e-9);
        assert!(!span.out_of_range);
    }

    #[test]
    fn fractions_stay_in_unit_range() {
        let w = window();
        for (s, e) in [
            ("09:36:00", "12:24:00"),
            ("10:00:00", "10:00:00"),
            ("11:59:59", "12:24:00"),
            ("09:36:00", "09:36:01"),
        ] {
            let BarLayout::Dated(span) = layout_bar(&dated(s, e, 100), &w) else {
                panic!("expected a dated bar for {s}..{e}");
            };
            assert!(span.offset_fraction >= 0.0);
            assert!(span.width_fraction >= 0.0);
            assert!(span.end_fraction() <= 1.0);
        }
    }

    #[test]
    fn missing_endpoint_is_undated() {
        let w = window();
        let mut task = dated("10:00:00", "11:00:00", 10);
        task.end_time = None;
        assert_eq!(layout_bar(&task, &w), BarLayout::Undated);

        let mut task = dated("10:00:00", "11:00:00", 10);
        task.start_time = None;
        assert_eq!(layout_bar(&task, &w), BarLayout::Undated);

        let mut task = dated("10:00:00", "11:00:00", 10);
        task.start_time = Some("not a timestamp".into());
        assert!(layout_bar(&task, &w).is_undated());
    }

    #[test]
    fn clamps_out_of_range_tasks() {
        let task = dated("06:00:00", "20:00:00", 100);
        let BarLayout::Dated(span) = layout_bar(&task, &window()) else {
            panic!("expected a dated bar");
        };
        assert_eq!(span.offset_fraction, 0.0);
        assert!((span.width_fraction - 1.0).abs() < 1e-9);
        assert!(span.out_of_range);
        assert!(span.progress_fraction <= span.width_fraction);
    }

    #[test]
    fn task_entirely_after_window_has_zero_width() {
        let task = dated("20:00:00", "21:00:00", 100);
        let BarLayout::Dated(span) = layout_bar(&task, &window()) else {
            panic!("expected a dated bar");
        };
        assert_eq!(span.offset_fraction, 1.0);
        assert_eq!(span.width_fraction, 0.0);
        assert_eq!(span.progress_fraction, 0.0);
    }

    #[test]
    fn reversed_interval_has_zero_width() {
        let task = dated("11:00:00", "10:00:00", 50);
        let BarLayout::Dated(span) = layout_bar(&task, &window()) else {
            panic!("expected a dated bar");
        };
        assert_eq!(span.width_fraction, 0.0);
    }

    #[test]
    fn progress_never_overflows_bar() {
        let w = window();
        for progress in [0u8, 1, 33, 50, 99, 100, 180, 255] {
            for (s, e) in [("10:00:00", "11:00:00"), ("08:00:00", "13:00:00")] {
                let BarLayout::Dated(span) = layout_bar(&dated(s, e, progress), &w) else {
                    panic!("expected a dated bar");
                };
                assert!(span.progress_fraction <= span.width_fraction + 1e-12);
            }
        }
    }
}
