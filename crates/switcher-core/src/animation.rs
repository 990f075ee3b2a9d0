//! Frame-stepped linear animation of a ratio.
//!
//! The host drives animations by advancing a clock (a frame callback in an
//! application, a fixed step in tests). Values are computed by the pure
//! [`interpolated_ratio`] function, so nothing here depends on a timer.

/// Default duration of an animated ratio change, in seconds.
pub const DEFAULT_DURATION: f64 = 0.2;

/// Linear interpolation from `start` to `end` over the time window `[t0, t1]`.
///
/// Progress is clamped to [0, 1]. At or past `t1` the result is exactly
/// `end`, and a zero-length window jumps straight to `end`.
#[must_use]
pub fn interpolated_ratio(t: f64, t0: f64, t1: f64, start: f64, end: f64) -> f64 {
    let span = t1 - t0;
    let progress = if span > 0.0 {
        ((t - t0) / span).clamp(0.0, 1.0)
    } else {
        1.0
    };
    if progress >= 1.0 {
        end
    } else {
        (end - start).mul_add(progress, start)
    }
}

/// An in-flight linear animation between two ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTween {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Clock time the animation started, in seconds
    pub start_time: f64,
    /// Total duration in seconds
    pub duration: f64,
}

impl RatioTween {
    /// Create a tween starting at clock time `start_time`.
    #[must_use]
    pub const fn new(from: f64, to: f64, start_time: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
        }
    }

    /// Clock time the animation ends.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration.max(0.0)
    }

    /// Value at clock time `now`.
    #[must_use]
    pub fn value_at(&self, now: f64) -> f64 {
        interpolated_ratio(now, self.start_time, self.end_time(), self.from, self.to)
    }

    /// Whether the animation has finished at clock time `now`.
    #[must_use]
    pub fn is_complete_at(&self, now: f64) -> bool {
        now >= self.end_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_interpolated_ratio_endpoints() {
        assert_eq!(interpolated_ratio(0.0, 0.0, 0.2, 0.3, 1.0), 0.3);
        assert_eq!(interpolated_ratio(0.2, 0.0, 0.2, 0.3, 1.0), 1.0);
    }

    #[test]
    fn test_interpolated_ratio_midpoint() {
        let mid = interpolated_ratio(0.1, 0.0, 0.2, 0.0, 1.0);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_interpolated_ratio_clamps_time() {
        assert_eq!(interpolated_ratio(-1.0, 0.0, 0.2, 0.25, 0.75), 0.25);
        assert_eq!(interpolated_ratio(5.0, 0.0, 0.2, 0.25, 0.75), 0.75);
    }

    #[test]
    fn test_interpolated_ratio_zero_window_jumps() {
        assert_eq!(interpolated_ratio(1.0, 1.0, 1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_tween_lifecycle() {
        let tween = RatioTween::new(1.0, 0.0, 2.0, DEFAULT_DURATION);
        assert_eq!(tween.value_at(2.0), 1.0);
        assert!(!tween.is_complete_at(2.1));
        assert!((tween.value_at(2.1) - 0.5).abs() < 1e-9);
        assert!(tween.is_complete_at(2.2));
        assert_eq!(tween.value_at(2.2), 0.0);
    }

    proptest! {
        #[test]
        fn prop_interpolation_stays_between_endpoints(
            t in -1.0f64..2.0,
            start in 0.0f64..=1.0,
            end in 0.0f64..=1.0,
        ) {
            let v = interpolated_ratio(t, 0.0, 1.0, start, end);
            prop_assert!(v >= start.min(end) - 1e-12);
            prop_assert!(v <= start.max(end) + 1e-12);
        }
    }
}
