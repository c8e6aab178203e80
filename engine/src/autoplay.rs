//! Recurring autoplay timer.

use std::time::Duration;

/// Fires once per `interval` of accumulated frame time.
///
/// Owned by a mounted carousel; dropping it is how autoplay is torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    /// `interval` must be non-zero; callers only arm a timer for a positive
    /// autoplay setting.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Restart the current interval from zero.
    pub fn rearm(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Accumulate `delta`. When the interval completes the timer restarts and
    /// the time left over past the firing point is returned.
    pub fn advance(&mut self, delta: Duration) -> Option<Duration> {
        let total = self.elapsed.saturating_add(delta);
        if total >= self.interval {
            self.elapsed = Duration::ZERO;
            Some(total - self.interval)
        } else {
            self.elapsed = total;
            None
        }
    }

    /// Fraction of the current interval already elapsed.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.interval.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.interval.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_full_interval() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(1000));
        assert_eq!(timer.advance(Duration::from_millis(999)), None);
        assert_eq!(
            timer.advance(Duration::from_millis(1)),
            Some(Duration::ZERO)
        );
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn returns_leftover_past_firing_point() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(1000));
        timer.advance(Duration::from_millis(600));
        assert_eq!(
            timer.advance(Duration::from_millis(2500)),
            Some(Duration::from_millis(2100))
        );
    }

    #[test]
    fn rearm_restarts_interval() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(1000));
        timer.advance(Duration::from_millis(900));
        timer.rearm();
        assert_eq!(timer.advance(Duration::from_millis(900)), None);
        assert!((timer.progress() - 0.9).abs() < 1e-6);
    }
}
