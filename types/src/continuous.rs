//! Continuous auto-scroll strip.
//!
//! The strip is the item list rendered twice back to back. Translating it from
//! 0 to -50% of its length over one loop and then snapping back to 0 is
//! seamless because the second half is identical to the first.

use std::time::Duration;

use crate::{AnimationDuration, ItemsPerSlide};

/// Time-driven offset over a duplicated item strip.
///
/// The position is stored as a phase within the loop, in whole nanoseconds,
/// so a full loop of ticks lands exactly back on zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousScroll {
    item_count: usize,
    per_item: AnimationDuration,
    pause_on_hover: bool,
    hovered: bool,
    phase: Duration,
}

impl ContinuousScroll {
    #[must_use]
    pub fn new(item_count: usize, per_item: AnimationDuration, pause_on_hover: bool) -> Self {
        Self {
            item_count,
            per_item,
            pause_on_hover,
            hovered: false,
            phase: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn per_item_duration(&self) -> AnimationDuration {
        self.per_item
    }

    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Time for one full loop: `item_count * per_item`.
    #[must_use]
    pub fn loop_duration(&self) -> Duration {
        let count = u32::try_from(self.item_count).unwrap_or(u32::MAX);
        self.per_item.as_duration().saturating_mul(count)
    }

    /// Whether ticks currently move the strip.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.item_count > 0 && !(self.pause_on_hover && self.hovered)
    }

    /// Move the strip forward by `delta`. No-op while paused or empty.
    pub fn advance(&mut self, delta: Duration) {
        if !self.is_running() {
            return;
        }
        let loop_nanos = self.loop_duration().as_nanos();
        if loop_nanos == 0 {
            return;
        }
        let next = (self.phase.as_nanos() + delta.as_nanos()) % loop_nanos;
        self.phase = nanos_to_duration(next);
    }

    /// Position within the loop, in `[0, 1)`.
    #[must_use]
    pub fn offset(&self) -> f64 {
        let total = self.loop_duration();
        if total.is_zero() {
            return 0.0;
        }
        self.phase.as_secs_f64() / total.as_secs_f64()
    }

    /// Strip translation as a fraction of the full (2x) strip length, in `(-0.5, 0]`.
    #[must_use]
    pub fn translate_fraction(&self) -> f64 {
        -0.5 * self.offset()
    }

    /// Record a pointer enter/leave. Returns `true` only on an actual edge.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool) {
        self.pause_on_hover = pause_on_hover;
    }

    /// Change the item count, keeping the normalized offset.
    pub fn set_item_count(&mut self, item_count: usize) {
        let offset = self.offset();
        self.item_count = item_count;
        self.restore_offset(offset);
    }

    /// Change the per-item pace, keeping the normalized offset.
    pub fn set_per_item_duration(&mut self, per_item: AnimationDuration) {
        let offset = self.offset();
        self.per_item = per_item;
        self.restore_offset(offset);
    }

    fn restore_offset(&mut self, offset: f64) {
        let total = self.loop_duration();
        if total.is_zero() {
            self.phase = Duration::ZERO;
            return;
        }
        let phase = total.mul_f64(offset.clamp(0.0, 1.0));
        self.phase = if phase >= total { Duration::ZERO } else { phase };
    }
}

fn nanos_to_duration(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// The rendered strip: every item twice, in order.
pub fn strip<T>(items: &[T]) -> impl Iterator<Item = &T> + '_ {
    items.iter().chain(items.iter())
}

/// Width of one strip item: `(viewport - gap * (k - 1)) / k`, never negative.
#[must_use]
pub fn item_width(viewport_width: f64, gap: u32, items_per_slide: ItemsPerSlide) -> f64 {
    let k = items_per_slide.get() as f64;
    let gaps = f64::from(gap) * (k - 1.0);
    ((viewport_width - gaps) / k).max(0.0)
}
