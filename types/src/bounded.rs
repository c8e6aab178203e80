//! Discrete slide navigation.
//!
//! `BoundedCarousel` tracks which slide is visible over a fixed number of
//! slides derived from the item count and items per slide. Every mutating
//! operation returns the [`SlideChanged`] it caused (if any) so the owner can
//! forward it to observers before doing anything else.

use std::ops::Range;

use crate::ItemsPerSlide;

/// Sign of the most recent navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Backward,
    #[default]
    None,
    Forward,
}

impl SlideDirection {
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::None => 0,
            Self::Forward => 1,
        }
    }
}

/// Emitted whenever the current slide index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideChanged {
    pub index: usize,
    pub direction: SlideDirection,
}

/// Navigation state of a discrete carousel.
///
/// # Invariant
///
/// `current_index < slide_count()` whenever `slide_count() > 0`, and
/// `current_index == 0` when there are no slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCarousel {
    item_count: usize,
    items_per_slide: ItemsPerSlide,
    current_index: usize,
    direction: SlideDirection,
    looping: bool,
    hovered: bool,
}

impl BoundedCarousel {
    #[must_use]
    pub fn new(item_count: usize, items_per_slide: ItemsPerSlide, looping: bool) -> Self {
        Self {
            item_count,
            items_per_slide,
            current_index: 0,
            direction: SlideDirection::None,
            looping,
            hovered: false,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.items_per_slide.slide_count(self.item_count)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn items_per_slide(&self) -> ItemsPerSlide {
        self.items_per_slide
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.looping || self.current_index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.looping || self.current_index + 1 < self.slide_count()
    }

    /// Jump to `index`.
    ///
    /// Returns `None` when `index` is already current, and also when it is
    /// outside `0..slide_count()`: out-of-range targets are ignored rather
    /// than clamped or wrapped.
    pub fn go_to_slide(&mut self, index: usize) -> Option<SlideChanged> {
        if index == self.current_index || index >= self.slide_count() {
            return None;
        }

        self.direction = if index > self.current_index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.current_index = index;
        Some(SlideChanged {
            index,
            direction: self.direction,
        })
    }

    /// Advance one slide, wrapping to the first slide when looping.
    pub fn next_slide(&mut self) -> Option<SlideChanged> {
        let last = self.slide_count().checked_sub(1)?;
        if self.current_index == last {
            if self.looping {
                self.go_to_slide(0)
            } else {
                None
            }
        } else {
            self.go_to_slide(self.current_index + 1)
        }
    }

    /// Go back one slide, wrapping to the last slide when looping.
    pub fn prev_slide(&mut self) -> Option<SlideChanged> {
        let last = self.slide_count().checked_sub(1)?;
        if self.current_index == 0 {
            if self.looping {
                self.go_to_slide(last)
            } else {
                None
            }
        } else {
            self.go_to_slide(self.current_index - 1)
        }
    }

    /// Item indices shown on the current slide.
    ///
    /// The last slide may be shorter than `items_per_slide` when the item
    /// count does not divide evenly.
    #[must_use]
    pub fn current_range(&self) -> Range<usize> {
        let per_slide = self.items_per_slide.get();
        let start = self
            .current_index
            .saturating_mul(per_slide)
            .min(self.item_count);
        let end = start.saturating_add(per_slide).min(self.item_count);
        start..end
    }

    /// Slice of `items` shown on the current slide.
    #[must_use]
    pub fn current_slide_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.current_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Update the item count and clamp the index into the new slide range.
    pub fn set_item_count(&mut self, item_count: usize) -> Option<SlideChanged> {
        self.item_count = item_count;
        self.clamp_index()
    }

    /// Update items per slide and clamp the index into the new slide range.
    pub fn set_items_per_slide(&mut self, items_per_slide: ItemsPerSlide) -> Option<SlideChanged> {
        self.items_per_slide = items_per_slide;
        self.clamp_index()
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Record a pointer enter/leave. Returns `true` only on an actual edge.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    fn clamp_index(&mut self) -> Option<SlideChanged> {
        let max_index = self.slide_count().saturating_sub(1);
        if self.current_index <= max_index {
            return None;
        }
        self.current_index = max_index;
        self.direction = SlideDirection::Backward;
        Some(SlideChanged {
            index: max_index,
            direction: self.direction,
        })
    }
}
