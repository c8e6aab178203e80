//! Core carousel types for Marquee.
//!
//! This crate contains the carousel domain types and both navigation engines
//! with no IO, no async, and minimal dependencies. Hosts own the clock and the
//! input devices; everything here is a synchronous state transition.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod bounded;
mod config;
mod continuous;
mod responsive;
pub mod ui;

pub use bounded::{BoundedCarousel, SlideChanged, SlideDirection};
pub use config::{
    AnimationType, ArrowPosition, ArrowVariant, ContinuousConfig, DisplayMode, IndicatorPosition,
    SlideConfig, UnknownDisplayMode,
};
pub use continuous::{ContinuousScroll, item_width, strip};
pub use responsive::{InvalidBreakpoint, ResponsiveTable, resolve_items_per_slide};

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Items per slide
// ============================================================================

/// Number of items shown side by side on one slide. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ItemsPerSlide(NonZeroUsize);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("items per slide must be at least 1")]
pub struct InvalidItemsPerSlide;

impl ItemsPerSlide {
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    pub fn new(value: usize) -> Result<Self, InvalidItemsPerSlide> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(InvalidItemsPerSlide)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Number of slides needed to show `item_count` items, `ceil(n / k)`.
    #[must_use]
    pub const fn slide_count(self, item_count: usize) -> usize {
        item_count.div_ceil(self.0.get())
    }
}

impl Default for ItemsPerSlide {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<usize> for ItemsPerSlide {
    type Error = InvalidItemsPerSlide;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemsPerSlide> for usize {
    fn from(value: ItemsPerSlide) -> Self {
        value.get()
    }
}

// ============================================================================
// Animation duration
// ============================================================================

/// Length of an animation in seconds. Finite, strictly positive and
/// representable as a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnimationDuration(f64);

#[derive(Debug, Error, PartialEq)]
#[error("animation duration must be a positive number of seconds, got {0}")]
pub struct InvalidAnimationDuration(pub f64);

impl AnimationDuration {
    /// Default transition length (and default per-item pace for continuous scroll).
    pub const DEFAULT: Self = Self(0.5);

    pub fn from_secs(secs: f64) -> Result<Self, InvalidAnimationDuration> {
        match Duration::try_from_secs_f64(secs) {
            Ok(duration) if !duration.is_zero() => Ok(Self(secs)),
            _ => Err(InvalidAnimationDuration(secs)),
        }
    }

    #[must_use]
    pub const fn as_secs(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::try_from_secs_f64(self.0).unwrap_or(Duration::MAX)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for AnimationDuration {
    type Error = InvalidAnimationDuration;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_secs(value)
    }
}

impl From<AnimationDuration> for f64 {
    fn from(value: AnimationDuration) -> Self {
        value.0
    }
}
