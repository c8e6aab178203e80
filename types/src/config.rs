//! Carousel configuration records.
//!
//! Every field has a default, so a config section may list only the options
//! it overrides. Validation happens through the field types: a record that
//! deserialized successfully already satisfies `items_per_slide >= 1` and
//! `animation_duration > 0`.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AnimationDuration, ItemsPerSlide, ResponsiveTable, resolve_items_per_slide};

const DEFAULT_GAP_PX: u32 = 16;

/// Which carousel the host shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Bounded,
    Continuous,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown display mode {0:?} (expected \"bounded\" or \"continuous\")")]
pub struct UnknownDisplayMode(pub String);

impl DisplayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Bounded => Self::Continuous,
            Self::Continuous => Self::Bounded,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bounded => "bounded",
            Self::Continuous => "continuous",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounded" => Ok(Self::Bounded),
            "continuous" => Ok(Self::Continuous),
            _ => Err(UnknownDisplayMode(s.to_owned())),
        }
    }
}

/// How the discrete carousel animates between slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    #[default]
    Slide,
    Fade,
    Scale,
}

/// Vertical placement of the previous/next arrows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowPosition {
    #[default]
    Center,
    Top,
    Bottom,
}

/// Visual weight of the arrow buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowVariant {
    #[default]
    Default,
    Ghost,
    Shadow,
}

/// Where the slide indicator dots are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorPosition {
    Top,
    #[default]
    Bottom,
    None,
}

/// Options for the discrete (bounded) carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideConfig {
    pub items_per_slide: ItemsPerSlide,
    /// Gap between items on a slide, in pixels.
    pub gap: u32,
    pub responsive: Option<ResponsiveTable>,
    pub animation_type: AnimationType,
    /// Transition length in seconds.
    pub animation_duration: AnimationDuration,
    /// Autoplay interval in milliseconds. `0` disables autoplay.
    pub autoplay: u64,
    /// Wrap past the first/last slide.
    #[serde(rename = "loop")]
    pub looping: bool,
    pub pause_on_hover: bool,
    pub show_arrows: bool,
    pub arrow_position: ArrowPosition,
    pub arrow_variant: ArrowVariant,
    pub show_indicators: bool,
    pub indicator_position: IndicatorPosition,
    pub keyboard_navigation: bool,
    pub swipe_enabled: bool,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            items_per_slide: ItemsPerSlide::ONE,
            gap: DEFAULT_GAP_PX,
            responsive: None,
            animation_type: AnimationType::default(),
            animation_duration: AnimationDuration::DEFAULT,
            autoplay: 0,
            looping: true,
            pause_on_hover: true,
            show_arrows: true,
            arrow_position: ArrowPosition::default(),
            arrow_variant: ArrowVariant::default(),
            show_indicators: true,
            indicator_position: IndicatorPosition::default(),
            keyboard_navigation: true,
            swipe_enabled: true,
        }
    }
}

impl SlideConfig {
    /// Autoplay interval, or `None` when autoplay is off.
    #[must_use]
    pub fn autoplay_interval(&self) -> Option<Duration> {
        (self.autoplay > 0).then(|| Duration::from_millis(self.autoplay))
    }

    /// Items per slide after applying the responsive table at `viewport_width`.
    #[must_use]
    pub fn effective_items_per_slide(&self, viewport_width: Option<u32>) -> ItemsPerSlide {
        resolve_items_per_slide(
            self.responsive.as_ref(),
            self.items_per_slide,
            viewport_width,
        )
    }

    /// Whether indicators are visible at all.
    #[must_use]
    pub fn indicators_visible(&self) -> bool {
        self.show_indicators && self.indicator_position != IndicatorPosition::None
    }
}

/// Options for the continuous auto-scrolling strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContinuousConfig {
    pub items_per_slide: ItemsPerSlide,
    /// Gap between strip items, in pixels.
    pub gap: u32,
    pub responsive: Option<ResponsiveTable>,
    /// Seconds spent per item; one full loop takes `items * animation_duration`.
    pub animation_duration: AnimationDuration,
    pub pause_on_hover: bool,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            items_per_slide: ItemsPerSlide::ONE,
            gap: DEFAULT_GAP_PX,
            responsive: None,
            animation_duration: AnimationDuration::DEFAULT,
            pause_on_hover: true,
        }
    }
}

impl ContinuousConfig {
    #[must_use]
    pub fn effective_items_per_slide(&self, viewport_width: Option<u32>) -> ItemsPerSlide {
        resolve_items_per_slide(
            self.responsive.as_ref(),
            self.items_per_slide,
            viewport_width,
        )
    }
}
