//! Carousel runtime for Marquee.
//!
//! Wraps the pure engines from `marquee-types` in mounted components that own
//! their timers and observers. Nothing here touches a terminal; hosts feed in
//! [`HostSignal`]s and frame deltas and read state back out for rendering.

mod autoplay;
mod carousel;
mod continuous;
mod showcase;
mod subscribers;

pub use autoplay::AutoplayTimer;
pub use carousel::Carousel;
pub use continuous::ContinuousCarousel;
pub use showcase::{ActiveCarousel, Showcase};
pub use subscribers::{Subscribers, SubscriptionId};

pub use marquee_types::ui::{
    AnimPhase, ArrowKey, HostSignal, NavIntent, Transition, TransitionFrame, UiOptions,
    VisualState,
};
pub use marquee_types::{
    AnimationDuration, AnimationType, ArrowPosition, ArrowVariant, BoundedCarousel,
    ContinuousConfig, ContinuousScroll, DisplayMode, IndicatorPosition, ItemsPerSlide,
    ResponsiveTable, SlideChanged, SlideConfig, SlideDirection,
};
