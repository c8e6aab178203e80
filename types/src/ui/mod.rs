//! Presentation state shared by the engine and the terminal host.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod input;
mod transition;

pub use animation::{AnimPhase, ease_in_out};
pub use input::{
    ArrowKey, HostSignal, NavIntent, SWIPE_THRESHOLD_PX, drag_intent, key_intent,
};
pub use transition::{
    SLIDE_DISTANCE, SlideVariants, Transition, TransitionFrame, VisualState, variants,
};

/// Rendering preferences the host applies on top of carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip slide transitions and render the settled slide immediately.
    pub reduced_motion: bool,
}
