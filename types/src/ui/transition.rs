//! Slide transition variants and the running transition between two slides.
//!
//! The outgoing slide finishes its exit before the incoming slide starts its
//! enter, so a transition lasts twice the configured animation duration.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, ease_in_out, normalized_progress};
use crate::{AnimationDuration, AnimationType, SlideDirection};

/// Horizontal travel of the `slide` variant, in pixels.
pub const SLIDE_DISTANCE: f32 = 1000.0;

/// Visual parameters of a slide at one point of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Horizontal displacement in pixels.
    pub x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl VisualState {
    pub const CENTER: Self = Self {
        x: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: self.x + (to.x - self.x) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVariants {
    pub enter: VisualState,
    pub center: VisualState,
    pub exit: VisualState,
}

/// Enter/center/exit visuals for an animation type and navigation direction.
#[must_use]
pub fn variants(kind: AnimationType, direction: SlideDirection) -> SlideVariants {
    let center = VisualState::CENTER;
    match kind {
        AnimationType::Fade => {
            let hidden = VisualState {
                opacity: 0.0,
                ..center
            };
            SlideVariants {
                enter: hidden,
                center,
                exit: hidden,
            }
        }
        AnimationType::Scale => {
            let shrunk = VisualState {
                x: 0.0,
                opacity: 0.0,
                scale: 0.8,
            };
            SlideVariants {
                enter: shrunk,
                center,
                exit: shrunk,
            }
        }
        AnimationType::Slide => {
            let sign = direction.sign();
            let enter_x = if sign > 0 { SLIDE_DISTANCE } else { -SLIDE_DISTANCE };
            let exit_x = if sign < 0 { SLIDE_DISTANCE } else { -SLIDE_DISTANCE };
            SlideVariants {
                enter: VisualState {
                    x: enter_x,
                    opacity: 0.0,
                    scale: 1.0,
                },
                center,
                exit: VisualState {
                    x: exit_x,
                    opacity: 0.0,
                    scale: 1.0,
                },
            }
        }
    }
}

/// What to draw for a transition at the current instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionFrame {
    /// The previous slide is leaving.
    Exiting { slide: usize, visual: VisualState },
    /// The new slide is arriving.
    Entering { slide: usize, visual: VisualState },
    /// Nothing left to animate; draw the current slide as-is.
    Settled,
}

/// A running slide-to-slide transition, advanced by frame deltas.
///
/// Purely presentational: it never feeds back into navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: usize,
    to: usize,
    variants: SlideVariants,
    half: Duration,
    timer: EffectTimer,
}

impl Transition {
    #[must_use]
    pub fn new(
        from: usize,
        to: usize,
        kind: AnimationType,
        direction: SlideDirection,
        duration: AnimationDuration,
    ) -> Self {
        let half = duration.as_duration();
        Self {
            from,
            to,
            variants: variants(kind, direction),
            half,
            timer: EffectTimer::new(half.saturating_mul(2)),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn from_slide(&self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to_slide(&self) -> usize {
        self.to
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        if self.timer.is_finished() {
            return TransitionFrame::Settled;
        }
        let elapsed = self.timer.elapsed();
        if elapsed < self.half {
            let t = ease_in_out(normalized_progress(elapsed, self.half));
            TransitionFrame::Exiting {
                slide: self.from,
                visual: self.variants.center.lerp(self.variants.exit, t),
            }
        } else {
            let t = ease_in_out(normalized_progress(
                elapsed.saturating_sub(self.half),
                self.half,
            ));
            TransitionFrame::Entering {
                slide: self.to,
                visual: self.variants.enter.lerp(self.variants.center, t),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_second() -> AnimationDuration {
        AnimationDuration::from_secs(0.5).unwrap()
    }

    #[test]
    fn fade_only_touches_opacity() {
        let v = variants(AnimationType::Fade, SlideDirection::Forward);
        assert_eq!(v.enter.opacity, 0.0);
        assert_eq!(v.exit.opacity, 0.0);
        assert_eq!(v.center, VisualState::CENTER);
        assert_eq!(v.enter.x, 0.0);
        assert_eq!(v.enter.scale, 1.0);
    }

    #[test]
    fn scale_shrinks_on_enter_and_exit() {
        let v = variants(AnimationType::Scale, SlideDirection::Backward);
        assert_eq!(v.enter.scale, 0.8);
        assert_eq!(v.exit.scale, 0.8);
        assert_eq!(v.enter.opacity, 0.0);
    }

    #[test]
    fn slide_offsets_follow_direction() {
        let forward = variants(AnimationType::Slide, SlideDirection::Forward);
        assert_eq!(forward.enter.x, SLIDE_DISTANCE);
        assert_eq!(forward.exit.x, -SLIDE_DISTANCE);

        let backward = variants(AnimationType::Slide, SlideDirection::Backward);
        assert_eq!(backward.enter.x, -SLIDE_DISTANCE);
        assert_eq!(backward.exit.x, SLIDE_DISTANCE);

        let none = variants(AnimationType::Slide, SlideDirection::None);
        assert_eq!(none.enter.x, -SLIDE_DISTANCE);
        assert_eq!(none.exit.x, -SLIDE_DISTANCE);
    }

    #[test]
    fn transition_exits_then_enters_then_settles() {
        let mut transition = Transition::new(
            0,
            1,
            AnimationType::Fade,
            SlideDirection::Forward,
            half_second(),
        );
        assert!(matches!(
            transition.frame(),
            TransitionFrame::Exiting { slide: 0, visual } if visual.opacity == 1.0
        ));

        transition.advance(Duration::from_millis(250));
        assert!(matches!(
            transition.frame(),
            TransitionFrame::Exiting { slide: 0, visual } if (visual.opacity - 0.5).abs() < 1e-6
        ));

        transition.advance(Duration::from_millis(250));
        assert!(matches!(
            transition.frame(),
            TransitionFrame::Entering { slide: 1, visual } if visual.opacity == 0.0
        ));

        transition.advance(Duration::from_millis(499));
        assert!(matches!(transition.phase(), AnimPhase::Running { .. }));

        transition.advance(Duration::from_millis(1));
        assert!(transition.is_finished());
        assert_eq!(transition.frame(), TransitionFrame::Settled);
    }

    #[test]
    fn slide_transition_moves_toward_center() {
        let mut transition = Transition::new(
            2,
            3,
            AnimationType::Slide,
            SlideDirection::Forward,
            half_second(),
        );
        transition.advance(Duration::from_millis(750));
        let TransitionFrame::Entering { slide, visual } = transition.frame() else {
            panic!("expected entering frame");
        };
        assert_eq!(slide, 3);
        assert!((visual.x - SLIDE_DISTANCE / 2.0).abs() < 1e-3);
    }
}
