//! Mounted bounded carousel.
//!
//! `Carousel` owns everything with a lifetime: the autoplay timer, the running
//! slide transition and the slide-change subscribers. Dropping it (or calling
//! [`Carousel::unmount`]) releases all of them.

use std::time::Duration;

use marquee_types::ui::{HostSignal, NavIntent, Transition, drag_intent, key_intent};
use marquee_types::{BoundedCarousel, ItemsPerSlide, SlideChanged, SlideConfig, SlideDirection};

use crate::autoplay::AutoplayTimer;
use crate::subscribers::{Subscribers, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Navigation,
    Autoplay,
    Relayout,
}

#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    config: SlideConfig,
    state: BoundedCarousel,
    viewport_width: Option<u32>,
    autoplay: Option<AutoplayTimer>,
    transition: Option<Transition>,
    reduced_motion: bool,
    subscribers: Subscribers<SlideChanged>,
}

impl<T> Carousel<T> {
    /// Mount a carousel over `items`. Items per slide starts at the base value
    /// until the host reports a viewport width.
    #[must_use]
    pub fn mount(items: Vec<T>, config: SlideConfig) -> Self {
        let items_per_slide = config.effective_items_per_slide(None);
        let state = BoundedCarousel::new(items.len(), items_per_slide, config.looping);
        tracing::info!(
            items = items.len(),
            items_per_slide = items_per_slide.get(),
            slides = state.slide_count(),
            autoplay_ms = config.autoplay,
            "Carousel mounted"
        );
        let mut carousel = Self {
            items,
            config,
            state,
            viewport_width: None,
            autoplay: None,
            transition: None,
            reduced_motion: false,
            subscribers: Subscribers::new(),
        };
        carousel.sync_autoplay();
        carousel
    }

    /// Tear the carousel down. Timers and subscribers are released.
    pub fn unmount(self) {
        drop(self);
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn go_to_slide(&mut self, index: usize) -> Option<SlideChanged> {
        let from = self.state.current_index();
        let change = self.state.go_to_slide(index);
        if change.is_none() && index >= self.state.slide_count() {
            tracing::debug!(
                index,
                slides = self.state.slide_count(),
                "Ignoring out-of-range slide"
            );
        }
        self.apply(from, change, Trigger::Navigation)
    }

    pub fn next_slide(&mut self) -> Option<SlideChanged> {
        self.navigate(NavIntent::Next, Trigger::Navigation)
    }

    pub fn prev_slide(&mut self) -> Option<SlideChanged> {
        self.navigate(NavIntent::Prev, Trigger::Navigation)
    }

    /// Dispatch a host signal. Returns the slide change it caused, if any.
    pub fn handle(&mut self, signal: HostSignal) -> Option<SlideChanged> {
        match signal {
            HostSignal::Key(key) => {
                if !self.config.keyboard_navigation {
                    return None;
                }
                self.navigate(key_intent(key), Trigger::Navigation)
            }
            HostSignal::DragRelease { dx, .. } => {
                if !self.config.swipe_enabled {
                    return None;
                }
                let intent = drag_intent(dx)?;
                self.navigate(intent, Trigger::Navigation)
            }
            HostSignal::PointerEnter => {
                self.set_hovered(true);
                None
            }
            HostSignal::PointerLeave => {
                self.set_hovered(false);
                None
            }
            HostSignal::Resize { width } => self.set_viewport_width(width),
            HostSignal::Indicator(index) => self.go_to_slide(index),
            HostSignal::ArrowButton(intent) => self.navigate(intent, Trigger::Navigation),
        }
    }

    /// Advance the frame clock: transitions first, then autoplay.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(transition) = self.transition.as_mut() {
            transition.advance(delta);
            if transition.is_finished() {
                self.transition = None;
            }
        }

        let mut remaining = delta;
        while let Some(timer) = self.autoplay.as_mut() {
            let Some(leftover) = timer.advance(remaining) else {
                break;
            };
            tracing::trace!(interval = ?timer.interval(), "Autoplay fired");
            self.navigate(NavIntent::Next, Trigger::Autoplay);
            remaining = leftover;
        }
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    pub fn subscribe(&mut self, callback: impl FnMut(&SlideChanged) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ------------------------------------------------------------------------
    // Reconfiguration
    // ------------------------------------------------------------------------

    /// Replace the item list. The index is clamped if the slide count shrinks.
    pub fn set_items(&mut self, items: Vec<T>) -> Option<SlideChanged> {
        let from = self.state.current_index();
        self.items = items;
        let change = self.state.set_item_count(self.items.len());
        self.apply(from, change, Trigger::Relayout)
    }

    /// Report a new viewport width and re-resolve items per slide.
    pub fn set_viewport_width(&mut self, width: u32) -> Option<SlideChanged> {
        self.viewport_width = Some(width);
        self.relayout()
    }

    /// Replace the whole configuration.
    pub fn reconfigure(&mut self, config: SlideConfig) -> Option<SlideChanged> {
        self.config = config;
        self.state.set_looping(self.config.looping);
        let change = self.relayout();
        self.sync_autoplay();
        change
    }

    /// Set the autoplay interval in milliseconds; `0` turns autoplay off.
    pub fn set_autoplay(&mut self, interval_ms: u64) {
        self.config.autoplay = interval_ms;
        self.sync_autoplay();
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool) {
        self.config.pause_on_hover = pause_on_hover;
        self.sync_autoplay();
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        if reduced_motion {
            self.transition = None;
        }
    }

    // ------------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &BoundedCarousel {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    #[must_use]
    pub fn items_per_slide(&self) -> ItemsPerSlide {
        self.state.items_per_slide()
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        self.state.direction()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.state.can_go_prev()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    #[must_use]
    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    #[must_use]
    pub fn current_slide_items(&self) -> &[T] {
        self.state.current_slide_items(&self.items)
    }

    /// Items on an arbitrary slide, used while a transition shows the
    /// outgoing slide.
    #[must_use]
    pub fn slide_items(&self, slide: usize) -> &[T] {
        let per_slide = self.state.items_per_slide().get();
        let start = slide.saturating_mul(per_slide).min(self.items.len());
        let end = start.saturating_add(per_slide).min(self.items.len());
        &self.items[start..end]
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether an autoplay timer is currently armed.
    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Progress through the current autoplay interval, if armed.
    #[must_use]
    pub fn autoplay_progress(&self) -> Option<f32> {
        self.autoplay.as_ref().map(AutoplayTimer::progress)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn navigate(&mut self, intent: NavIntent, trigger: Trigger) -> Option<SlideChanged> {
        let from = self.state.current_index();
        let change = match intent {
            NavIntent::Next => self.state.next_slide(),
            NavIntent::Prev => self.state.prev_slide(),
        };
        self.apply(from, change, trigger)
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.state.set_hovered(hovered) {
            tracing::debug!(hovered, "Carousel hover changed");
            self.sync_autoplay();
        }
    }

    fn relayout(&mut self) -> Option<SlideChanged> {
        let resolved = self.config.effective_items_per_slide(self.viewport_width);
        if resolved == self.state.items_per_slide() {
            return None;
        }
        tracing::debug!(
            width = ?self.viewport_width,
            items_per_slide = resolved.get(),
            "Items per slide changed"
        );
        let from = self.state.current_index();
        let change = self.state.set_items_per_slide(resolved);
        self.apply(from, change, Trigger::Relayout)
    }

    /// Tear down and recreate the autoplay timer from the current inputs.
    fn sync_autoplay(&mut self) {
        let paused = self.config.pause_on_hover && self.state.is_hovered();
        self.autoplay = match self.config.autoplay_interval() {
            Some(interval) if !paused => {
                tracing::debug!(?interval, "Autoplay armed");
                Some(AutoplayTimer::new(interval))
            }
            Some(_) => {
                tracing::debug!("Autoplay paused on hover");
                None
            }
            None => None,
        };
    }

    fn apply(
        &mut self,
        from: usize,
        change: Option<SlideChanged>,
        trigger: Trigger,
    ) -> Option<SlideChanged> {
        let change = change?;
        tracing::debug!(
            from,
            to = change.index,
            direction = ?change.direction,
            ?trigger,
            "Slide changed"
        );

        self.transition = (!self.reduced_motion).then(|| {
            Transition::new(
                from,
                change.index,
                self.config.animation_type,
                change.direction,
                self.config.animation_duration,
            )
        });
        if let Some(timer) = self.autoplay.as_mut() {
            timer.rearm();
        }
        self.subscribers.emit(&change);
        Some(change)
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.autoplay = None;
        self.subscribers.clear();
        tracing::info!("Carousel unmounted");
    }
}
