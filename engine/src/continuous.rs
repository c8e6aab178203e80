//! Mounted continuous auto-scroll strip.

use std::time::Duration;

use marquee_types::ui::HostSignal;
use marquee_types::{ContinuousConfig, ContinuousScroll, ItemsPerSlide, item_width, strip};

#[derive(Debug)]
pub struct ContinuousCarousel<T> {
    items: Vec<T>,
    config: ContinuousConfig,
    scroll: ContinuousScroll,
    viewport_width: Option<u32>,
    items_per_slide: ItemsPerSlide,
}

impl<T> ContinuousCarousel<T> {
    #[must_use]
    pub fn mount(items: Vec<T>, config: ContinuousConfig) -> Self {
        let scroll = ContinuousScroll::new(
            items.len(),
            config.animation_duration,
            config.pause_on_hover,
        );
        let items_per_slide = config.effective_items_per_slide(None);
        tracing::info!(
            items = items.len(),
            loop_secs = scroll.loop_duration().as_secs_f64(),
            "Continuous strip mounted"
        );
        Self {
            items,
            config,
            scroll,
            viewport_width: None,
            items_per_slide,
        }
    }

    pub fn unmount(self) {
        drop(self);
    }

    pub fn tick(&mut self, delta: Duration) {
        self.scroll.advance(delta);
    }

    /// Hover and resize are the only signals a strip reacts to; it has no
    /// discrete slides to navigate.
    pub fn handle(&mut self, signal: HostSignal) {
        match signal {
            HostSignal::PointerEnter => self.set_hovered(true),
            HostSignal::PointerLeave => self.set_hovered(false),
            HostSignal::Resize { width } => self.set_viewport_width(width),
            HostSignal::Key(_)
            | HostSignal::DragRelease { .. }
            | HostSignal::Indicator(_)
            | HostSignal::ArrowButton(_) => {}
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.scroll.set_item_count(self.items.len());
        tracing::debug!(
            items = self.items.len(),
            loop_secs = self.scroll.loop_duration().as_secs_f64(),
            "Continuous strip restarted"
        );
    }

    pub fn reconfigure(&mut self, config: ContinuousConfig) {
        self.scroll.set_per_item_duration(config.animation_duration);
        self.scroll.set_pause_on_hover(config.pause_on_hover);
        self.config = config;
        self.items_per_slide = self.config.effective_items_per_slide(self.viewport_width);
        tracing::debug!(
            loop_secs = self.scroll.loop_duration().as_secs_f64(),
            "Continuous strip restarted"
        );
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = Some(width);
        let resolved = self.config.effective_items_per_slide(Some(width));
        if resolved != self.items_per_slide {
            tracing::debug!(width, items_per_slide = resolved.get(), "Items per slide changed");
            self.items_per_slide = resolved;
        }
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.scroll.set_hovered(hovered) {
            tracing::debug!(hovered, running = self.scroll.is_running(), "Strip hover changed");
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items in render order: the list twice.
    pub fn strip(&self) -> impl Iterator<Item = &T> + '_ {
        strip(&self.items)
    }

    #[must_use]
    pub fn config(&self) -> &ContinuousConfig {
        &self.config
    }

    #[must_use]
    pub fn scroll(&self) -> &ContinuousScroll {
        &self.scroll
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    #[must_use]
    pub fn translate_fraction(&self) -> f64 {
        self.scroll.translate_fraction()
    }

    #[must_use]
    pub fn loop_duration(&self) -> Duration {
        self.scroll.loop_duration()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scroll.is_running()
    }

    #[must_use]
    pub fn items_per_slide(&self) -> ItemsPerSlide {
        self.items_per_slide
    }

    #[must_use]
    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    /// Width of one strip item for a viewport `viewport_width` units wide.
    #[must_use]
    pub fn item_width(&self, viewport_width: f64) -> f64 {
        item_width(viewport_width, self.config.gap, self.items_per_slide)
    }
}

impl<T> Drop for ContinuousCarousel<T> {
    fn drop(&mut self) {
        tracing::info!("Continuous strip unmounted");
    }
}
