//! A page hosting one carousel at a time, switchable between the two modes.

use std::mem;
use std::time::Duration;

use marquee_types::ui::{HostSignal, UiOptions};
use marquee_types::{ContinuousConfig, DisplayMode, SlideChanged, SlideConfig};

use crate::carousel::Carousel;
use crate::continuous::ContinuousCarousel;

#[derive(Debug)]
pub enum ActiveCarousel<T> {
    Bounded(Carousel<T>),
    Continuous(ContinuousCarousel<T>),
}

impl<T> ActiveCarousel<T> {
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        match self {
            Self::Bounded(_) => DisplayMode::Bounded,
            Self::Continuous(_) => DisplayMode::Continuous,
        }
    }
}

/// Owns the item list and both configurations; mounts whichever carousel
/// the current mode needs.
#[derive(Debug)]
pub struct Showcase<T: Clone> {
    items: Vec<T>,
    slide_config: SlideConfig,
    continuous_config: ContinuousConfig,
    ui: UiOptions,
    viewport_width: Option<u32>,
    active: ActiveCarousel<T>,
}

impl<T: Clone> Showcase<T> {
    #[must_use]
    pub fn new(
        items: Vec<T>,
        slide_config: SlideConfig,
        continuous_config: ContinuousConfig,
        mode: DisplayMode,
        ui: UiOptions,
    ) -> Self {
        let active = mount(&items, &slide_config, &continuous_config, mode, ui, None);
        Self {
            items,
            slide_config,
            continuous_config,
            ui,
            viewport_width: None,
            active,
        }
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.active.mode()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui
    }

    #[must_use]
    pub fn active(&self) -> &ActiveCarousel<T> {
        &self.active
    }

    #[must_use]
    pub fn active_mut(&mut self) -> &mut ActiveCarousel<T> {
        &mut self.active
    }

    /// Unmount the current carousel and mount the other one.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        let next = self.mode().toggled();
        tracing::info!(mode = next.as_str(), "Switching carousel mode");
        let incoming = mount(
            &self.items,
            &self.slide_config,
            &self.continuous_config,
            next,
            self.ui,
            self.viewport_width,
        );
        let outgoing = mem::replace(&mut self.active, incoming);
        match outgoing {
            ActiveCarousel::Bounded(carousel) => carousel.unmount(),
            ActiveCarousel::Continuous(strip) => strip.unmount(),
        }
        next
    }

    /// Forward a host signal to the mounted carousel.
    pub fn handle(&mut self, signal: HostSignal) -> Option<SlideChanged> {
        if let HostSignal::Resize { width } = signal {
            self.viewport_width = Some(width);
        }
        match &mut self.active {
            ActiveCarousel::Bounded(carousel) => carousel.handle(signal),
            ActiveCarousel::Continuous(strip) => {
                strip.handle(signal);
                None
            }
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        match &mut self.active {
            ActiveCarousel::Bounded(carousel) => carousel.tick(delta),
            ActiveCarousel::Continuous(strip) => strip.tick(delta),
        }
    }
}

fn mount<T: Clone>(
    items: &[T],
    slide_config: &SlideConfig,
    continuous_config: &ContinuousConfig,
    mode: DisplayMode,
    ui: UiOptions,
    viewport_width: Option<u32>,
) -> ActiveCarousel<T> {
    match mode {
        DisplayMode::Bounded => {
            let mut carousel = Carousel::mount(items.to_vec(), slide_config.clone());
            carousel.set_reduced_motion(ui.reduced_motion);
            if let Some(width) = viewport_width {
                carousel.set_viewport_width(width);
            }
            ActiveCarousel::Bounded(carousel)
        }
        DisplayMode::Continuous => {
            let mut strip = ContinuousCarousel::mount(items.to_vec(), continuous_config.clone());
            if let Some(width) = viewport_width {
                strip.set_viewport_width(width);
            }
            ActiveCarousel::Continuous(strip)
        }
    }
}
