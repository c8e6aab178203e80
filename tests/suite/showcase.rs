//! Switching between bounded and continuous modes on one page.

use std::time::Duration;

use marquee_engine::{
    ActiveCarousel, ArrowKey, ContinuousConfig, DisplayMode, HostSignal, Showcase, SlideConfig,
    UiOptions,
};

fn page(autoplay: u64) -> Showcase<u32> {
    Showcase::new(
        (0..6).collect(),
        SlideConfig {
            autoplay,
            ..SlideConfig::default()
        },
        ContinuousConfig::default(),
        DisplayMode::Bounded,
        UiOptions::default(),
    )
}

fn bounded_index(page: &Showcase<u32>) -> usize {
    match page.active() {
        ActiveCarousel::Bounded(carousel) => carousel.current_index(),
        ActiveCarousel::Continuous(_) => panic!("expected bounded carousel"),
    }
}

#[test]
fn autoplay_runs_only_while_bounded_mode_is_mounted() {
    let mut page = page(1000);
    page.tick(Duration::from_millis(1000));
    assert_eq!(bounded_index(&page), 1);

    page.toggle_mode();
    page.tick(Duration::from_secs(10));
    page.toggle_mode();
    assert_eq!(bounded_index(&page), 0);

    page.tick(Duration::from_millis(1000));
    assert_eq!(bounded_index(&page), 1);
}

#[test]
fn hover_does_not_leak_across_mode_switch() {
    let mut page = page(1000);
    page.handle(HostSignal::PointerEnter);
    page.toggle_mode();

    page.tick(Duration::from_millis(750));
    let ActiveCarousel::Continuous(strip) = page.active() else {
        panic!("expected continuous strip");
    };
    assert!(strip.is_running());
    assert!((strip.offset() - 0.25).abs() < 1e-9);
}

#[test]
fn continuous_mode_ignores_navigation() {
    let mut page = page(0);
    page.toggle_mode();
    assert_eq!(page.mode(), DisplayMode::Continuous);
    assert_eq!(page.handle(HostSignal::Key(ArrowKey::Right)), None);
    assert_eq!(page.handle(HostSignal::Indicator(2)), None);
}
