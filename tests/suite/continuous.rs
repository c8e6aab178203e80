//! End-to-end behavior of the continuous strip.

use std::time::Duration;

use marquee_engine::{AnimationDuration, ContinuousCarousel, ContinuousConfig, HostSignal};

fn config(per_item_secs: f64, pause_on_hover: bool) -> ContinuousConfig {
    ContinuousConfig {
        animation_duration: AnimationDuration::from_secs(per_item_secs).unwrap(),
        pause_on_hover,
        ..ContinuousConfig::default()
    }
}

#[test]
fn full_loop_returns_to_start_under_frame_ticks() {
    let mut strip = ContinuousCarousel::mount((0..8).collect::<Vec<u8>>(), config(2.0, true));
    assert_eq!(strip.loop_duration(), Duration::from_secs(16));

    // 16 s of ~60 fps frames, with a remainder frame to land exactly on 16 s.
    let frame = Duration::from_micros(16_667);
    let mut elapsed = Duration::ZERO;
    while elapsed + frame <= Duration::from_secs(16) {
        strip.tick(frame);
        elapsed += frame;
    }
    strip.tick(Duration::from_secs(16) - elapsed);
    assert_eq!(strip.offset(), 0.0);
}

#[test]
fn hover_freezes_offset_until_leave() {
    let mut strip = ContinuousCarousel::mount((0..8).collect::<Vec<u8>>(), config(2.0, true));
    strip.tick(Duration::from_secs(5));
    let at_pause = strip.offset();

    strip.handle(HostSignal::PointerEnter);
    assert!(!strip.is_running());
    strip.tick(Duration::from_secs(30));
    assert_eq!(strip.offset(), at_pause);

    strip.handle(HostSignal::PointerLeave);
    strip.tick(Duration::from_secs(1));
    assert!((strip.offset() - 6.0 / 16.0).abs() < 1e-9);
}

#[test]
fn hover_is_ignored_without_pause_on_hover() {
    let mut strip = ContinuousCarousel::mount((0..4).collect::<Vec<u8>>(), config(1.0, false));
    strip.handle(HostSignal::PointerEnter);
    strip.tick(Duration::from_secs(3));
    assert!((strip.offset() - 0.75).abs() < 1e-9);
    assert!((strip.translate_fraction() + 0.375).abs() < 1e-9);
}

#[test]
fn strip_renders_items_twice() {
    let strip = ContinuousCarousel::mount(vec!["a", "b"], config(1.0, true));
    let rendered: Vec<_> = strip.strip().copied().collect();
    assert_eq!(rendered, vec!["a", "b", "a", "b"]);
}

#[test]
fn empty_strip_never_moves() {
    let mut strip = ContinuousCarousel::mount(Vec::<u8>::new(), config(1.0, true));
    strip.tick(Duration::from_secs(10));
    assert!(!strip.is_running());
    assert_eq!(strip.offset(), 0.0);
    assert_eq!(strip.strip().count(), 0);
}
