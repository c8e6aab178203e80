//! End-to-end behavior of a mounted bounded carousel driven by host signals.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use marquee_engine::{
    ArrowKey, Carousel, HostSignal, ItemsPerSlide, NavIntent, ResponsiveTable, SlideChanged,
    SlideConfig, SlideDirection,
};

fn ips(n: usize) -> ItemsPerSlide {
    ItemsPerSlide::new(n).unwrap()
}

fn recorder(carousel: &mut Carousel<u32>) -> Rc<RefCell<Vec<SlideChanged>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    carousel.subscribe(move |change| sink.borrow_mut().push(*change));
    seen
}

#[test]
fn slide_count_and_index_stay_in_range_under_mixed_input() {
    let config = SlideConfig {
        items_per_slide: ips(3),
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount((0..10).collect(), config);
    assert_eq!(carousel.slide_count(), 4);

    let signals = [
        HostSignal::Key(ArrowKey::Left),
        HostSignal::DragRelease { dx: -80.0, dy: 3.0 },
        HostSignal::Indicator(9),
        HostSignal::ArrowButton(NavIntent::Next),
        HostSignal::Resize { width: 300 },
        HostSignal::Key(ArrowKey::Right),
        HostSignal::Indicator(3),
        HostSignal::Key(ArrowKey::Right),
    ];
    for signal in signals {
        carousel.handle(signal);
        assert!(carousel.current_index() < carousel.slide_count());
    }
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.current_slide_items(), &[0, 1, 2]);
}

#[test]
fn non_looping_carousel_stops_at_both_ends() {
    let config = SlideConfig {
        looping: false,
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount(vec![1, 2, 3], config);
    let seen = recorder(&mut carousel);

    assert_eq!(carousel.handle(HostSignal::Key(ArrowKey::Left)), None);
    carousel.go_to_slide(2);
    assert!(!carousel.can_go_next());
    assert_eq!(carousel.handle(HostSignal::Key(ArrowKey::Right)), None);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn wrapping_direction_follows_index_order() {
    let mut carousel = Carousel::mount(vec![1, 2, 3], SlideConfig::default());
    let seen = recorder(&mut carousel);

    carousel.prev_slide();
    carousel.next_slide();
    assert_eq!(
        *seen.borrow(),
        vec![
            SlideChanged {
                index: 2,
                direction: SlideDirection::Forward
            },
            SlideChanged {
                index: 0,
                direction: SlideDirection::Backward
            },
        ]
    );
}

#[test]
fn going_to_current_slide_is_silent() {
    let mut carousel = Carousel::mount(vec![1, 2, 3], SlideConfig::default());
    let seen = recorder(&mut carousel);
    assert_eq!(carousel.go_to_slide(0), None);
    assert_eq!(carousel.handle(HostSignal::Indicator(0)), None);
    assert!(seen.borrow().is_empty());
}

#[test]
fn swipe_threshold_is_fifty_pixels() {
    let mut carousel = Carousel::mount((0..5).collect(), SlideConfig::default());
    let seen = recorder(&mut carousel);

    carousel.handle(HostSignal::DragRelease { dx: -60.0, dy: 0.0 });
    assert_eq!(carousel.current_index(), 1);
    carousel.handle(HostSignal::DragRelease { dx: -40.0, dy: 0.0 });
    assert_eq!(carousel.current_index(), 1);
    carousel.handle(HostSignal::DragRelease { dx: 60.0, dy: 0.0 });
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn disabled_inputs_are_ignored_but_arrow_buttons_still_work() {
    let config = SlideConfig {
        keyboard_navigation: false,
        swipe_enabled: false,
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount((0..5).collect(), config);
    assert_eq!(carousel.handle(HostSignal::Key(ArrowKey::Right)), None);
    assert_eq!(
        carousel.handle(HostSignal::DragRelease { dx: -200.0, dy: 0.0 }),
        None
    );
    assert!(
        carousel
            .handle(HostSignal::ArrowButton(NavIntent::Next))
            .is_some()
    );
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn autoplay_advances_and_pauses_while_hovered() {
    let config = SlideConfig {
        autoplay: 1000,
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount((0..4).collect(), config);
    let seen = recorder(&mut carousel);

    carousel.tick(Duration::from_millis(1000));
    assert_eq!(carousel.current_index(), 1);

    carousel.handle(HostSignal::PointerEnter);
    carousel.tick(Duration::from_secs(5));
    assert_eq!(carousel.current_index(), 1);

    carousel.handle(HostSignal::PointerLeave);
    carousel.tick(Duration::from_millis(999));
    assert_eq!(carousel.current_index(), 1);
    carousel.tick(Duration::from_millis(1));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn manual_navigation_rearms_autoplay() {
    let config = SlideConfig {
        autoplay: 1000,
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount((0..4).collect(), config);

    carousel.tick(Duration::from_millis(900));
    carousel.handle(HostSignal::Key(ArrowKey::Right));
    assert_eq!(carousel.current_index(), 1);

    carousel.tick(Duration::from_millis(900));
    assert_eq!(carousel.current_index(), 1);
    carousel.tick(Duration::from_millis(100));
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn unmounted_carousel_notifies_no_one() {
    let config = SlideConfig {
        autoplay: 500,
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount((0..4).collect(), config);
    let seen = recorder(&mut carousel);
    carousel.tick(Duration::from_millis(500));
    assert_eq!(seen.borrow().len(), 1);

    carousel.unmount();
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(Rc::strong_count(&seen), 1);
}

#[test]
fn unsubscribed_observer_stops_receiving() {
    let mut carousel = Carousel::mount((0..4).collect(), SlideConfig::default());
    let kept = recorder(&mut carousel);
    let dropped = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&dropped);
    let id = carousel.subscribe(move |_| *sink.borrow_mut() += 1);

    carousel.next_slide();
    assert!(carousel.unsubscribe(id));
    carousel.next_slide();

    assert_eq!(*dropped.borrow(), 1);
    assert_eq!(kept.borrow().len(), 2);
}

#[test]
fn shrinking_slide_count_clamps_index() {
    let responsive: ResponsiveTable = [(0, ips(1)), (900, ips(4))].into_iter().collect();
    let config = SlideConfig {
        responsive: Some(responsive),
        ..SlideConfig::default()
    };
    let mut carousel = Carousel::mount((0..8).collect(), config);
    carousel.handle(HostSignal::Resize { width: 400 });
    carousel.go_to_slide(6);
    let seen = recorder(&mut carousel);

    let change = carousel.handle(HostSignal::Resize { width: 1000 });
    assert_eq!(carousel.items_per_slide().get(), 4);
    assert_eq!(carousel.slide_count(), 2);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(
        change,
        Some(SlideChanged {
            index: 1,
            direction: SlideDirection::Backward
        })
    );
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(carousel.current_slide_items(), &[4, 5, 6, 7]);
}
