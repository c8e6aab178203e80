//! Full-frame rendering through a virtual terminal.

use std::time::Duration;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;

use marquee_engine::{
    ArrowKey, ContinuousConfig, DisplayMode, HostSignal, Showcase, SlideConfig, UiOptions,
};
use marquee_tui::{Card, FrameLayout, InputAction, PointerTracker, draw};

use crate::vt100_backend::VT100Backend;

fn cards() -> Vec<Card> {
    vec![
        Card::new("Starter", "$0 / month", "One project"),
        Card::new("Team", "$12 / seat", "Shared configs"),
        Card::new("Studio", "$29 / seat", "Custom motion"),
    ]
}

fn showcase(mode: DisplayMode, ui: UiOptions) -> Showcase<Card> {
    Showcase::new(
        cards(),
        SlideConfig::default(),
        ContinuousConfig::default(),
        mode,
        ui,
    )
}

fn render(showcase: &Showcase<Card>) -> (String, FrameLayout) {
    let mut terminal = Terminal::new(VT100Backend::new(80, 24)).unwrap();
    let mut layout = FrameLayout::default();
    terminal
        .draw(|frame| layout = draw(frame, showcase))
        .unwrap();
    (terminal.backend().contents(), layout)
}

fn ascii() -> UiOptions {
    UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    }
}

#[test]
fn bounded_frame_shows_current_card_and_chrome() {
    let (screen, layout) = render(&showcase(DisplayMode::Bounded, UiOptions::default()));

    assert!(screen.contains("Marquee"));
    assert!(screen.contains("BOUNDED"));
    assert!(screen.contains("Starter"));
    assert!(screen.contains("$0 / month"));
    assert!(!screen.contains("Team"));
    assert!(screen.contains("Slide 1/3"));
    assert!(screen.contains("autoplay off"));
    assert!(screen.contains('●'));

    assert_eq!(layout.indicators.len(), 3);
    assert!(layout.prev_arrow.is_some() && layout.next_arrow.is_some());
}

#[test]
fn ascii_mode_avoids_unicode_glyphs() {
    let (screen, _) = render(&showcase(DisplayMode::Bounded, ascii()));
    assert!(screen.contains("Slide 1/3 | 1 per slide | autoplay off"));
    assert!(!screen.contains('●'));
    assert!(!screen.contains('›'));
}

#[test]
fn settled_transition_shows_next_card() {
    let mut page = showcase(DisplayMode::Bounded, UiOptions::default());
    page.handle(HostSignal::Key(ArrowKey::Right));
    page.tick(Duration::from_secs(2));

    let (screen, _) = render(&page);
    assert!(screen.contains("Team"));
    assert!(!screen.contains("Starter"));
    assert!(screen.contains("Slide 2/3"));
}

#[test]
fn reduced_motion_switches_immediately() {
    let ui = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut page = showcase(DisplayMode::Bounded, ui);
    page.handle(HostSignal::Key(ArrowKey::Left));

    let (screen, _) = render(&page);
    assert!(screen.contains("Studio"));
    assert!(screen.contains("Slide 3/3"));
}

#[test]
fn clicking_an_indicator_navigates() {
    let ui = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut page = showcase(DisplayMode::Bounded, ui);
    let (_, layout) = render(&page);
    let target = layout.indicators[2];

    let mut pointer = PointerTracker::default();
    for kind in [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ] {
        let event = Event::Mouse(MouseEvent {
            kind,
            column: target.x,
            row: target.y,
            modifiers: KeyModifiers::NONE,
        });
        if let Some(InputAction::Signal(signal)) = pointer.translate(&event, &layout) {
            page.handle(signal);
        }
    }

    let (screen, _) = render(&page);
    assert!(screen.contains("Studio"));
}

#[test]
fn continuous_frame_shows_strip_and_loop_status() {
    let (screen, layout) = render(&showcase(DisplayMode::Continuous, ascii()));

    assert!(screen.contains("CONTINUOUS"));
    assert!(screen.contains("Starter"));
    assert!(screen.contains("3 items | 1 per view | loop 1.5s"));
    assert!(layout.indicators.is_empty());
    assert_eq!(layout.prev_arrow, None);
}

#[test]
fn empty_showcase_renders_placeholder() {
    let page = Showcase::new(
        Vec::new(),
        SlideConfig::default(),
        ContinuousConfig::default(),
        DisplayMode::Bounded,
        UiOptions::default(),
    );
    let (screen, layout) = render(&page);
    assert!(screen.contains("No items"));
    assert!(screen.contains("Slide 0/0"));
    assert!(layout.indicators.is_empty());
}
