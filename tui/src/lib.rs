//! TUI rendering and input handling for Marquee.

mod bounded_view;
mod card;
mod continuous_view;
mod effects;
mod input;
mod theme;

pub use card::Card;
pub use effects::{Placement, apply_visual};
pub use input::{InputAction, InputPump, PointerTracker, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use marquee_engine::{ActiveCarousel, Carousel, ContinuousCarousel, Showcase};

/// Nominal pixel width of one terminal cell. Carousel geometry (gaps,
/// breakpoints, swipe distances) is specified in pixels.
pub const CELL_WIDTH_PX: u16 = 8;
/// Nominal pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: u16 = 16;

const PROGRESS_WIDTH: usize = 10;

/// Screen geometry of the last drawn frame, used for pointer hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    /// Whole carousel region, hover target.
    pub carousel: Rect,
    pub prev_arrow: Option<Rect>,
    pub next_arrow: Option<Rect>,
    /// One hitbox per indicator dot, in slide order.
    pub indicators: Vec<Rect>,
}

/// Main draw function
pub fn draw(frame: &mut Frame, showcase: &Showcase<Card>) -> FrameLayout {
    let options = showcase.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Carousel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, showcase, chunks[0], &palette, &glyphs);
    let layout = match showcase.active() {
        ActiveCarousel::Bounded(carousel) => {
            bounded_view::draw(frame, carousel, chunks[2], &palette, &glyphs)
        }
        ActiveCarousel::Continuous(strip) => {
            continuous_view::draw(frame, strip, chunks[2], &palette)
        }
    };
    draw_status_bar(frame, showcase, chunks[3], &palette, &glyphs);
    layout
}

fn draw_header(
    frame: &mut Frame,
    showcase: &Showcase<Card>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mode = format!(" {} ", showcase.mode().as_str().to_uppercase());
    let (prev, next) = (glyphs.arrow_prev, glyphs.arrow_next);

    let mut spans = vec![
        Span::styled("Marquee", styles::title(palette)),
        Span::raw("  "),
        Span::styled(mode, styles::mode_badge(palette)),
        Span::raw("  "),
    ];
    if matches!(showcase.active(), ActiveCarousel::Bounded(_)) {
        spans.push(Span::styled(format!("{prev}/{next}"), styles::key_highlight(palette)));
        spans.push(Span::styled(" navigate  ", styles::key_hint(palette)));
    }
    spans.extend([
        Span::styled("m", styles::key_highlight(palette)),
        Span::styled(" mode  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(
    frame: &mut Frame,
    showcase: &Showcase<Card>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let status_text = match showcase.active() {
        ActiveCarousel::Bounded(carousel) => bounded_status(carousel, glyphs),
        ActiveCarousel::Continuous(strip) => continuous_status(strip, glyphs),
    };
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, Style::default().fg(palette.text_secondary)),
    ]));
    frame.render_widget(status, area);
}

fn bounded_status(carousel: &Carousel<Card>, glyphs: &Glyphs) -> String {
    let sep = glyphs.separator;
    let slides = carousel.slide_count();
    let position = if slides == 0 {
        "Slide 0/0".to_string()
    } else {
        format!("Slide {}/{slides}", carousel.current_index() + 1)
    };
    let per_slide = format!("{} per slide", carousel.items_per_slide().get());
    let autoplay = match carousel.autoplay_progress() {
        Some(progress) => format!("{} {}", glyphs.running, progress_bar(progress, glyphs)),
        None if carousel.config().autoplay > 0 => format!("{} autoplay paused", glyphs.paused),
        None => "autoplay off".to_string(),
    };
    format!("{position} {sep} {per_slide} {sep} {autoplay}")
}

fn continuous_status(strip: &ContinuousCarousel<Card>, glyphs: &Glyphs) -> String {
    let sep = glyphs.separator;
    let state = if strip.is_running() {
        format!("{} scrolling", glyphs.running)
    } else {
        format!("{} paused", glyphs.paused)
    };
    format!(
        "{} items {sep} {} per view {sep} loop {:.1}s {sep} {state} {:>3.0}%",
        strip.items().len(),
        strip.items_per_slide().get(),
        strip.loop_duration().as_secs_f64(),
        strip.offset() * 100.0,
    )
}

fn progress_bar(progress: f32, glyphs: &Glyphs) -> String {
    let filled = (progress.clamp(0.0, 1.0) * PROGRESS_WIDTH as f32).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "{}{}",
        glyphs.progress_full.repeat(filled),
        glyphs.progress_empty.repeat(PROGRESS_WIDTH - filled)
    )
}
