//! Discrete carousel: slide grid, arrows and indicator dots.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use marquee_engine::{
    ArrowPosition, ArrowVariant, Carousel, IndicatorPosition, ItemsPerSlide, Transition,
    TransitionFrame, VisualState,
};
use marquee_types::item_width;

use crate::card::{Card, render_card, render_empty};
use crate::effects::apply_visual;
use crate::theme::{Glyphs, Palette, styles};
use crate::{CELL_WIDTH_PX, FrameLayout};

const ARROW_WIDTH: u16 = 3;
const ARROW_HEIGHT: u16 = 3;

pub(crate) fn draw(
    frame: &mut Frame,
    carousel: &Carousel<Card>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> FrameLayout {
    let config = carousel.config();
    let mut layout = FrameLayout {
        carousel: area,
        ..FrameLayout::default()
    };

    let mut viewport = area;
    if config.indicators_visible() && viewport.height > 1 {
        let row = match config.indicator_position {
            IndicatorPosition::Top => {
                let row = Rect { height: 1, ..viewport };
                viewport.y += 1;
                viewport.height -= 1;
                row
            }
            IndicatorPosition::Bottom | IndicatorPosition::None => {
                viewport.height -= 1;
                Rect {
                    y: viewport.y + viewport.height,
                    height: 1,
                    ..viewport
                }
            }
        };
        layout.indicators = draw_indicators(frame, carousel, row, palette, glyphs);
    }

    if config.show_arrows && viewport.width > ARROW_WIDTH * 2 + 2 {
        let left = Rect {
            width: ARROW_WIDTH,
            ..viewport
        };
        let right = Rect {
            x: viewport.x + viewport.width - ARROW_WIDTH,
            width: ARROW_WIDTH,
            ..viewport
        };
        viewport.x += ARROW_WIDTH + 1;
        viewport.width -= (ARROW_WIDTH + 1) * 2;

        let position = config.arrow_position;
        let variant = config.arrow_variant;
        let prev = arrow_rect(left, position);
        let next = arrow_rect(right, position);
        draw_arrow(frame, prev, glyphs.arrow_prev, variant, carousel.can_go_prev(), palette);
        draw_arrow(frame, next, glyphs.arrow_next, variant, carousel.can_go_next(), palette);
        layout.prev_arrow = Some(prev);
        layout.next_arrow = Some(next);
    }

    draw_slide(frame, carousel, viewport, palette);
    layout
}

fn draw_slide(frame: &mut Frame, carousel: &Carousel<Card>, viewport: Rect, palette: &Palette) {
    if viewport.is_empty() {
        return;
    }
    if carousel.items().is_empty() {
        render_empty(viewport, frame.buffer_mut(), palette);
        return;
    }

    let (slide, visual) = match carousel.transition().map(Transition::frame) {
        Some(
            TransitionFrame::Exiting { slide, visual } | TransitionFrame::Entering { slide, visual },
        ) => (slide, visual),
        Some(TransitionFrame::Settled) | None => (carousel.current_index(), VisualState::CENTER),
    };

    let gap = carousel.config().gap;
    let columns = grid_columns(viewport, gap, carousel.items_per_slide().get());
    for (card, column) in carousel.slide_items(slide).iter().zip(columns) {
        if let Some(placement) = apply_visual(visual, column, viewport) {
            render_card(
                card,
                placement.area,
                frame.buffer_mut(),
                palette,
                placement.dimmed,
            );
        }
    }
}

/// Split `viewport` into `count` equal columns separated by `gap_px`.
pub(crate) fn grid_columns(viewport: Rect, gap_px: u32, count: usize) -> Vec<Rect> {
    let Ok(per_slide) = ItemsPerSlide::new(count) else {
        return Vec::new();
    };
    let cell_px = u32::from(CELL_WIDTH_PX);
    let width_px = f64::from(u32::from(viewport.width) * cell_px);
    let column_px = item_width(width_px, gap_px, per_slide);
    let column_cells = (column_px / f64::from(cell_px)).floor() as u16;
    let gap_cells = gap_px / cell_px;
    if column_cells == 0 {
        return Vec::new();
    }

    let pitch = u32::from(column_cells).saturating_add(gap_cells);
    (0..count)
        .map_while(|i| {
            let offset = u32::try_from(i).ok()?.checked_mul(pitch)?;
            let x = u16::try_from(u32::from(viewport.x).checked_add(offset)?).ok()?;
            (x < viewport.right()).then_some(Rect {
                x,
                width: column_cells,
                ..viewport
            })
        })
        .collect()
}

fn arrow_rect(column: Rect, position: ArrowPosition) -> Rect {
    let height = ARROW_HEIGHT.min(column.height);
    let y = match position {
        ArrowPosition::Top => column.y,
        ArrowPosition::Center => column.y + (column.height - height) / 2,
        ArrowPosition::Bottom => column.y + column.height - height,
    };
    Rect {
        y,
        height,
        ..column
    }
}

fn draw_arrow(
    frame: &mut Frame,
    area: Rect,
    glyph: &str,
    variant: ArrowVariant,
    enabled: bool,
    palette: &Palette,
) {
    let style = styles::arrow(palette, variant, enabled);
    let block = match variant {
        ArrowVariant::Ghost => Block::default(),
        ArrowVariant::Default => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
        ArrowVariant::Shadow => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick),
    };
    let block = if area.height < ARROW_HEIGHT {
        Block::default()
    } else {
        block.border_style(style)
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let line_y = inner.y + inner.height.saturating_sub(1) / 2;
    frame.render_widget(
        Paragraph::new(glyph.to_string())
            .style(style)
            .alignment(Alignment::Center),
        Rect {
            y: line_y,
            height: 1.min(inner.height),
            ..inner
        },
    );
}

/// Draw one dot per slide, centered in `row`. Returns each dot's hitbox.
fn draw_indicators(
    frame: &mut Frame,
    carousel: &Carousel<Card>,
    row: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Rect> {
    let slides = carousel.slide_count();
    if slides == 0 {
        return Vec::new();
    }
    let dot_width = u16::try_from(
        UnicodeWidthStr::width(glyphs.indicator_active)
            .max(UnicodeWidthStr::width(glyphs.indicator_inactive))
            .max(1),
    )
    .unwrap_or(1);
    let pitch = dot_width + 1;
    let fit = usize::from((row.width + 1) / pitch);
    let shown = slides.min(fit);
    let Ok(shown_u16) = u16::try_from(shown) else {
        return Vec::new();
    };
    let total = (shown_u16 * pitch).saturating_sub(1);
    let start = row.x + row.width.saturating_sub(total) / 2;

    let mut spans = Vec::with_capacity(shown * 2);
    let mut hitboxes = Vec::with_capacity(shown);
    for (slot, index) in (0..shown_u16).zip(0..shown) {
        let active = index == carousel.current_index();
        let glyph = if active {
            glyphs.indicator_active
        } else {
            glyphs.indicator_inactive
        };
        if slot > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(glyph, styles::indicator(palette, active)));
        hitboxes.push(Rect {
            x: start + slot * pitch,
            y: row.y,
            width: dot_width,
            height: 1,
        });
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            x: start,
            width: total.min(row.width),
            ..row
        },
    );
    hitboxes
}
