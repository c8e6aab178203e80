//! Continuous strip: the duplicated item row, shifted by the scroll offset.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use marquee_engine::ContinuousCarousel;

use crate::card::{Card, render_card, render_empty};
use crate::theme::Palette;
use crate::{CELL_WIDTH_PX, FrameLayout};

pub(crate) fn draw(
    frame: &mut Frame,
    strip: &ContinuousCarousel<Card>,
    area: Rect,
    palette: &Palette,
) -> FrameLayout {
    let layout = FrameLayout {
        carousel: area,
        ..FrameLayout::default()
    };
    if area.is_empty() {
        return layout;
    }
    if strip.items().is_empty() {
        render_empty(area, frame.buffer_mut(), palette);
        return layout;
    }

    let cell_px = u32::from(CELL_WIDTH_PX);
    let width_px = f64::from(u32::from(area.width) * cell_px);
    let item_cells = (strip.item_width(width_px) / f64::from(cell_px)).floor() as u16;
    if item_cells == 0 {
        return layout;
    }
    let gap_cells = u16::try_from(strip.config().gap / cell_px).unwrap_or(u16::MAX);

    let geometry = StripGeometry {
        items: strip.items().len(),
        item_cells,
        gap_cells,
    };
    let shift = geometry.shift(strip.offset());
    let visible = geometry.visible(shift, area.width);

    let cards: Vec<&Card> = strip.strip().collect();
    let mut scratch = Buffer::empty(Rect::new(0, 0, item_cells, area.height));
    let buf = frame.buffer_mut();
    for (slot, left) in visible {
        let Some(card) = cards.get(slot) else {
            continue;
        };
        scratch.reset();
        render_card(card, scratch.area, &mut scratch, palette, false);
        blit_columns(&scratch, buf, area, left);
    }
    layout
}

/// Cell geometry of the doubled strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StripGeometry {
    items: usize,
    item_cells: u16,
    gap_cells: u16,
}

impl StripGeometry {
    fn pitch(self) -> u64 {
        u64::from(self.item_cells) + u64::from(self.gap_cells)
    }

    /// Length of one copy of the items, gaps included.
    fn half_len(self) -> u64 {
        self.pitch() * self.items as u64
    }

    /// Leftward shift in cells for a loop offset in `[0, 1)`.
    fn shift(self, offset: f64) -> u64 {
        let half = self.half_len();
        if half == 0 {
            return 0;
        }
        let cells = (offset.clamp(0.0, 1.0) * half as f64).round() as u64;
        cells % half
    }

    /// Strip slots overlapping a `width`-cell window shifted by `shift`, with
    /// each slot's left edge relative to the window.
    fn visible(self, shift: u64, width: u16) -> Vec<(usize, i64)> {
        let pitch = self.pitch();
        let window_end = shift + u64::from(width);
        (0..self.items * 2)
            .map_while(|slot| {
                let start = slot as u64 * pitch;
                (start < window_end).then_some((slot, start))
            })
            .filter(|&(_, start)| start + u64::from(self.item_cells) > shift)
            .map(|(slot, start)| (slot, start as i64 - shift as i64))
            .collect()
    }
}

/// Copy the columns of `src` that land inside `area` when its left edge sits
/// `left` cells from `area.x`.
fn blit_columns(src: &Buffer, dst: &mut Buffer, area: Rect, left: i64) {
    for col in 0..src.area.width {
        let x = left + i64::from(col);
        let Ok(x) = u16::try_from(x) else {
            continue;
        };
        if x >= area.width {
            break;
        }
        for row in 0..src.area.height.min(area.height) {
            dst[(area.x + x, area.y + row)] = src[(col, row)].clone();
        }
    }
}
