//! Map slide transition visuals onto terminal cells.

use ratatui::layout::Rect;

use marquee_engine::VisualState;

use crate::CELL_WIDTH_PX;

/// Opacity below which a slide is not drawn at all.
const HIDDEN_OPACITY: f32 = 0.05;
/// Opacity below which a slide is drawn dimmed.
const DIM_OPACITY: f32 = 0.6;

/// How a slide should be drawn for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub area: Rect,
    pub dimmed: bool,
}

/// Apply a visual state to the slide's resting area.
///
/// Returns `None` when the slide is invisible: fully transparent, or moved
/// entirely outside `clip`.
#[must_use]
pub fn apply_visual(visual: VisualState, base: Rect, clip: Rect) -> Option<Placement> {
    if visual.opacity <= HIDDEN_OPACITY {
        return None;
    }
    let scaled = scale_rect(base, visual.scale);
    let shifted = shift_rect(scaled, px_to_cells(visual.x));
    let area = shifted.intersection(clip);
    if area.is_empty() {
        return None;
    }
    Some(Placement {
        area,
        dimmed: visual.opacity < DIM_OPACITY,
    })
}

fn px_to_cells(px: f32) -> i32 {
    (px / f32::from(CELL_WIDTH_PX)).round() as i32
}

fn shift_rect(base: Rect, dx: i32) -> Rect {
    let left = i32::from(base.x) + dx;
    let right = left + i32::from(base.width);
    let x = left.clamp(0, i32::from(u16::MAX));
    let right = right.clamp(0, i32::from(u16::MAX));
    Rect {
        x: x as u16,
        width: (right - x).max(0) as u16,
        ..base
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 10,
        y: 2,
        width: 40,
        height: 10,
    };

    #[test]
    fn center_visual_keeps_area() {
        let placement = apply_visual(VisualState::CENTER, AREA, AREA).unwrap();
        assert_eq!(placement.area, AREA);
        assert!(!placement.dimmed);
    }

    #[test]
    fn transparent_slide_is_hidden() {
        let visual = VisualState {
            opacity: 0.0,
            ..VisualState::CENTER
        };
        assert_eq!(apply_visual(visual, AREA, AREA), None);
    }

    #[test]
    fn scale_shrinks_around_center() {
        let visual = VisualState {
            scale: 0.5,
            opacity: 0.5,
            ..VisualState::CENTER
        };
        let placement = apply_visual(visual, AREA, AREA).unwrap();
        assert_eq!(placement.area, Rect::new(20, 4, 20, 5));
        assert!(placement.dimmed);
    }

    #[test]
    fn offset_is_clipped_to_viewport() {
        let visual = VisualState {
            x: 160.0,
            ..VisualState::CENTER
        };
        let placement = apply_visual(visual, AREA, AREA).unwrap();
        assert_eq!(placement.area, Rect::new(30, 2, 20, 10));

        let gone = VisualState {
            x: -1000.0,
            ..VisualState::CENTER
        };
        assert_eq!(apply_visual(gone, AREA, AREA), None);
    }
}
