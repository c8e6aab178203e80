//! Carousel item content and its rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::theme::Palette;

/// One carousel item as shown in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

impl Card {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            body: body.into(),
        }
    }
}

pub(crate) fn render_card(
    card: &Card,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    dimmed: bool,
) {
    if area.width < 3 || area.height < 2 {
        return;
    }

    let (border, title, text, subtitle) = if dimmed {
        (
            palette.text_disabled,
            palette.text_muted,
            palette.text_muted,
            palette.text_muted,
        )
    } else {
        (
            palette.bg_border,
            palette.text_primary,
            palette.text_secondary,
            palette.accent,
        )
    };
    let modifier = if dimmed {
        Modifier::DIM
    } else {
        Modifier::empty()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default()
                .fg(title)
                .add_modifier(Modifier::BOLD | modifier),
        ));

    let lines = vec![
        Line::from(Span::styled(
            card.subtitle.as_str(),
            Style::default().fg(subtitle).add_modifier(modifier),
        )),
        Line::default(),
        Line::from(Span::styled(
            card.body.as_str(),
            Style::default().fg(text).add_modifier(modifier),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Centered placeholder for a carousel with nothing to show.
pub(crate) fn render_empty(area: Rect, buf: &mut Buffer, palette: &Palette) {
    if area.is_empty() {
        return;
    }
    Paragraph::new("No items")
        .style(Style::default().fg(palette.text_muted))
        .alignment(Alignment::Center)
        .render(
            Rect {
                y: area.y + area.height / 2,
                height: 1,
                ..area
            },
            buf,
        );
}
