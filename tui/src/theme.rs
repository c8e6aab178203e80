//! Color theme and glyphs for the Marquee TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use marquee_engine::{ArrowVariant, UiOptions};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const TEXT_DISABLED: Color = Color::Rgb(113, 124, 124); // katanaGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const PEACH: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub accent: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            peach: colors::PEACH,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            green: Color::Green,
            yellow: Color::Yellow,
            peach: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for arrows, indicators and status markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub arrow_prev: &'static str,
    pub arrow_next: &'static str,
    pub indicator_active: &'static str,
    pub indicator_inactive: &'static str,
    pub separator: &'static str,
    pub paused: &'static str,
    pub running: &'static str,
    pub progress_full: &'static str,
    pub progress_empty: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            arrow_prev: "<",
            arrow_next: ">",
            indicator_active: "o",
            indicator_inactive: ".",
            separator: "|",
            paused: "||",
            running: ">",
            progress_full: "#",
            progress_empty: "-",
        }
    } else {
        Glyphs {
            arrow_prev: "‹",
            arrow_next: "›",
            indicator_active: "●",
            indicator_inactive: "○",
            separator: "·",
            paused: "⏸",
            running: "▶",
            progress_full: "━",
            progress_empty: "─",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{ArrowVariant, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn indicator(palette: &Palette, active: bool) -> Style {
        if active {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        }
    }

    /// Arrow button style; disabled arrows are drawn but muted.
    #[must_use]
    pub fn arrow(palette: &Palette, variant: ArrowVariant, enabled: bool) -> Style {
        if !enabled {
            return Style::default()
                .fg(palette.text_disabled)
                .add_modifier(Modifier::DIM);
        }
        match variant {
            ArrowVariant::Default => Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_panel),
            ArrowVariant::Ghost => Style::default().fg(palette.text_secondary),
            ArrowVariant::Shadow => Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use marquee_engine::{ArrowVariant, UiOptions};

    use super::{Palette, glyphs, palette, styles};

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.arrow_prev,
            g.arrow_next,
            g.indicator_active,
            g.indicator_inactive,
            g.separator,
            g.paused,
            g.running,
            g.progress_full,
            g.progress_empty,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} should be ascii");
        }
    }

    #[test]
    fn high_contrast_uses_named_colors() {
        let options = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        let resolved = palette(options);
        assert_eq!(resolved.text_primary, Palette::high_contrast().text_primary);
        assert_ne!(resolved.text_primary, Palette::standard().text_primary);
    }

    #[test]
    fn disabled_arrow_ignores_variant() {
        let p = Palette::standard();
        let ghost = styles::arrow(&p, ArrowVariant::Ghost, false);
        let shadow = styles::arrow(&p, ArrowVariant::Shadow, false);
        assert_eq!(ghost, shadow);
        assert_ne!(
            styles::arrow(&p, ArrowVariant::Ghost, true),
            styles::arrow(&p, ArrowVariant::Shadow, true)
        );
    }
}
