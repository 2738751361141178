//! Colour palette and text styles used across the UI.
//!
//! The palette mirrors the site design: warm orange + sage green accents on
//! a near-black ground.

use ratatui::style::{Color, Modifier, Style};

use crate::core::content::Accent;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    pub const ORANGE: Color = Color::Rgb(0xd6, 0x7c, 0x49);
    pub const GREEN: Color = Color::Rgb(0x7f, 0xb7, 0x7e);
    pub const ORANGE_BRIGHT: Color = Color::Rgb(0xff, 0x8c, 0x42);
    pub const GREEN_BRIGHT: Color = Color::Rgb(0x90, 0xd6, 0x90);
    pub const ORANGE_DIM: Color = Color::Rgb(0x6b, 0x3e, 0x24);
    pub const GREEN_DIM: Color = Color::Rgb(0x3f, 0x5b, 0x3f);
    pub const FG: Color = Color::Rgb(0xf8, 0xf8, 0xf8);
    pub const BG_RAISED: Color = Color::Rgb(0x2a, 0x2a, 0x2a);

    pub fn accent(accent: Accent) -> Color {
        match accent {
            Accent::Orange => Self::ORANGE,
            Accent::Green => Self::GREEN,
        }
    }

    // ── page text ──────────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn highlight_orange() -> Style {
        Style::default()
            .fg(Self::ORANGE_BRIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_green() -> Style {
        Style::default()
            .fg(Self::GREEN_BRIGHT)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn header_style() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Header once the page has scrolled past the elevation threshold.
    pub fn header_elevated_style() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::BG_RAISED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn nav_active_style() -> Style {
        Style::default().fg(Self::ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Self::FG)
    }

    pub fn toast_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Self::GREEN_BRIGHT)
    }

    pub fn toast_error_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::LightRed)
    }

    // ── form ───────────────────────────────────────────────────
    pub fn field_label_style() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn field_style() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG_RAISED)
    }

    pub fn field_focused_style() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::BG_RAISED)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn field_error_style() -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn placeholder_style() -> Style {
        Style::default().fg(Color::DarkGray).bg(Self::BG_RAISED)
    }

    pub fn submit_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn submit_disabled_style() -> Style {
        Style::default().fg(Color::Gray).bg(Self::BG_RAISED)
    }
}
