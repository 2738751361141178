//! "My Journey" — the scroll-synchronized timeline.
//!
//! The active step index is derived from how far the section has travelled
//! through the viewport: steps at or before the index light up, the current
//! one is emphasized, later ones stay dim.  A vertical rail on the left
//! fills proportionally to `(active + 1) / n`.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::content::TIMELINE;
use crate::ui::theme::Theme;

use super::wrapped_lines;

pub fn lines(active_index: usize, width: usize) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::default(),
        Line::from(Span::styled("  My Journey", Theme::heading_style())),
    ];
    out.extend(wrapped_lines(
        "From curious beginner to AI developer, here's how I've grown through challenges and discoveries.",
        width,
        "  ",
        Theme::muted_style(),
    ));
    out.push(Line::default());

    for (i, event) in TIMELINE.iter().enumerate() {
        let is_active = i <= active_index;
        let is_current = i == active_index;
        let accent = Theme::accent(event.accent);

        let dot = if is_current {
            "◉"
        } else if is_active {
            "●"
        } else {
            "○"
        };
        let rail = if is_active { "┃" } else { "│" };
        let rail_style = if is_active {
            Style::default().fg(accent)
        } else {
            Theme::muted_style()
        };

        let title_style = if is_current {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(Theme::FG)
        } else {
            Theme::muted_style()
        };

        out.push(Line::from(vec![
            Span::styled(format!("  {dot} "), rail_style),
            Span::styled(format!("{} ", event.year), Style::default().fg(accent)),
            Span::styled(event.title.to_string(), title_style),
        ]));

        let body_style = if is_active { Theme::body_style() } else { Theme::muted_style() };
        for body in super::wrap(event.description, width.saturating_sub(6)) {
            out.push(Line::from(vec![
                Span::styled(format!("  {rail} "), rail_style),
                Span::styled(format!("  {body}"), body_style),
            ]));
        }
        out.push(Line::from(Span::styled(format!("  {rail}"), rail_style)));
    }

    out.push(Line::default());
    out.extend(wrapped_lines(
        "Ready for the Next Chapter — I'm excited to bring my AI expertise and full-stack skills to your next project.",
        width,
        "  ",
        Theme::body_style(),
    ));
    out.push(Line::from(vec![
        Span::styled("  [c]", Theme::highlight_orange()),
        Span::styled(
            " Open to Freelance — Contact Me (I usually reply within 48 hours)",
            Theme::body_style(),
        ),
    ]));
    out.push(Line::default());
    out
}
