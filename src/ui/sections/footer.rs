//! Footer — brand, quick links, socials, and the copyright line.

use chrono::Datelike;
use ratatui::text::{Line, Span};

use crate::core::content::{OWNER_NAME, SOCIAL_LINKS};
use crate::ui::theme::Theme;

use super::wrapped_lines;

pub fn lines(width: usize) -> Vec<Line<'static>> {
    let year = chrono::Local::now().year();
    let mut out = vec![
        Line::from(Span::styled("─".repeat(width), Theme::muted_style())),
        Line::from(vec![
            Span::styled("  ⬢ ", Theme::highlight_orange()),
            Span::styled(OWNER_NAME, Theme::heading_style()),
        ]),
    ];
    out.extend(wrapped_lines(
        "Freelance developer specializing in AI-powered applications and modern web solutions.",
        width,
        "  ",
        Theme::muted_style(),
    ));
    out.push(Line::default());

    for social in SOCIAL_LINKS {
        out.push(Line::from(vec![
            Span::styled(format!("  {:<10}", social.name), Theme::body_style()),
            Span::styled(social.url.to_string(), Theme::muted_style()),
        ]));
    }
    out.push(Line::default());
    out.push(Line::from(Span::styled(
        format!("  © {year} {OWNER_NAME}. Built with ♥ and too much coffee."),
        Theme::muted_style(),
    )));
    out.push(Line::default());
    out
}
