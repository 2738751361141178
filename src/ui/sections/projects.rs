//! Other projects — the compact card grid, flattened to a list.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::content::OTHER_PROJECTS;
use crate::ui::theme::Theme;

use super::{badge_line, wrapped_lines};

pub fn lines(width: usize) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::default(),
        Line::from(Span::styled("  Other Projects", Theme::heading_style())),
        Line::default(),
    ];

    for project in OTHER_PROJECTS {
        let accent = Theme::accent(project.accent);
        let mut title = vec![Span::styled(
            format!("  ▸ {}", project.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )];
        title.push(Span::styled(format!("  {}", project.subtitle), Theme::muted_style()));
        if project.coming_soon {
            title.push(Span::styled("  (coming soon)", Theme::highlight_orange()));
        }
        out.push(Line::from(title));
        out.extend(wrapped_lines(project.description, width, "    ", Theme::body_style()));
        out.push(badge_line("    ", project.tech));
        out.push(Line::default());
    }
    out
}
