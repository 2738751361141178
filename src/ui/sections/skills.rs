//! Skills display — categories of proficiency gauges.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::content::SKILL_CATEGORIES;
use crate::ui::theme::Theme;

use super::gauge;

/// Gauge bar width in cells.
const BAR_WIDTH: usize = 20;

pub fn lines(_width: usize) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::default(),
        Line::from(Span::styled("  Skills & Expertise", Theme::heading_style())),
        Line::default(),
    ];

    for category in SKILL_CATEGORIES {
        let accent = Theme::accent(category.accent);
        out.push(Line::from(Span::styled(
            format!("  {}", category.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        for skill in category.skills {
            out.push(Line::from(vec![
                Span::styled(format!("    {:<20}", skill.name), Theme::body_style()),
                Span::styled(gauge(skill.level, BAR_WIDTH), Style::default().fg(accent)),
            ]));
        }
        out.push(Line::default());
    }
    out
}
