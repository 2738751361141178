//! Featured case studies — the deep-dive project writeups.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::content::CASE_STUDIES;
use crate::ui::theme::Theme;

use super::{badge_line, wrapped_lines};

pub fn lines(width: usize) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::default(),
        Line::from(Span::styled("  Featured Case Studies", Theme::heading_style())),
    ];
    out.extend(wrapped_lines(
        "Deep dives into my most impactful projects, showcasing AI innovation and full-stack expertise.",
        width,
        "  ",
        Theme::muted_style(),
    ));
    out.push(Line::default());

    for study in CASE_STUDIES {
        let accent = Theme::accent(study.accent);
        out.push(Line::from(vec![
            Span::styled(
                format!("  ◆ {}", study.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", study.subtitle), Theme::muted_style()),
        ]));
        out.push(Line::from(Span::styled("    Problem", Theme::field_label_style())));
        out.extend(wrapped_lines(study.problem, width, "      ", Theme::body_style()));
        out.push(Line::from(Span::styled("    Approach", Theme::field_label_style())));
        out.extend(wrapped_lines(study.approach, width, "      ", Theme::body_style()));
        out.push(Line::from(Span::styled("    Impact", Theme::field_label_style())));
        out.extend(wrapped_lines(study.impact, width, "      ", Theme::body_style()));
        out.push(badge_line("    ", study.tech));
        let mut links = vec![Span::raw("    ")];
        if !study.demo_url.is_empty() {
            links.push(Span::styled(format!("demo: {}  ", study.demo_url), Theme::muted_style()));
        }
        if !study.github_url.is_empty() {
            links.push(Span::styled(format!("code: {}", study.github_url), Theme::muted_style()));
        }
        out.push(Line::from(links));
        out.push(Line::default());
    }
    out
}
