//! Hero section — headline, tagline, calls to action, and the rotating
//! demo widget.

use ratatui::text::{Line, Span};

use crate::ui::demo::{self, DemoRotation};
use crate::ui::theme::Theme;

use super::wrapped_lines;

pub fn lines(rotation: &DemoRotation, width: usize) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::default(),
        Line::default(),
        Line::from(vec![
            Span::styled("  I build ", Theme::heading_style()),
            Span::styled("AI systems", Theme::highlight_orange()),
            Span::styled(" & ", Theme::heading_style()),
            Span::styled("full-stack apps", Theme::highlight_green()),
        ]),
        Line::from(Span::styled(
            "  that solve real problems.",
            Theme::heading_style(),
        )),
        Line::default(),
    ];

    out.extend(wrapped_lines(
        "Passionate about leveraging technology to create intuitive, intelligent, and impactful solutions.",
        width,
        "  ",
        Theme::body_style(),
    ));
    out.push(Line::from(Span::styled(
        "  Available for freelance & internships.",
        Theme::highlight_green(),
    )));
    out.push(Line::default());
    out.push(Line::from(vec![
        Span::styled("  [w]", Theme::highlight_orange()),
        Span::styled(" See My Work    ", Theme::body_style()),
        Span::styled("[r]", Theme::highlight_green()),
        Span::styled(" Download Resume    ", Theme::body_style()),
        Span::styled("[d]", Theme::highlight_orange()),
        Span::styled(" Try the ClauseIQ Demo", Theme::body_style()),
    ]));
    out.push(Line::default());

    out.extend(demo::lines(rotation));
    out.push(Line::default());
    out.push(Line::default());
    out
}
