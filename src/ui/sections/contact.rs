//! Contact section — the validated form plus the "get in touch" blurb.
//!
//! Built as plain page lines like every other section, but the builder also
//! reports which page-relative rows hold each input and the submit control
//! so mouse clicks can be resolved against the scrolled viewport.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::app::state::{ActiveView, FormFocus};
use crate::core::content::FALLBACK_EMAIL;
use crate::core::form::{ContactForm, Field, FieldErrors, MESSAGE_MAX};
use crate::core::submit::{SubmitState, Submission};
use crate::ui::theme::Theme;

use super::wrapped_lines;

/// Rows the message textarea always occupies, even when empty.
const MESSAGE_MIN_ROWS: usize = 3;

/// Contact section content plus input-row bookkeeping.
pub struct ContactLayout {
    pub lines: Vec<Line<'static>>,
    /// `(field, first_row, height)` — rows relative to the section top.
    pub field_rows: Vec<(Field, usize, usize)>,
    /// Row of the submit control, relative to the section top.
    pub submit_row: usize,
}

pub fn build(
    form: &ContactForm,
    errors: &FieldErrors,
    focus: FormFocus,
    view: ActiveView,
    submission: &Submission,
    width: usize,
) -> ContactLayout {
    let editing = view == ActiveView::Form;
    let box_width = width.saturating_sub(8).clamp(20, 72);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("  Let's Work Together", Theme::heading_style())),
    ];
    lines.extend(wrapped_lines(
        "Ready to bring your ideas to life? Drop me a message and I'll get back to you within 24 hours.",
        width,
        "  ",
        Theme::muted_style(),
    ));
    lines.push(Line::from(vec![
        Span::styled("  ✉ ", Theme::highlight_orange()),
        Span::styled(FALLBACK_EMAIL, Theme::body_style()),
        Span::styled("   (press Enter here to start typing, Esc to stop)", Theme::muted_style()),
    ]));
    lines.push(Line::default());

    let mut field_rows = Vec::with_capacity(Field::ALL.len());

    for &field in Field::ALL {
        let focused = editing && focus == FormFocus::Field(field);
        lines.push(label_line(field, focused));

        let first_row = lines.len();
        let height = match field {
            Field::Message => {
                let rows = textarea_rows(form.value(field), box_width, focused);
                let height = rows.len();
                lines.extend(rows);
                lines.push(Line::from(Span::styled(
                    format!("    {}/{MESSAGE_MAX} characters", form.message.chars().count()),
                    Theme::muted_style(),
                )));
                height
            }
            _ => {
                lines.push(input_line(form.value(field), field, box_width, focused));
                1
            }
        };
        field_rows.push((field, first_row, height));

        if let Some(message) = errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Theme::field_error_style(),
            )));
        }
        lines.push(Line::default());
    }

    let submit_row = lines.len();
    lines.push(submit_line(submission, editing && focus == FormFocus::Submit));
    lines.push(Line::default());

    ContactLayout {
        lines,
        field_rows,
        submit_row,
    }
}

fn label_line(field: Field, focused: bool) -> Line<'static> {
    let style = if focused {
        Theme::field_label_style().fg(Theme::ORANGE)
    } else {
        Theme::field_label_style()
    };
    Line::from(Span::styled(format!("  {} *", field.label()), style))
}

fn input_line(value: &str, field: Field, box_width: usize, focused: bool) -> Line<'static> {
    let (text, style) = if value.is_empty() && !focused {
        (field.placeholder().to_string(), Theme::placeholder_style())
    } else {
        let cursor = if focused { "▏" } else { "" };
        let shown = tail(value, box_width.saturating_sub(1));
        (format!("{shown}{cursor}"), input_style(focused))
    };
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{text:<box_width$}"), style),
    ])
}

fn textarea_rows(value: &str, box_width: usize, focused: bool) -> Vec<Line<'static>> {
    let style = input_style(focused);
    let mut rows: Vec<String> = Vec::new();
    for paragraph in value.split('\n') {
        rows.extend(super::wrap(paragraph, box_width.saturating_sub(1)));
    }
    if value.is_empty() {
        rows.clear();
    }
    while rows.len() < MESSAGE_MIN_ROWS {
        rows.push(String::new());
    }
    let last = rows.len() - 1;
    rows.into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            if focused && i == last {
                row.push('▏');
            }
            Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{row:<box_width$}"), style),
            ])
        })
        .collect()
}

fn input_style(focused: bool) -> Style {
    if focused {
        Theme::field_focused_style()
    } else {
        Theme::field_style()
    }
}

fn submit_line(submission: &Submission, focused: bool) -> Line<'static> {
    let label = format!("  {}  ", submission.label());
    let style = match submission.state() {
        SubmitState::Idle if focused => Theme::submit_style().fg(Theme::FG),
        SubmitState::Idle => Theme::submit_style(),
        // Disabled while pending or holding the success state.
        SubmitState::Pending | SubmitState::Sent => Theme::submit_disabled_style(),
    };
    let spinner = if submission.is_pending() { "⟳ " } else { "" };
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{spinner}{label}"), style),
    ])
}

/// Last `width` chars of an input, so long values scroll left while typing.
fn tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        value.to_string()
    } else {
        value.chars().skip(count - width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(form: &ContactForm, errors: &FieldErrors) -> ContactLayout {
        build(
            form,
            errors,
            FormFocus::Field(Field::Name),
            ActiveView::Page,
            &Submission::new(),
            80,
        )
    }

    #[test]
    fn every_field_gets_a_row() {
        let built = layout(&ContactForm::default(), &FieldErrors::default());
        assert_eq!(built.field_rows.len(), Field::ALL.len());
        // Rows are ordered and inside the section.
        for pair in built.field_rows.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
        assert!(built.submit_row < built.lines.len());
    }

    #[test]
    fn error_lines_extend_the_section() {
        let form = ContactForm::default();
        let clean = layout(&form, &FieldErrors::default());
        let errors = crate::core::form::validate(&form);
        let with_errors = layout(&form, &errors);
        assert!(with_errors.lines.len() > clean.lines.len());
    }

    #[test]
    fn long_input_shows_its_tail() {
        assert_eq!(tail("abcdef", 4), "cdef");
        assert_eq!(tail("abc", 4), "abc");
    }
}
