//! The page sections, each a pure `state → lines` builder.
//!
//! Sections know nothing about scrolling; they emit their full content and
//! the page assembler stacks them, records their geometry, and slices the
//! visible window.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::theme::Theme;

pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod timeline;
pub mod work;

/// Greedy word wrap.  Words longer than `width` are emitted on their own
/// overlong line rather than split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            out.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Wrap `text` into styled lines with a fixed indent prefix.
pub fn wrapped_lines(text: &str, width: usize, indent: &str, style: Style) -> Vec<Line<'static>> {
    wrap(text, width.saturating_sub(indent.len()))
        .into_iter()
        .map(|l| Line::from(Span::styled(format!("{indent}{l}"), style)))
        .collect()
}

/// One line of `[tag] [tag] …` badges.
pub fn badge_line(indent: &str, tags: &[&str]) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(Theme::GREEN),
        ));
    }
    Line::from(spans)
}

/// A proficiency gauge like `████████░░ 80%`.
pub fn gauge(level: u8, width: usize) -> String {
    let level = level.min(100);
    let filled = (width * level as usize + 50) / 100;
    let mut bar = String::new();
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    format!("{bar} {level:>3}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 12, "{line:?} too wide");
        }
    }

    #[test]
    fn wrap_never_loses_words() {
        let text = "one two three four five";
        let joined = wrap(text, 9).join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn gauge_ends_are_exact() {
        assert_eq!(gauge(0, 10), "░░░░░░░░░░   0%");
        assert_eq!(gauge(100, 10), "██████████ 100%");
    }
}
