//! ClauseIQ demo popup — a canned contract clause run through a staged
//! "AI analysis" animation.
//!
//! Opens as a centered overlay above the page.  Analyzing walks three
//! timed steps (parse, risks, recommendations); once complete, the risk
//! findings and suggestions are shown and another clause can be cycled in.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::content::{RiskLevel, SampleClause, SAMPLE_CLAUSES};

use super::sections::wrap;
use super::theme::Theme;

/// Time each analysis stage takes.
pub const ANALYSIS_STEP_INTERVAL: Duration = Duration::from_millis(1500);

/// Number of timed stages before the results appear.
pub const ANALYSIS_STEPS: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Analysis {
    step: usize,
    last_advance: Instant,
}

/// Popup state: which clause is shown and how far the staged analysis is.
#[derive(Debug, Clone, Default)]
pub struct ClauseDemo {
    open: bool,
    clause: usize,
    analysis: Option<Analysis>,
}

impl ClauseDemo {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the overlay.  The analysis in progress is discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.analysis = None;
    }

    pub fn clause(&self) -> &'static SampleClause {
        &SAMPLE_CLAUSES[self.clause]
    }

    /// Current analysis stage, `None` before the button is pressed.
    pub fn step(&self) -> Option<usize> {
        self.analysis.map(|a| a.step)
    }

    pub fn is_complete(&self) -> bool {
        self.step().is_some_and(|s| s >= ANALYSIS_STEPS)
    }

    /// Start the staged analysis.  A second press while one is running is a
    /// no-op.
    pub fn analyze(&mut self, now: Instant) {
        if self.analysis.is_none() {
            self.analysis = Some(Analysis {
                step: 0,
                last_advance: now,
            });
        }
    }

    /// Cycle to the next canned clause and reset the analysis.
    pub fn next_clause(&mut self) {
        self.clause = (self.clause + 1) % SAMPLE_CLAUSES.len();
        self.analysis = None;
    }

    /// Advance the staged animation.  Returns `true` on a stage change.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(analysis) = &mut self.analysis else {
            return false;
        };
        if analysis.step >= ANALYSIS_STEPS {
            return false;
        }
        if now.duration_since(analysis.last_advance) >= ANALYSIS_STEP_INTERVAL {
            analysis.step += 1;
            analysis.last_advance = now;
            return true;
        }
        false
    }

    /// Primary action for the current state: start, wait, or cycle.
    pub fn on_confirm(&mut self, now: Instant) {
        if self.is_complete() {
            self.next_clause();
        } else if self.analysis.is_none() {
            self.analyze(now);
        }
    }
}

fn step_caption(step: usize) -> &'static str {
    match step {
        0 => "Parsing contract language...",
        1 => "Identifying risk factors...",
        2 => "Generating recommendations...",
        _ => "Analysis complete!",
    }
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::High => Color::LightRed,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Theme::GREEN,
    }
}

/// The overlay widget.
pub struct ClauseDemoPopup<'a> {
    pub demo: &'a ClauseDemo,
}

impl Widget for ClauseDemoPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(6).min(72).max(30);
        let text_width = usize::from(width.saturating_sub(4));
        let lines = self.body_lines(text_width);

        let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup = centered_fixed(width, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" ClauseIQ Demo ")
            .title_style(
                Style::default()
                    .fg(Theme::ORANGE)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::ORANGE));

        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

impl ClauseDemoPopup<'_> {
    fn body_lines(&self, width: usize) -> Vec<Line<'static>> {
        let clause = self.demo.clause();
        let mut lines = vec![
            Line::from(Span::styled(
                " AI-Powered Contract Analysis",
                Theme::muted_style(),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                format!(" {}", clause.title),
                Style::default()
                    .fg(Theme::ORANGE)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        for row in wrap(clause.text, width.saturating_sub(1)) {
            lines.push(Line::from(Span::styled(format!(" {row}"), Theme::body_style())));
        }
        lines.push(Line::raw(""));

        match self.demo.step() {
            None => {
                lines.push(Line::from(vec![
                    Span::styled(" [Enter]", Theme::highlight_orange()),
                    Span::styled(" Analyze with AI", Theme::body_style()),
                ]));
            }
            Some(step) => {
                lines.push(Line::from(Span::styled(
                    format!(" ⟳ {}", step_caption(step)),
                    Style::default().fg(Theme::ORANGE),
                )));
                lines.push(progress_line(step, width));
                if self.demo.is_complete() {
                    lines.extend(result_lines(clause, width));
                }
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            " Esc: close",
            Theme::muted_style(),
        )));
        lines
    }
}

/// One-row analysis progress bar, filling a third per stage.
fn progress_line(step: usize, width: usize) -> Line<'static> {
    let bar_width = width.saturating_sub(2).max(6);
    let filled = (bar_width * (step + 1).min(ANALYSIS_STEPS)) / ANALYSIS_STEPS;
    let mut spans = vec![Span::raw(" ")];
    for i in 0..bar_width {
        let (glyph, color) = if i < filled {
            // Orange fades into green, like the page progress bar.
            ("━", if i * 2 < filled { Theme::ORANGE } else { Theme::GREEN })
        } else {
            ("─", Theme::BG_RAISED)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
    }
    Line::from(spans)
}

fn result_lines(clause: &'static SampleClause, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(" Risk Analysis", Theme::heading_style())),
    ];
    for risk in clause.risks {
        let color = risk_color(risk.level);
        lines.push(Line::from(Span::styled(
            format!(" ▪ {}", risk.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for row in wrap(risk.text, width.saturating_sub(3)) {
            lines.push(Line::from(Span::styled(
                format!("   {row}"),
                Theme::body_style(),
            )));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        " AI Recommendations",
        Theme::heading_style(),
    )));
    for suggestion in clause.suggestions {
        lines.push(Line::from(Span::styled(
            " ✓",
            Style::default().fg(Theme::GREEN),
        )));
        let last = lines.len() - 1;
        let mut rows = wrap(suggestion, width.saturating_sub(3)).into_iter();
        if let Some(first) = rows.next() {
            lines[last] = Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(Theme::GREEN)),
                Span::styled(first, Theme::body_style()),
            ]);
        }
        for row in rows {
            lines.push(Line::from(Span::styled(
                format!("   {row}"),
                Theme::body_style(),
            )));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(" [Enter]", Theme::highlight_green()),
        Span::styled(" Try Another Clause", Theme::body_style()),
    ]));
    lines
}

/// Centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_and_unanalyzed_by_default() {
        let demo = ClauseDemo::default();
        assert!(!demo.is_open());
        assert_eq!(demo.step(), None);
    }

    #[test]
    fn analysis_walks_the_stages_on_cadence() {
        let mut demo = ClauseDemo::default();
        demo.open();
        let t0 = Instant::now();
        demo.analyze(t0);
        assert_eq!(demo.step(), Some(0));

        // Inside the interval nothing advances.
        assert!(!demo.tick(t0 + Duration::from_millis(500)));

        let mut now = t0;
        for expected in 1..=ANALYSIS_STEPS {
            now += ANALYSIS_STEP_INTERVAL;
            assert!(demo.tick(now));
            assert_eq!(demo.step(), Some(expected));
        }
        assert!(demo.is_complete());
        // Complete analyses stop ticking.
        assert!(!demo.tick(now + ANALYSIS_STEP_INTERVAL));
    }

    #[test]
    fn analyze_is_single_shot_until_reset() {
        let mut demo = ClauseDemo::default();
        let t0 = Instant::now();
        demo.analyze(t0);
        demo.tick(t0 + ANALYSIS_STEP_INTERVAL);
        // Pressing analyze again mid-flight does not restart.
        demo.analyze(t0 + ANALYSIS_STEP_INTERVAL);
        assert_eq!(demo.step(), Some(1));
    }

    #[test]
    fn next_clause_cycles_and_clears() {
        let mut demo = ClauseDemo::default();
        let first = demo.clause().title;
        demo.analyze(Instant::now());
        demo.next_clause();
        assert_ne!(demo.clause().title, first);
        assert_eq!(demo.step(), None);
        // Wraps back around.
        for _ in 1..SAMPLE_CLAUSES.len() {
            demo.next_clause();
        }
        assert_eq!(demo.clause().title, first);
    }

    #[test]
    fn confirm_routes_by_state() {
        let mut demo = ClauseDemo::default();
        demo.open();
        let t0 = Instant::now();
        demo.on_confirm(t0); // starts
        assert_eq!(demo.step(), Some(0));
        demo.on_confirm(t0); // mid-flight: no-op
        assert_eq!(demo.step(), Some(0));

        let mut now = t0;
        for _ in 0..ANALYSIS_STEPS {
            now += ANALYSIS_STEP_INTERVAL;
            demo.tick(now);
        }
        let before = demo.clause().title;
        demo.on_confirm(now); // complete: cycles
        assert_ne!(demo.clause().title, before);
        assert_eq!(demo.step(), None);
    }

    #[test]
    fn close_discards_the_analysis() {
        let mut demo = ClauseDemo::default();
        demo.open();
        demo.analyze(Instant::now());
        demo.close();
        assert!(!demo.is_open());
        assert_eq!(demo.step(), None);
    }

    #[test]
    fn popup_lines_show_results_only_when_complete() {
        let mut demo = ClauseDemo::default();
        demo.open();
        let idle = ClauseDemoPopup { demo: &demo }.body_lines(60).len();

        let t0 = Instant::now();
        demo.analyze(t0);
        let mut now = t0;
        for _ in 0..ANALYSIS_STEPS {
            now += ANALYSIS_STEP_INTERVAL;
            demo.tick(now);
        }
        let complete = ClauseDemoPopup { demo: &demo }.body_lines(60).len();
        assert!(complete > idle, "results should extend the popup");
    }
}
