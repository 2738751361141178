//! Rotating "how I work" widget shown inside the hero section.
//!
//! Three steps advance on a fixed cadence; the active one is highlighted and
//! earlier ones render as completed.

use std::time::{Duration, Instant};

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::content::{DEMO_STEPS, DemoStep};

use super::theme::Theme;

/// Time each step stays active.
pub const STEP_INTERVAL: Duration = Duration::from_secs(3);

/// Cadenced step counter for the demo widget.
#[derive(Debug, Clone)]
pub struct DemoRotation {
    step: usize,
    last_advance: Instant,
}

impl DemoRotation {
    pub fn new() -> Self {
        Self {
            step: 0,
            last_advance: Instant::now(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Advance when the interval has elapsed.  Returns `true` on a step
    /// change so the caller can redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_advance) >= STEP_INTERVAL {
            self.step = (self.step + 1) % DEMO_STEPS.len();
            self.last_advance = now;
            true
        } else {
            false
        }
    }
}

impl Default for DemoRotation {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the widget's text block (one entry per step plus a caption).
pub fn lines(rotation: &DemoRotation) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::from(Span::styled(
            "  About Me — how I approach building great software",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (i, step) in DEMO_STEPS.iter().enumerate() {
        out.push(step_line(step, i, rotation.step()));
        out.push(Line::from(Span::styled(
            format!("       {}", step.description),
            Theme::muted_style(),
        )));
    }
    out
}

fn step_line(step: &DemoStep, index: usize, current: usize) -> Line<'static> {
    let is_active = index == current;
    let is_completed = index < current;
    let marker = if is_active {
        "●"
    } else if is_completed {
        "✓"
    } else {
        "○"
    };
    let style = if is_active {
        Style::default()
            .fg(Theme::accent(step.accent))
            .add_modifier(Modifier::BOLD)
    } else if is_completed {
        Style::default().fg(Theme::accent(step.accent))
    } else {
        Theme::muted_style()
    };
    Line::from(Span::styled(format!("    {marker}  {}", step.title), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_on_cadence_and_wraps() {
        let mut rotation = DemoRotation::new();
        let t0 = rotation.last_advance;

        assert!(!rotation.tick(t0 + Duration::from_secs(1)));
        assert_eq!(rotation.step(), 0);

        assert!(rotation.tick(t0 + STEP_INTERVAL));
        assert_eq!(rotation.step(), 1);

        // Walk a full cycle back to the start.
        let mut now = t0 + STEP_INTERVAL;
        for _ in 0..DEMO_STEPS.len() - 1 {
            now += STEP_INTERVAL;
            rotation.tick(now);
        }
        assert_eq!(rotation.step(), 0);
    }
}
