//! Page scroll-progress bar — a one-row gradient strip under the header
//! that fills with whole-page progress.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

pub struct ScrollProgressBar {
    /// Whole-page progress in `[0, 1]`.
    pub progress: f64,
}

impl Widget for ScrollProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let filled = (f64::from(area.width) * self.progress.clamp(0.0, 1.0)).round() as u16;
        let y = area.y;
        for i in 0..area.width {
            let x = area.x + i;
            if i < filled {
                // Orange fades into green across the filled run.
                let color = if i * 2 < filled { Theme::ORANGE } else { Theme::GREEN };
                buf.set_string(x, y, "━", Style::default().fg(color));
            } else {
                buf.set_string(x, y, "─", Style::default().fg(Theme::BG_RAISED));
            }
        }
    }
}
