//! Pointer-trailing cursor marker.
//!
//! The target jumps to the raw pointer cell on every mouse-move event; the
//! rendered position is eased toward it on the animation tick, so the
//! follower visibly trails the pointer.  Rendering never overwrites
//! non-blank cells — the marker floats over background only.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

const MARKER: &str = "✦";

/// Eased pointer follower.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    /// Raw pointer cell, updated immediately on mouse-move.
    target: (f64, f64),
    /// Rendered position, eased toward `target` each tick.
    pos: (f64, f64),
    /// Fraction of the remaining gap closed per tick.
    damping: f64,
    /// No marker until the pointer has moved at least once.
    visible: bool,
}

impl CursorFollower {
    pub fn new(damping: f64) -> Self {
        Self {
            target: (0.0, 0.0),
            pos: (0.0, 0.0),
            damping: damping.clamp(0.05, 0.95),
            visible: false,
        }
    }

    /// Record a pointer move.  The first move snaps the marker so it does
    /// not glide in from the origin.
    pub fn on_pointer_move(&mut self, column: u16, row: u16) {
        let target = (f64::from(column), f64::from(row));
        if !self.visible {
            self.pos = target;
            self.visible = true;
        }
        self.target = target;
    }

    /// Ease toward the pointer.  Call once per frame.
    pub fn tick(&mut self) {
        if !self.visible {
            return;
        }
        self.pos.0 += (self.target.0 - self.pos.0) * self.damping;
        self.pos.1 += (self.target.1 - self.pos.1) * self.damping;
        // Snap when the remaining gap is sub-cell.
        if (self.target.0 - self.pos.0).abs() < 0.3 && (self.target.1 - self.pos.1).abs() < 0.3 {
            self.pos = self.target;
        }
    }

    /// Snap straight to the target (reduce-motion mode).
    pub fn snap(&mut self) {
        self.pos = self.target;
    }

    /// Rendered cell, rounded to the grid.
    pub fn position(&self) -> Option<(u16, u16)> {
        if !self.visible {
            return None;
        }
        Some((self.pos.0.round() as u16, self.pos.1.round() as u16))
    }
}

impl Widget for &CursorFollower {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((x, y)) = self.position() else {
            return;
        };
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return;
        }
        // Only decorate blank cells; text always wins.
        let is_blank = buf
            .cell((x, y))
            .map(|cell| cell.symbol().trim().is_empty())
            .unwrap_or(false);
        if is_blank {
            buf.set_string(x, y, MARKER, Style::default().fg(Theme::ORANGE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_move() {
        let cursor = CursorFollower::new(0.3);
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn first_move_snaps_then_trails() {
        let mut cursor = CursorFollower::new(0.3);
        cursor.on_pointer_move(10, 5);
        assert_eq!(cursor.position(), Some((10, 5)));

        // Pointer jumps away; the rendered position lags behind.
        cursor.on_pointer_move(40, 5);
        cursor.tick();
        let (x, _) = cursor.position().unwrap();
        assert!(x > 10 && x < 40, "follower should be mid-flight, got {x}");

        // Enough ticks and it arrives.
        for _ in 0..100 {
            cursor.tick();
        }
        assert_eq!(cursor.position(), Some((40, 5)));
    }

    #[test]
    fn target_updates_do_not_block_on_animation() {
        let mut cursor = CursorFollower::new(0.3);
        cursor.on_pointer_move(0, 0);
        cursor.on_pointer_move(20, 0);
        // A new move mid-flight simply retargets.
        cursor.tick();
        cursor.on_pointer_move(5, 0);
        for _ in 0..100 {
            cursor.tick();
        }
        assert_eq!(cursor.position(), Some((5, 0)));
    }
}
