//! Decorative floating particles drifting behind the page.
//!
//! Six soft dots on slow, looping paths.  Positions are random per terminal
//! size and regenerate on resize, matching the page's ambient background.
//! They only ever paint over blank cells.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

const PARTICLE_COUNT: usize = 6;
const GLYPH: &str = "·";

#[derive(Debug, Clone)]
struct Particle {
    x: f64,
    y: f64,
    /// Drift amplitude in cells.
    amplitude: f64,
    /// Loop period in ticks.
    period: f64,
    /// Phase offset so the dots don't move in lockstep.
    phase: f64,
    orange: bool,
}

/// The particle field plus its animation clock.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    tick: u64,
}

impl ParticleField {
    /// (Re)seed for a terminal size.  Called at startup and on resize.
    pub fn regenerate(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();
        self.particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                x: rng.gen_range(0.0..f64::from(width.max(1))),
                y: rng.gen_range(0.0..f64::from(height.max(1))),
                amplitude: rng.gen_range(2.0..6.0),
                period: rng.gen_range(150.0..400.0),
                phase: i as f64 * 1.1,
                orange: i % 2 == 0,
            })
            .collect();
    }

    /// Advance the animation clock.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn cell(&self, p: &Particle) -> (f64, f64) {
        let t = self.tick as f64 / p.period * std::f64::consts::TAU + p.phase;
        (p.x + t.cos() * p.amplitude, p.y + t.sin() * p.amplitude * 0.5)
    }
}

impl Widget for &ParticleField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for p in &self.particles {
            let (fx, fy) = self.cell(p);
            if fx < 0.0 || fy < 0.0 {
                continue;
            }
            let (x, y) = (fx.round() as u16, fy.round() as u16);
            if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
                continue;
            }
            let is_blank = buf
                .cell((x, y))
                .map(|cell| cell.symbol().trim().is_empty())
                .unwrap_or(false);
            if is_blank {
                let color = if p.orange { Theme::ORANGE_DIM } else { Theme::GREEN_DIM };
                buf.set_string(x, y, GLYPH, Style::default().fg(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regenerate_seeds_within_bounds() {
        let mut field = ParticleField::default();
        field.regenerate(80, 24);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        for p in &field.particles {
            assert!(p.x >= 0.0 && p.x < 80.0);
            assert!(p.y >= 0.0 && p.y < 24.0);
        }
    }

    #[test]
    fn drift_stays_near_anchor() {
        let mut field = ParticleField::default();
        field.regenerate(80, 24);
        let anchor: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.x, p.y)).collect();
        for _ in 0..1000 {
            field.tick();
            for (p, (ax, _)) in field.particles.iter().zip(&anchor) {
                let (cx, _) = field.cell(p);
                assert!((cx - ax).abs() <= p.amplitude + 0.001);
            }
        }
    }
}
