//! Sticky header — brand on the left, section nav on the right.
//!
//! Renders flat over the hero, and elevated (raised background, single row)
//! once the page scrolls past the threshold.  Nav entries double as mouse
//! targets; their rectangles are computed by [`nav_zones`] so the input
//! handler and the renderer always agree.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::content::{Section, OWNER_NAME};

use super::theme::Theme;

/// Gap between nav entries, in cells.
const NAV_GAP: u16 = 3;

pub struct Header {
    pub elevated: bool,
    /// Section whose body currently fills most of the viewport.
    pub current: Option<Section>,
}

/// Mouse hit rectangles for the nav entries within `area`.
///
/// Entries are laid out right-aligned on the last header row, in
/// [`Section::NAV`] order.
pub fn nav_zones(area: Rect) -> Vec<(Section, Rect)> {
    let total: u16 = Section::NAV
        .iter()
        .map(|s| s.nav_label().len() as u16 + NAV_GAP)
        .sum();
    let mut x = area.right().saturating_sub(total);
    let y = area.bottom().saturating_sub(1);
    let mut zones = Vec::with_capacity(Section::NAV.len());
    for &section in Section::NAV {
        let w = section.nav_label().len() as u16;
        zones.push((section, Rect::new(x, y, w, 1)));
        x += w + NAV_GAP;
    }
    zones
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let base = if self.elevated {
            Theme::header_elevated_style()
        } else {
            Theme::header_style()
        };
        // Paint the background band first.
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(base);
                }
            }
        }

        let brand = Line::from(vec![
            Span::styled(" ⬢ ", Style::default().fg(Theme::ORANGE)),
            Span::styled(OWNER_NAME, base.patch(Theme::heading_style())),
        ]);
        buf.set_line(area.x, area.y, &brand, area.width);

        for (section, zone) in nav_zones(area) {
            let style = if self.current == Some(section) {
                Theme::nav_active_style()
            } else {
                Theme::nav_style()
            };
            buf.set_string(zone.x, zone.y, section.nav_label(), base.patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_zones_are_disjoint_and_ordered() {
        let area = Rect::new(0, 0, 80, 2);
        let zones = nav_zones(area);
        assert_eq!(zones.len(), Section::NAV.len());
        for pair in zones.windows(2) {
            assert!(pair[0].1.right() <= pair[1].1.x, "zones overlap");
        }
        // All on the nav row.
        for (_, rect) in &zones {
            assert_eq!(rect.y, 1);
        }
    }
}
