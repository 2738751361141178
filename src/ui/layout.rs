//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: fixed header chrome on top, scrolling page body,
/// and a bottom status bar.
pub struct AppLayout {
    /// Sticky header (brand + nav).  Two rows airy, one row once elevated.
    pub header_area: Rect,
    /// One-row page scroll-progress bar under the header.
    pub progress_area: Rect,
    /// The scrolled page viewport.
    pub body_area: Rect,
    /// Status / toast bar.
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.  The header shrinks
    /// from two rows to one once the page scrolls past the elevation
    /// threshold.
    pub fn from_area(area: Rect, elevated: bool) -> Self {
        let header_rows = if elevated { 1 } else { 2 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_rows),
                Constraint::Length(1), // scroll progress bar
                Constraint::Min(3),    // page body
                Constraint::Length(1), // status / toast bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            progress_area: chunks[1],
            body_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_shrinks_the_header() {
        let area = Rect::new(0, 0, 80, 24);
        let airy = AppLayout::from_area(area, false);
        let tight = AppLayout::from_area(area, true);
        assert_eq!(airy.header_area.height, 2);
        assert_eq!(tight.header_area.height, 1);
        // The body gains the row back.
        assert_eq!(tight.body_area.height, airy.body_area.height + 1);
    }
}
