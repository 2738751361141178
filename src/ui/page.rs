//! Virtual-page assembler and viewport renderer.
//!
//! The whole site is laid out as one tall stack of lines; scrolling just
//! slices a viewport-sized window out of it.  The assembler records where
//! each section landed (page rows) so scroll-derived state — the timeline
//! index, nav highlight, click targets — can be computed from geometry
//! instead of per-section bookkeeping.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
};

use crate::app::state::AppState;
use crate::core::content::Section;
use crate::core::form::Field;
use crate::core::scroll::{self, SectionGeometry};

use super::sections::{contact, footer, hero, projects, skills, timeline, work};

/// The assembled page plus the geometry bookkeeping from this layout.
pub struct PageBuild {
    pub lines: Vec<Line<'static>>,
    /// Section geometries in absolute page rows, document order.
    pub sections: Vec<(Section, SectionGeometry)>,
    /// `(field, first_page_row, height)` for the contact inputs.
    pub field_rows: Vec<(Field, usize, usize)>,
    /// Absolute page row of the submit control.
    pub submit_row: usize,
}

impl PageBuild {
    /// Total page height in rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Which nav section the viewport top currently sits in, if any.
    pub fn current_section(&self, offset: f64) -> Option<Section> {
        self.sections
            .iter()
            .rev()
            .find(|(_, g)| offset >= g.top)
            .map(|(s, _)| *s)
            .filter(|s| Section::NAV.contains(s))
    }
}

/// Lay the full page out at `width` columns.
///
/// The timeline index is derived from the About geometry of the *previous*
/// layout (stored on the state); styling never changes a section's height,
/// so the geometry is stable from the first frame after any reflow.
pub fn build(state: &AppState, width: usize) -> PageBuild {
    let timeline_progress = state
        .section_geometry(Section::About)
        .map(|g| state.scroll.progress_of(g))
        .unwrap_or(0.0);
    let timeline_index = scroll::active_index(timeline_progress, crate::core::content::TIMELINE.len());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections = Vec::with_capacity(Section::ALL.len());

    let mut push = |section: Section,
                    body: Vec<Line<'static>>,
                    lines: &mut Vec<Line<'static>>,
                    sections: &mut Vec<(Section, SectionGeometry)>| {
        let top = lines.len();
        lines.extend(body);
        sections.push((
            section,
            SectionGeometry {
                top: top as f64,
                height: (lines.len() - top) as f64,
            },
        ));
    };

    push(Section::Hero, hero::lines(&state.demo, width), &mut lines, &mut sections);
    push(Section::About, timeline::lines(timeline_index, width), &mut lines, &mut sections);
    push(Section::Work, work::lines(width), &mut lines, &mut sections);
    push(Section::Projects, projects::lines(width), &mut lines, &mut sections);
    push(Section::Skills, skills::lines(width), &mut lines, &mut sections);

    let contact_top = lines.len();
    let built = contact::build(
        &state.form,
        &state.errors,
        state.form_focus,
        state.active_view,
        &state.submission,
        width,
    );
    let field_rows = built
        .field_rows
        .iter()
        .map(|&(field, row, height)| (field, contact_top + row, height))
        .collect();
    let submit_row = contact_top + built.submit_row;
    push(Section::Contact, built.lines, &mut lines, &mut sections);

    push(Section::Footer, footer::lines(width), &mut lines, &mut sections);

    PageBuild {
        lines,
        sections,
        field_rows,
        submit_row,
    }
}

/// Renders the window of the page visible at the current offset.
pub struct PageView<'a> {
    build: &'a PageBuild,
    offset: usize,
}

impl<'a> PageView<'a> {
    pub fn new(build: &'a PageBuild, offset: f64) -> Self {
        Self {
            build,
            offset: offset.max(0.0).round() as usize,
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            let page_row = self.offset + row as usize;
            let Some(line) = self.build.lines.get(page_row) else {
                break;
            };
            buf.set_line(area.x, area.y + row, line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn sections_tile_the_page_in_order() {
        let built = build(&state(), 80);
        assert_eq!(built.sections.len(), Section::ALL.len());
        let mut expected_top = 0.0;
        for (i, (section, geom)) in built.sections.iter().enumerate() {
            assert_eq!(*section, Section::ALL[i]);
            assert_eq!(geom.top, expected_top);
            assert!(geom.height > 0.0);
            expected_top += geom.height;
        }
        assert_eq!(expected_top as usize, built.height());
    }

    #[test]
    fn contact_rows_land_inside_the_contact_section() {
        let built = build(&state(), 80);
        let contact = built
            .sections
            .iter()
            .find(|(s, _)| *s == Section::Contact)
            .map(|(_, g)| *g)
            .unwrap();
        for &(_, row, height) in &built.field_rows {
            assert!(row as f64 >= contact.top);
            assert!(((row + height) as f64) <= contact.top + contact.height);
        }
        assert!(built.submit_row as f64 >= contact.top);
        assert!((built.submit_row as f64) < contact.top + contact.height);
    }

    #[test]
    fn current_section_follows_the_offset() {
        let built = build(&state(), 80);
        // At the very top the hero is visible but is not a nav target.
        assert_eq!(built.current_section(0.0), None);
        let work = built
            .sections
            .iter()
            .find(|(s, _)| *s == Section::Work)
            .map(|(_, g)| *g)
            .unwrap();
        assert_eq!(built.current_section(work.top + 1.0), Some(Section::Work));
    }

    #[test]
    fn viewport_slices_the_page() {
        let built = build(&state(), 40);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        PageView::new(&built, 0.0).render(area, &mut buf);
        // Row 2 of the page holds the hero headline.
        let rendered: String = (0..area.width)
            .map(|x| buf.cell((x, 2)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert!(rendered.contains("I build"));
    }
}
