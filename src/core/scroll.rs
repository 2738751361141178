//! Scroll-position publisher and the derived-state math that hangs off it.
//!
//! A single [`ScrollView`] is the source of truth for the page offset.  The
//! header, the progress bar, and the timeline all read from it when a frame
//! is drawn, so derived state is always consistent within that frame — no
//! per-consumer scroll listeners.

/// Page offset (in rows) above which the header switches to its elevated
/// (opaque, bordered) treatment.  Exact threshold, no hysteresis: the
/// boundary value itself is not elevated, and the mapping is deterministic.
pub const ELEVATION_THRESHOLD: f64 = 50.0;

/// Geometry of one section inside the virtual page, in absolute page rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// First page row of the section.
    pub top: f64,
    /// Section height in rows.
    pub height: f64,
}

/// How far a section has travelled through the viewport, in `[0, 1]`.
///
/// 0 while the section's top edge is still below the viewport bottom; 1 once
/// its bottom edge has fully left through the top.
pub fn section_progress(offset: f64, viewport_h: f64, geometry: SectionGeometry) -> f64 {
    let denom = viewport_h + geometry.height;
    if denom <= 0.0 {
        return 0.0;
    }
    let top_rel = geometry.top - offset;
    ((viewport_h - top_rel) / denom).clamp(0.0, 1.0)
}

/// Map a progress fraction onto an item index in `[0, count-1]`.
///
/// The `min` keeps `progress == 1.0` from producing `count` (floor of
/// `1.0 * count` would be out of range).
pub fn active_index(progress: f64, count: usize) -> usize {
    debug_assert!(count >= 1);
    (((progress * count as f64).floor()) as usize).min(count.saturating_sub(1))
}

/// Whether the header should render elevated at the given page offset.
pub fn elevated(offset: f64) -> bool {
    offset > ELEVATION_THRESHOLD
}

/// The process-wide scroll publisher.
///
/// Holds the current offset plus the viewport/content extents needed to
/// normalize it.  Mutated only by the event handler and the smooth-scroll
/// animator; everything else reads.
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    offset: f64,
    viewport_h: f64,
    content_h: f64,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page offset in rows (top of the viewport).
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_h
    }

    /// Largest reachable offset.  Zero when the page fits the viewport.
    pub fn max_offset(&self) -> f64 {
        (self.content_h - self.viewport_h).max(0.0)
    }

    /// Update viewport height (terminal resize).  Re-clamps the offset so a
    /// shrinking page never leaves us scrolled past the end.
    pub fn set_viewport_height(&mut self, rows: f64) {
        self.viewport_h = rows.max(0.0);
        self.set_offset(self.offset);
    }

    /// Update total page height (content re-layout).
    pub fn set_content_height(&mut self, rows: f64) {
        self.content_h = rows.max(0.0);
        self.set_offset(self.offset);
    }

    /// Set the offset, clamped to `[0, max_offset]`.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Normalized whole-page progress in `[0, 1]` — drives the top progress
    /// bar.  Zero when there is nothing to scroll.
    pub fn page_progress(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (self.offset / max).clamp(0.0, 1.0)
        }
    }

    /// Whether the header renders elevated at the current offset.
    pub fn elevated(&self) -> bool {
        elevated(self.offset)
    }

    /// Progress of `geometry` through the current viewport.
    pub fn progress_of(&self, geometry: SectionGeometry) -> f64 {
        section_progress(self.offset, self.viewport_h, geometry)
    }
}
