//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::send_runtime::EmailPayload;
use crate::config::AppConfig;
use crate::core::{
    content::Section,
    form::{ContactForm, Field, FieldErrors},
    scroll::{ScrollView, SectionGeometry},
    submit::Submission,
};
use crate::ui::{
    clause_demo::ClauseDemo, cursor::CursorFollower, demo::DemoRotation,
    particles::ParticleField, smooth_scroll::SmoothScroll,
};

/// Which view / input mode is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Browsing the page — keys scroll and jump between sections.
    #[default]
    Page,
    /// Editing the contact form — keys type into the focused field.
    Form,
}

/// Focusable stops inside the contact form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

impl FormFocus {
    pub const ORDER: &[FormFocus] = &[
        FormFocus::Field(Field::Name),
        FormFocus::Field(Field::Email),
        FormFocus::Field(Field::Subject),
        FormFocus::Field(Field::Message),
        FormFocus::Submit,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|&f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|&f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Screen rectangles recorded during the last draw, used to resolve mouse
/// clicks.  Absent until the first frame has been rendered.
#[derive(Debug, Clone, Default)]
pub struct HitZones {
    /// Header nav entries.
    pub nav: Vec<(Section, Rect)>,
    /// Form input rows (screen coordinates, may be off-screen when scrolled).
    pub fields: Vec<(Field, Rect)>,
    /// The submit control.
    pub submit: Option<Rect>,
}

/// A transient status-bar notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
    pub is_error: bool,
}

/// Top-level application state.
pub struct AppState {
    /// User configuration (tunables + email credentials).
    pub config: AppConfig,
    /// The scroll publisher every derived view state reads from.
    pub scroll: ScrollView,
    /// Target-chasing scroll animator; feeds `scroll` each tick.
    pub smooth: SmoothScroll,
    /// Pointer-trailing marker.
    pub cursor: CursorFollower,
    /// Rotating hero demo widget.
    pub demo: DemoRotation,
    /// ClauseIQ analysis demo popup.
    pub clause_demo: ClauseDemo,
    /// Decorative background particles.
    pub particles: ParticleField,
    /// Which input mode is active.
    pub active_view: ActiveView,
    /// Contact form values.
    pub form: ContactForm,
    /// Validation errors from the last submit attempt.
    pub errors: FieldErrors,
    /// Focused stop inside the form.
    pub form_focus: FormFocus,
    /// Submit lifecycle (idle / pending / sent).
    pub submission: Submission,
    /// Payload staged by the handler for the main loop to dispatch.  At most
    /// one per accepted submission.
    pub outbox: Option<EmailPayload>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Transient status-bar notification.
    pub toast: Option<Toast>,
    /// Section geometries from the last page layout, in page rows.
    pub sections: Vec<(Section, SectionGeometry)>,
    /// Click targets recorded during the last draw.
    pub hit_zones: HitZones,
    /// Full terminal area from the last draw.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let smooth = SmoothScroll::new(config.scroll_speed);
        let cursor = CursorFollower::new(config.cursor_damping);
        Self {
            config,
            scroll: ScrollView::new(),
            smooth,
            cursor,
            demo: DemoRotation::new(),
            clause_demo: ClauseDemo::default(),
            particles: ParticleField::default(),
            active_view: ActiveView::default(),
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            form_focus: FormFocus::Field(Field::Name),
            submission: Submission::new(),
            outbox: None,
            should_quit: false,
            toast: None,
            sections: Vec::new(),
            hit_zones: HitZones::default(),
            terminal_area: Rect::default(),
        }
    }

    /// Geometry of one section from the last layout.
    pub fn section_geometry(&self, section: Section) -> Option<SectionGeometry> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, g)| *g)
    }

    /// Show a status-bar notification.
    pub fn notify(&mut self, text: impl Into<String>, is_error: bool) {
        self.toast = Some(Toast {
            text: text.into(),
            shown_at: Instant::now(),
            is_error,
        });
    }
}
