//! Event handling — key/mouse events and the animation tick, expressed as
//! mutations on [`AppState`].
//!
//! Network dispatch stays out of here: an accepted submission only stages a
//! payload in `state.outbox`; the main loop owns the actual send task.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::send_runtime::{EmailPayload, SendUpdate};
use crate::app::state::{ActiveView, AppState, FormFocus};
use crate::core::content::{Section, FALLBACK_EMAIL, RESUME_PATH};
use crate::core::form::{self, Field, MESSAGE_MAX};

/// How long a toast stays in the status bar.
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Input caps, so a held-down key cannot grow a field without bound.  The
/// validator's upper bounds are the real limits; these just stop the typing.
fn input_cap(field: Field) -> usize {
    match field {
        Field::Name => 50,
        Field::Email => 100,
        Field::Subject => 100,
        Field::Message => MESSAGE_MAX,
    }
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+C quits from anywhere, including mid-edit.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // The demo overlay swallows input while it is up.
    if state.clause_demo.is_open() {
        handle_clause_demo_key(state, key);
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key),
        ActiveView::Form => handle_form_key(state, key),
    }
}

fn handle_clause_demo_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('d') => state.clause_demo.close(),
        KeyCode::Enter | KeyCode::Char(' ') => state.clause_demo.on_confirm(Instant::now()),
        KeyCode::Char('n') => state.clause_demo.next_clause(),
        _ => {}
    }
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    let step = state.config.scroll_step;
    let page = state.scroll.viewport_height().max(1.0);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.smooth.nudge(step),
        KeyCode::Char('k') | KeyCode::Up => state.smooth.nudge(-step),
        KeyCode::PageDown | KeyCode::Char(' ') => state.smooth.nudge(page),
        KeyCode::PageUp => state.smooth.nudge(-page),
        KeyCode::Home | KeyCode::Char('g') => state.smooth.set_target(0.0),
        KeyCode::End | KeyCode::Char('G') => state.smooth.set_target(state.scroll.max_offset()),
        KeyCode::Char('w') => jump_to_section(state, Section::Work),
        KeyCode::Char('a') => jump_to_section(state, Section::About),
        KeyCode::Char('s') => jump_to_section(state, Section::Skills),
        KeyCode::Char('c') | KeyCode::Enter => {
            jump_to_section(state, Section::Contact);
            state.active_view = ActiveView::Form;
        }
        KeyCode::Char('r') => {
            state.notify(format!("Résumé: {RESUME_PATH}"), false);
        }
        KeyCode::Char('d') => state.clause_demo.open(),
        _ => {}
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.active_view = ActiveView::Page,
        KeyCode::Tab | KeyCode::Down => state.form_focus = state.form_focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.form_focus = state.form_focus.prev(),
        KeyCode::Enter => match state.form_focus {
            FormFocus::Submit => submit_form(state),
            // Enter inserts a newline only in the multi-line message body.
            FormFocus::Field(Field::Message) => insert_char(state, Field::Message, '\n'),
            FormFocus::Field(_) => state.form_focus = state.form_focus.next(),
        },
        KeyCode::Backspace => {
            if let FormFocus::Field(field) = state.form_focus {
                state.form.value_mut(field).pop();
                state.errors.clear(field);
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            if let FormFocus::Field(field) = state.form_focus {
                insert_char(state, field, c);
            }
        }
        _ => {}
    }
}

fn insert_char(state: &mut AppState, field: Field, c: char) {
    let value = state.form.value_mut(field);
    if value.chars().count() < input_cap(field) {
        value.push(c);
    }
    // Editing a field clears its stale error immediately.
    state.errors.clear(field);
}

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state.cursor.on_pointer_move(mouse.column, mouse.row);
        }
        _ if state.clause_demo.is_open() => {
            // The overlay is modal: a click runs its primary action, the
            // wheel does not scroll the page underneath.
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                state.clause_demo.on_confirm(Instant::now());
            }
        }
        MouseEventKind::ScrollDown => state.smooth.nudge(state.config.scroll_step),
        MouseEventKind::ScrollUp => state.smooth.nudge(-state.config.scroll_step),
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(state, mouse.column, mouse.row);
        }
        _ => {}
    }
}

fn handle_click(state: &mut AppState, column: u16, row: u16) {
    let zones = state.hit_zones.clone();
    for (section, rect) in &zones.nav {
        if hit(*rect, column, row) {
            jump_to_section(state, *section);
            return;
        }
    }
    for (field, rect) in &zones.fields {
        if hit(*rect, column, row) {
            state.active_view = ActiveView::Form;
            state.form_focus = FormFocus::Field(*field);
            return;
        }
    }
    if let Some(rect) = zones.submit {
        if hit(rect, column, row) {
            state.active_view = ActiveView::Form;
            state.form_focus = FormFocus::Submit;
            submit_form(state);
        }
    }
}

fn hit(rect: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Scroll so `section` tops the viewport (honoring reduce-motion).
pub fn jump_to_section(state: &mut AppState, section: Section) {
    let Some(geometry) = state.section_geometry(section) else {
        return;
    };
    if state.config.reduce_motion {
        state.smooth.jump(geometry.top.min(state.scroll.max_offset()));
    } else {
        state.smooth.set_target(geometry.top);
    }
}

/// Run validation and, if the form is clean, start a submission.
///
/// An accepted submission stages the trimmed payload in `state.outbox`; the
/// lifecycle guarantees at most one staged payload per accepted generation.
pub fn submit_form(state: &mut AppState) {
    let errors = form::validate(&state.form);
    if !errors.is_empty() {
        // Park focus on the first broken field.
        if let Some(&field) = Field::ALL.iter().find(|f| errors.get(**f).is_some()) {
            state.form_focus = FormFocus::Field(field);
        }
        state.errors = errors;
        state.notify("Please fix the errors in the form", true);
        return;
    }
    state.errors = errors;

    if state.submission.begin().is_none() {
        return; // already pending or holding the success state
    }
    state.outbox = Some(EmailPayload {
        from_name: state.form.name.trim().to_string(),
        from_email: state.form.email.trim().to_string(),
        subject: state.form.subject.trim().to_string(),
        message: state.form.message.trim().to_string(),
    });
}

/// Fold a delivery outcome back into the state.  Stale generations are
/// dropped by the submission itself.
pub fn apply_send_update(state: &mut AppState, update: SendUpdate, now: Instant) {
    if update.generation != state.submission.generation() || !state.submission.is_pending() {
        return;
    }
    let success = update.result.is_ok();
    state.submission.settle(update.generation, success, now);
    if success {
        state.form.clear();
        state.errors = Default::default();
        state.notify("Message sent successfully!", false);
    } else {
        // Keep the typed values so the user can retry, and always surface a
        // direct way in.
        state.notify(
            format!("Failed to send message. Please try again or contact me directly at {FALLBACK_EMAIL}"),
            true,
        );
    }
}

/// Advance all animations by one frame.
pub fn on_tick(state: &mut AppState, now: Instant) {
    if state.config.reduce_motion {
        state.smooth.jump(state.smooth.target());
        state.cursor.snap();
    } else {
        state.smooth.tick();
        state.cursor.tick();
    }
    state.scroll.set_offset(state.smooth.offset());
    state.demo.tick(now);
    state.clause_demo.tick(now);
    state.submission.tick(now);
    state.particles.tick();

    if let Some(toast) = &state.toast {
        if now.duration_since(toast.shown_at) >= TOAST_DURATION {
            state.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::send_runtime::SendError;
    use crate::config::AppConfig;
    use crate::core::submit::{SubmitState, SUCCESS_HOLD};

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn fill_valid(state: &mut AppState) {
        state.form.name = "Jo Ann".into();
        state.form.email = "a@b.com".into();
        state.form.subject = "Hello there".into();
        state.form.message = "This is a valid message body.".into();
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn invalid_submit_surfaces_errors_and_stages_nothing() {
        let mut st = state();
        submit_form(&mut st);
        assert!(!st.errors.is_empty());
        assert!(st.outbox.is_none());
        assert!(st.submission.can_submit());
        assert!(st.toast.as_ref().is_some_and(|t| t.is_error));
        // Focus lands on the first broken field.
        assert_eq!(st.form_focus, FormFocus::Field(Field::Name));
    }

    #[test]
    fn valid_submit_stages_one_payload_and_goes_pending() {
        let mut st = state();
        fill_valid(&mut st);
        submit_form(&mut st);
        assert!(st.submission.is_pending());
        let payload = st.outbox.take().expect("payload staged");
        assert_eq!(payload.from_email, "a@b.com");

        // A second submit while pending is a complete no-op.
        let generation = st.submission.generation();
        submit_form(&mut st);
        assert!(st.outbox.is_none());
        assert_eq!(st.submission.generation(), generation);
    }

    #[test]
    fn success_clears_the_form_and_reverts_after_the_hold() {
        let mut st = state();
        fill_valid(&mut st);
        submit_form(&mut st);
        let generation = st.submission.generation();

        let t0 = Instant::now();
        apply_send_update(
            &mut st,
            SendUpdate {
                generation,
                result: Ok(()),
            },
            t0,
        );
        assert_eq!(st.submission.state(), SubmitState::Sent);
        assert!(st.form.name.is_empty());
        assert!(st.toast.as_ref().is_some_and(|t| !t.is_error));

        st.submission.tick(t0 + SUCCESS_HOLD);
        assert!(st.submission.can_submit());
    }

    #[test]
    fn failure_preserves_fields_and_rearms() {
        let mut st = state();
        fill_valid(&mut st);
        submit_form(&mut st);
        let generation = st.submission.generation();

        apply_send_update(
            &mut st,
            SendUpdate {
                generation,
                result: Err(SendError::Rejected(500)),
            },
            Instant::now(),
        );
        assert!(st.submission.can_submit());
        assert_eq!(st.form.email, "a@b.com");
        let toast = st.toast.expect("failure toast");
        assert!(toast.is_error);
        assert!(toast.text.contains(FALLBACK_EMAIL));
    }

    #[test]
    fn stale_outcome_changes_nothing() {
        let mut st = state();
        fill_valid(&mut st);
        submit_form(&mut st);
        let stale = st.submission.generation().wrapping_sub(1);
        apply_send_update(
            &mut st,
            SendUpdate {
                generation: stale,
                result: Ok(()),
            },
            Instant::now(),
        );
        assert!(st.submission.is_pending());
        assert_eq!(st.form.email, "a@b.com");
    }

    #[test]
    fn typing_clears_the_field_error() {
        let mut st = state();
        submit_form(&mut st); // all fields error
        st.active_view = ActiveView::Form;
        st.form_focus = FormFocus::Field(Field::Email);
        handle_key(&mut st, key(KeyCode::Char('a')));
        assert!(st.errors.get(Field::Email).is_none());
        assert!(st.errors.get(Field::Name).is_some());
        assert_eq!(st.form.email, "a");
    }

    #[test]
    fn input_caps_stop_growth() {
        let mut st = state();
        st.active_view = ActiveView::Form;
        st.form_focus = FormFocus::Field(Field::Name);
        for _ in 0..200 {
            handle_key(&mut st, key(KeyCode::Char('x')));
        }
        assert_eq!(st.form.name.chars().count(), input_cap(Field::Name));
    }

    #[test]
    fn enter_routes_by_focus() {
        let mut st = state();
        st.active_view = ActiveView::Form;
        st.form_focus = FormFocus::Field(Field::Name);
        handle_key(&mut st, key(KeyCode::Enter));
        assert_eq!(st.form_focus, FormFocus::Field(Field::Email));

        st.form_focus = FormFocus::Field(Field::Message);
        handle_key(&mut st, key(KeyCode::Enter));
        assert_eq!(st.form.message, "\n");
        assert_eq!(st.form_focus, FormFocus::Field(Field::Message));
    }

    #[test]
    fn escape_leaves_the_form_and_quit_works_from_page() {
        let mut st = state();
        st.active_view = ActiveView::Form;
        handle_key(&mut st, key(KeyCode::Esc));
        assert_eq!(st.active_view, ActiveView::Page);
        handle_key(&mut st, key(KeyCode::Char('q')));
        assert!(st.should_quit);
    }

    #[test]
    fn tick_drives_scroll_through_the_publisher() {
        let mut st = state();
        st.scroll.set_viewport_height(40.0);
        st.scroll.set_content_height(400.0);
        st.smooth.set_target(100.0);
        for _ in 0..200 {
            on_tick(&mut st, Instant::now());
        }
        assert_eq!(st.scroll.offset(), 100.0);
    }

    #[test]
    fn reduce_motion_snaps_instead_of_easing() {
        let mut st = AppState::new(AppConfig {
            reduce_motion: true,
            ..AppConfig::default()
        });
        st.scroll.set_viewport_height(40.0);
        st.scroll.set_content_height(400.0);
        st.smooth.set_target(100.0);
        on_tick(&mut st, Instant::now());
        assert_eq!(st.scroll.offset(), 100.0);
    }

    #[test]
    fn clause_demo_opens_takes_input_and_closes() {
        let mut st = state();
        handle_key(&mut st, key(KeyCode::Char('d')));
        assert!(st.clause_demo.is_open());

        // Page keys are swallowed while the overlay is up.
        handle_key(&mut st, key(KeyCode::Char('j')));
        assert_eq!(st.smooth.target(), 0.0);
        handle_key(&mut st, key(KeyCode::Char('q')));
        assert!(!st.should_quit);
        assert!(!st.clause_demo.is_open());
    }

    #[test]
    fn clause_demo_analysis_runs_on_the_tick() {
        let mut st = state();
        handle_key(&mut st, key(KeyCode::Char('d')));
        handle_key(&mut st, key(KeyCode::Enter));
        assert_eq!(st.clause_demo.step(), Some(0));

        let mut now = Instant::now();
        for _ in 0..crate::ui::clause_demo::ANALYSIS_STEPS {
            now += crate::ui::clause_demo::ANALYSIS_STEP_INTERVAL;
            on_tick(&mut st, now);
        }
        assert!(st.clause_demo.is_complete());

        // Enter on a finished analysis brings in the next clause.
        let before = st.clause_demo.clause().title;
        handle_key(&mut st, key(KeyCode::Enter));
        assert_ne!(st.clause_demo.clause().title, before);
    }

    #[test]
    fn toast_expires() {
        let mut st = state();
        st.notify("hello", false);
        let shown = st.toast.as_ref().unwrap().shown_at;
        on_tick(&mut st, shown + TOAST_DURATION);
        assert!(st.toast.is_none());
    }
}
