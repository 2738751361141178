//! folio — a single-page animated portfolio for the terminal.
//!
//! One tall virtual page of stacked sections is scrolled inside the terminal
//! viewport.  A background task reads terminal events and ticks the
//! animation clock; email delivery runs on its own tasks so the UI never
//! blocks on the network.

mod app;
mod config;
mod core;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::event::{spawn_event_reader, AppEvent};
use crate::app::send_runtime::{self, SendUpdate};
use crate::app::state::{ActiveView, AppState, HitZones};
use crate::config::AppConfig;
use crate::ui::{
    clause_demo::ClauseDemoPopup,
    header::{self, Header},
    layout::AppLayout,
    page::{self, PageView},
    progress::ScrollProgressBar,
    theme::Theme,
};

/// Animation frame cadence (~30 fps).
const FRAME_RATE: Duration = Duration::from_millis(33);

#[derive(Parser)]
#[command(name = "folio", version, about = "Terminal portfolio — scroll-driven sections and a contact form")]
struct Cli {
    /// Skip scroll and cursor easing; everything snaps to its target.
    #[arg(long)]
    reduce_motion: bool,

    /// Disable mouse capture (scrolling and clicking with the mouse).
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    if cli.reduce_motion {
        config.reduce_motion = true;
    }
    if config.email.is_none() {
        tracing::info!("email credentials not configured; contact form sends will fail over to the fallback address");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if !cli.no_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let state = AppState::new(config);
    let result = run(&mut terminal, state, !cli.no_mouse).await;

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    if !cli.no_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    capture_mouse: bool,
) -> Result<()> {
    let mut events = spawn_event_reader(FRAME_RATE, capture_mouse);
    let (send_tx, mut send_rx) = mpsc::unbounded_channel::<SendUpdate>();

    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        // Dispatch any payload the handler staged this frame.
        if let Some(payload) = state.outbox.take() {
            send_runtime::spawn_send(
                send_tx.clone(),
                state.submission.generation(),
                state.config.email.clone(),
                payload,
            );
        }

        tokio::select! {
            Some(event) = events.recv() => match event {
                AppEvent::Key(key) => app::handler::handle_key(&mut state, key),
                AppEvent::Mouse(mouse) => app::handler::handle_mouse(&mut state, mouse),
                AppEvent::Resize(width, height) => state.particles.regenerate(width, height),
                AppEvent::Frame(now) => app::handler::on_tick(&mut state, now),
            },
            Some(update) = send_rx.recv() => {
                app::handler::apply_send_update(&mut state, update, Instant::now());
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Render one frame and refresh the geometry bookkeeping (section positions,
/// mouse hit zones) that input handling reads next.
fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    if area != state.terminal_area {
        state.particles.regenerate(area.width, area.height);
        state.terminal_area = area;
    }

    let layout = AppLayout::from_area(area, state.scroll.elevated());
    state.scroll.set_viewport_height(f64::from(layout.body_area.height));

    let built = page::build(state, layout.body_area.width as usize);
    state.scroll.set_content_height(built.height() as f64);
    state.smooth.clamp_target(state.scroll.max_offset());
    state.scroll.set_offset(state.smooth.offset());
    state.sections = built.sections.clone();

    let offset = state.scroll.offset();
    state.hit_zones = hit_zones(&built, layout.header_area, layout.body_area, offset);

    frame.render_widget(PageView::new(&built, offset), layout.body_area);
    frame.render_widget(&state.particles, layout.body_area);
    frame.render_widget(
        Header {
            elevated: state.scroll.elevated(),
            current: built.current_section(offset),
        },
        layout.header_area,
    );
    frame.render_widget(
        ScrollProgressBar {
            progress: state.scroll.page_progress(),
        },
        layout.progress_area,
    );
    render_status(frame, state, layout.status_area);
    if state.clause_demo.is_open() {
        frame.render_widget(
            ClauseDemoPopup {
                demo: &state.clause_demo,
            },
            area,
        );
    }
    frame.render_widget(&state.cursor, area);
}

/// Map the page-row zones from this layout into screen rectangles, dropping
/// anything scrolled out of the viewport.
fn hit_zones(built: &page::PageBuild, header: Rect, body: Rect, offset: f64) -> HitZones {
    let offset = offset.max(0.0).round() as usize;
    let to_screen = |page_row: usize, height: usize| -> Option<Rect> {
        let bottom = offset + body.height as usize;
        if page_row + height <= offset || page_row >= bottom {
            return None;
        }
        let top = page_row.max(offset);
        let visible = (page_row + height).min(bottom) - top;
        Some(Rect::new(
            body.x + 4,
            body.y + (top - offset) as u16,
            body.width.saturating_sub(8),
            visible as u16,
        ))
    };

    let mut zones = HitZones {
        nav: header::nav_zones(header),
        ..HitZones::default()
    };
    for &(field, row, height) in &built.field_rows {
        if let Some(rect) = to_screen(row, height) {
            zones.fields.push((field, rect));
        }
    }
    zones.submit = to_screen(built.submit_row, 1);
    zones
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let (text, style) = match &state.toast {
        Some(toast) if toast.is_error => (toast.text.clone(), Theme::toast_error_style()),
        Some(toast) => (toast.text.clone(), Theme::toast_style()),
        None => {
            let hint = match state.active_view {
                ActiveView::Page => {
                    " q quit · j/k scroll · w/a/s/c sections · d demo · r résumé · Enter to write"
                }
                ActiveView::Form => " Esc done · Tab next field · Enter submit",
            };
            (hint.to_string(), Theme::status_bar_style())
        }
    };

    // Paint the bar background first so short text still fills the row.
    let band = Line::from(Span::styled(" ".repeat(area.width as usize), style));
    frame.buffer_mut().set_line(area.x, area.y, &band, area.width);

    let pct = (state.scroll.page_progress() * 100.0).round() as u16;
    let right = format!("{pct:>3}% ");
    let line = Line::from(Span::styled(text, style));
    frame.buffer_mut().set_line(area.x, area.y, &line, area.width);
    let right_x = area.right().saturating_sub(right.len() as u16);
    frame.buffer_mut().set_string(right_x, area.y, right, style);
}
