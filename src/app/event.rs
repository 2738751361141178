//! Terminal event source and the animation frame clock.
//!
//! A background task forwards crossterm input over a channel and emits a
//! [`AppEvent::Frame`] on a fixed cadence.  Frames drive every animation
//! (smooth scroll, cursor follower, demo rotations), so they are scheduled
//! against a deadline rather than a poll timeout: a burst of input events
//! cannot starve the clock, and each frame carries the instant it fired so
//! handlers never re-read the clock mid-frame.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Animation frame, stamped with the instant it was scheduled.
    Frame(Instant),
}

/// Spawn the reader task.  `frame_rate` is the animation cadence; when
/// `capture_mouse` is off, mouse events are dropped at the source so the
/// handlers never see a pointer they should not react to.
pub fn spawn_event_reader(
    frame_rate: Duration,
    capture_mouse: bool,
) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut next_frame = Instant::now() + frame_rate;
        loop {
            let now = Instant::now();
            if now >= next_frame {
                if tx.send(AppEvent::Frame(now)).is_err() {
                    break; // receiver dropped
                }
                next_frame = now + frame_rate;
                continue;
            }

            // Poll only until the frame deadline, so input and frames
            // interleave without blocking each other.
            let ready = event::poll(poll_timeout(now, next_frame)).unwrap_or(false);
            if !ready {
                continue;
            }
            let Ok(ev) = event::read() else { continue };
            let app_event = match ev {
                CtEvent::Key(key) => AppEvent::Key(key),
                CtEvent::Mouse(mouse) if capture_mouse => AppEvent::Mouse(mouse),
                CtEvent::Mouse(_) => continue,
                CtEvent::Resize(width, height) => AppEvent::Resize(width, height),
                _ => continue,
            };
            if tx.send(app_event).is_err() {
                break;
            }
        }
    });

    rx
}

/// Time left until the frame deadline, zero once it has passed.
fn poll_timeout(now: Instant, deadline: Instant) -> Duration {
    deadline.saturating_duration_since(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_timeout_counts_down_to_the_deadline() {
        let now = Instant::now();
        let deadline = now + Duration::from_millis(33);
        assert_eq!(poll_timeout(now, deadline), Duration::from_millis(33));
        assert_eq!(
            poll_timeout(now + Duration::from_millis(30), deadline),
            Duration::from_millis(3)
        );
    }

    #[test]
    fn poll_timeout_never_goes_negative() {
        let now = Instant::now();
        let deadline = now;
        assert_eq!(poll_timeout(now + Duration::from_secs(1), deadline), Duration::ZERO);
        assert_eq!(poll_timeout(now, deadline), Duration::ZERO);
    }
}
