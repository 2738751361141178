//! Submit lifecycle for the contact form.
//!
//! One request may be in flight at a time.  The control is disabled (and
//! relabelled) while pending, a success holds a confirmation state for a
//! fixed duration before re-arming, and a failure re-arms immediately so the
//! user can edit and retry.  No retries, timeouts, or cancellation.

use std::time::{Duration, Instant};

/// How long the "Message Sent!" state is held before the form re-arms.
pub const SUCCESS_HOLD: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Nothing in flight; the form accepts a submit.
    Idle,
    /// Request outstanding; further submits are no-ops.
    Pending,
    /// Settled successfully; held until `SUCCESS_HOLD` elapses.
    Sent,
}

/// The request/response task viewed from the UI side.
///
/// A failure settles straight back to [`SubmitState::Idle`]; the error text
/// is surfaced through the status bar, not here.
#[derive(Debug, Clone)]
pub struct Submission {
    state: SubmitState,
    /// When the current `Sent` state was entered.
    sent_at: Option<Instant>,
    /// Monotonic id for in-flight requests; stale outcomes are dropped.
    generation: u64,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            state: SubmitState::Idle,
            sent_at: None,
            generation: 0,
        }
    }
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// Whether a submit attempt would currently be accepted.
    pub fn can_submit(&self) -> bool {
        self.state == SubmitState::Idle
    }

    /// Generation id of the most recently started request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Try to start a request.  Returns the new generation id when accepted,
    /// `None` while one is already pending or the success state is held.
    pub fn begin(&mut self) -> Option<u64> {
        if !self.can_submit() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = SubmitState::Pending;
        Some(self.generation)
    }

    /// Settle an outcome.  Outcomes from older generations are ignored.
    pub fn settle(&mut self, generation: u64, success: bool, now: Instant) {
        if generation != self.generation || self.state != SubmitState::Pending {
            return;
        }
        if success {
            self.state = SubmitState::Sent;
            self.sent_at = Some(now);
        } else {
            self.state = SubmitState::Idle;
            self.sent_at = None;
        }
    }

    /// Advance the success hold.  Returns `true` when the state reverted to
    /// idle on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state == SubmitState::Sent {
            if let Some(at) = self.sent_at {
                if now.duration_since(at) >= SUCCESS_HOLD {
                    self.state = SubmitState::Idle;
                    self.sent_at = None;
                    return true;
                }
            }
        }
        false
    }

    /// Label for the submit control in the current state.
    pub fn label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => "Send Message",
            SubmitState::Pending => "Sending...",
            SubmitState::Sent => "Message Sent!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_only_from_idle() {
        let mut sub = Submission::new();
        let gen = sub.begin();
        assert!(gen.is_some());
        assert!(sub.is_pending());
        // Second attempt while pending is a no-op.
        assert_eq!(sub.begin(), None);
        assert_eq!(sub.generation(), gen.unwrap());
    }

    #[test]
    fn success_holds_then_reverts() {
        let mut sub = Submission::new();
        let gen = sub.begin().unwrap();
        let t0 = Instant::now();
        sub.settle(gen, true, t0);
        assert_eq!(sub.state(), SubmitState::Sent);
        assert_eq!(sub.label(), "Message Sent!");
        // Still held inside the window — no submits accepted.
        assert!(!sub.tick(t0 + Duration::from_secs(1)));
        assert!(!sub.can_submit());
        // Window elapsed — re-armed.
        assert!(sub.tick(t0 + SUCCESS_HOLD));
        assert!(sub.can_submit());
    }

    #[test]
    fn failure_rearms_immediately() {
        let mut sub = Submission::new();
        let gen = sub.begin().unwrap();
        sub.settle(gen, false, Instant::now());
        assert_eq!(sub.state(), SubmitState::Idle);
        assert!(sub.can_submit());
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let mut sub = Submission::new();
        let old = sub.begin().unwrap();
        sub.settle(old, false, Instant::now());
        let fresh = sub.begin().unwrap();
        assert_ne!(old, fresh);
        // An outcome for the abandoned generation must not settle us.
        sub.settle(old, true, Instant::now());
        assert!(sub.is_pending());
    }

    #[test]
    fn labels_track_state() {
        let mut sub = Submission::new();
        assert_eq!(sub.label(), "Send Message");
        sub.begin();
        assert_eq!(sub.label(), "Sending...");
    }
}
