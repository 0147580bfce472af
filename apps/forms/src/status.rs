#![allow(dead_code)]

//! Submission status tracking for a single form instance.
//!
//! `Idle → Submitting → Succeeded | Failed → Idle`. The reversion to idle is
//! either immediate (next user edit) or timed (the banner display window).
//! The timed path is modelled as an explicit deadline the host ticks with its
//! own notion of "now", so tests drive time deterministically instead of
//! sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded { message: String },
    Failed { message: String },
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// Banner text for the presentation layer, if any is showing.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded { message } | SubmissionStatus::Failed { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}

/// The per-form state machine plus its timed-clear deadline. Owned by one
/// `FormController`; never shared across forms.
#[derive(Debug)]
pub struct StatusTracker {
    status: SubmissionStatus,
    display_window: Duration,
    clear_at: Option<Instant>,
}

impl StatusTracker {
    pub fn new(display_window: Duration) -> Self {
        StatusTracker {
            status: SubmissionStatus::Idle,
            display_window,
            clear_at: None,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Attempts the `Submitting` transition. Allowed from `Idle` and `Failed`
    /// only; returns false (and changes nothing) otherwise, which makes a
    /// double-click while in flight a silent no-op.
    pub fn begin_submit(&mut self) -> bool {
        match self.status {
            SubmissionStatus::Idle | SubmissionStatus::Failed { .. } => {
                self.status = SubmissionStatus::Submitting;
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn succeed(&mut self, message: String, now: Instant) {
        self.status = SubmissionStatus::Succeeded { message };
        self.clear_at = Some(now + self.display_window);
    }

    pub fn fail(&mut self, message: String, now: Instant) {
        self.status = SubmissionStatus::Failed { message };
        self.clear_at = Some(now + self.display_window);
    }

    /// A user edit dismisses any showing banner immediately.
    pub fn note_edit(&mut self) {
        if self.status.message().is_some() {
            self.status = SubmissionStatus::Idle;
            self.clear_at = None;
        }
    }

    /// Applies the timed clear if its deadline has passed. Returns true when
    /// a transition happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.status = SubmissionStatus::Idle;
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }

    /// Remaining banner time, for hosts that want to schedule the next tick.
    pub fn time_until_clear(&self, now: Instant) -> Option<Duration> {
        self.clear_at.map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn reset(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.clear_at = None;
    }
}
