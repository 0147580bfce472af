#![allow(dead_code)]

//! Form controller — wires validator, status tracking and transport together
//! for one form instance.
//!
//! The presentation layer binds to `draft()`/`status()` and calls the methods
//! here on user events; it never talks to the transport directly. Controllers
//! for different forms are fully independent and share no mutable state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::catalog::JobListing;
use crate::config::Config;
use crate::models::job::{JobApplication, ResumeFile};
use crate::status::{StatusTracker, SubmissionStatus};
use crate::transport::Transport;
use crate::validate::ValidationReport;

/// What a form draft must provide for the controller to drive it. Implemented
/// by `ContactSubmission` and `JobApplication`.
pub trait FormDraft: Default + Send + Sync {
    /// Short name used in log lines.
    const FORM_NAME: &'static str;
    /// Confirmation banner text when the server ack carries no message.
    const CONFIRMATION: &'static str;

    /// Applies a text edit. Returns false for fields the draft does not have.
    fn set_field(&mut self, field: &str, value: &str) -> bool;
    fn validate(&self, resume_ceiling_bytes: u64) -> ValidationReport;
}

pub struct FormController<D, T> {
    draft: D,
    tracker: StatusTracker,
    transport: Arc<T>,
    resume_ceiling_bytes: u64,
}

impl<D: FormDraft, T: Transport<D>> FormController<D, T> {
    pub fn new(config: &Config, transport: Arc<T>) -> Self {
        FormController {
            draft: D::default(),
            tracker: StatusTracker::new(config.status_display_window()),
            transport,
            resume_ceiling_bytes: config.resume_ceiling_bytes,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.tracker.status()
    }

    /// Current validation state of the draft, for live inline feedback.
    pub fn validate(&self) -> ValidationReport {
        self.draft.validate(self.resume_ceiling_bytes)
    }

    /// Applies a keystroke-level edit. Any showing success/error banner is
    /// dismissed; edits to unknown fields are dropped with a warning.
    pub fn update_field(&mut self, field: &str, value: &str) {
        if !self.draft.set_field(field, value) {
            warn!("Ignoring edit to unknown {} field '{field}'", D::FORM_NAME);
            return;
        }
        self.tracker.note_edit();
    }

    /// Validates and, if the draft is well formed, performs exactly one
    /// transport call. A submit while one is already in flight is a silent
    /// no-op. On success the draft resets to defaults; on failure it is kept
    /// so the user can retry without retyping.
    pub async fn submit(&mut self) {
        if self.tracker.status().is_submitting() {
            debug!("Duplicate {} submit ignored", D::FORM_NAME);
            return;
        }

        let report = self.draft.validate(self.resume_ceiling_bytes);
        if !report.is_valid() {
            debug!(
                "{} submit blocked by validation: {} error(s)",
                D::FORM_NAME,
                report.errors.len()
            );
            self.tracker.fail(report.summary(), Instant::now());
            return;
        }

        if !self.tracker.begin_submit() {
            // Succeeded banner still showing; nothing to resend.
            debug!("{} submit ignored in state {:?}", D::FORM_NAME, self.tracker.status());
            return;
        }

        match self.transport.send(&self.draft).await {
            Ok(ack) => {
                let message = ack
                    .message
                    .unwrap_or_else(|| D::CONFIRMATION.to_string());
                self.draft = D::default();
                self.tracker.succeed(message, Instant::now());
            }
            Err(e) => {
                self.tracker.fail(e.to_string(), Instant::now());
            }
        }
    }

    /// Returns the draft to empty defaults and the status to idle.
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.tracker.reset();
    }

    /// Applies the timed banner clear if due. Hosts call this from their own
    /// scheduler with their own clock; tests pass synthetic instants.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tracker.tick(now)
    }

    pub fn time_until_clear(&self, now: Instant) -> Option<Duration> {
        self.tracker.time_until_clear(now)
    }
}

impl<T: Transport<JobApplication>> FormController<JobApplication, T> {
    /// Controller for applying to a specific opening; the listing seeds the
    /// position, which is not edited afterwards.
    pub fn for_listing(listing: &JobListing, config: &Config, transport: Arc<T>) -> Self {
        let mut controller = Self::new(config, transport);
        controller.draft = listing.start_application();
        controller
    }

    pub fn attach_resume(&mut self, file: ResumeFile) {
        self.draft.resume = Some(file);
        self.tracker.note_edit();
    }

    pub fn remove_resume(&mut self) {
        self.draft.resume = None;
        self.tracker.note_edit();
    }
}
