#![allow(dead_code)]

//! Field validation for the contact and job-application drafts.
//!
//! Pure functions with no side effects — cheap enough to run on every
//! keystroke for live feedback, or once at submit time. The controller calls
//! these before anything touches the network.

use crate::models::contact::ContactSubmission;
use crate::models::job::{JobApplication, ResumeFile};

/// File extensions the resume upload accepts.
pub const ACCEPTED_RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    MissingField,
    InvalidEmail,
    InvalidFile,
}

/// One field-level failure with a message ready for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Outcome of validating a whole draft. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// All field messages joined into one banner-sized string.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                kind: FieldErrorKind::MissingField,
                message: format!("{label} is required."),
            });
        }
    }

    fn check_email(&mut self, field: &'static str, value: &str) {
        // Missing is reported by `require`; only flag shape on non-empty input.
        if !value.trim().is_empty() && !is_valid_email(value) {
            self.errors.push(FieldError {
                field,
                kind: FieldErrorKind::InvalidEmail,
                message: "Email address is not valid.".to_string(),
            });
        }
    }

    fn check_resume(&mut self, resume: Option<&ResumeFile>, ceiling_bytes: u64) {
        let Some(file) = resume else {
            self.errors.push(FieldError {
                field: "resume",
                kind: FieldErrorKind::InvalidFile,
                message: "A resume attachment is required.".to_string(),
            });
            return;
        };

        match file.extension() {
            Some(ext) if ACCEPTED_RESUME_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                self.errors.push(FieldError {
                    field: "resume",
                    kind: FieldErrorKind::InvalidFile,
                    message: "Only PDF and DOC/DOCX files are allowed.".to_string(),
                });
                return;
            }
        }

        if file.size() > ceiling_bytes {
            let ceiling_mb = ceiling_bytes / (1024 * 1024);
            self.errors.push(FieldError {
                field: "resume",
                kind: FieldErrorKind::InvalidFile,
                message: format!("Resume must be {ceiling_mb} MB or smaller."),
            });
        }
    }
}

/// Minimal email shape check: at least one `@` with a non-empty local part,
/// at least one `.` somewhere after it that is neither the first nor the
/// last character of the domain, and no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = value.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let domain = &value[at + 1..];
    match domain.find('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

pub fn validate_contact(draft: &ContactSubmission) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.require("name", "Name", &draft.name);
    report.require("email", "Email address", &draft.email);
    report.check_email("email", &draft.email);
    report.require("message", "Message", &draft.message);
    report
}

pub fn validate_application(draft: &JobApplication, ceiling_bytes: u64) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.require("name", "Name", &draft.name);
    report.require("email", "Email address", &draft.email);
    report.check_email("email", &draft.email);
    report.require("phone", "Phone number", &draft.phone);
    report.check_resume(draft.resume.as_ref(), ceiling_bytes);
    report
}
