#![allow(dead_code)]

use bytes::Bytes;

use crate::controller::FormDraft;
use crate::validate::{self, ValidationReport};

/// An uploaded resume: filename and declared MIME type as the browser (or
/// host) reported them, plus the raw bytes. `Bytes` keeps clones cheap while
/// the draft is copied around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, bytes: Bytes) -> Self {
        ResumeFile {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased filename extension, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.filename.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Draft of the job-application form. `position` is seeded from the chosen
/// `JobListing` and is not edited directly. The resume must be present and
/// accepted by the validator before a submit reaches the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub current_company: String,
    pub expected_salary: String,
    pub notice_period: String,
    pub skills: String,
    pub cover_letter: String,
    pub resume: Option<ResumeFile>,
}

impl JobApplication {
    /// Scalar fields in wire order, paired with their multipart part names.
    pub fn scalar_fields(&self) -> [(&'static str, &str); 10] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("position", &self.position),
            ("experience", &self.experience),
            ("currentCompany", &self.current_company),
            ("expectedSalary", &self.expected_salary),
            ("noticePeriod", &self.notice_period),
            ("skills", &self.skills),
            ("coverLetter", &self.cover_letter),
        ]
    }
}

impl FormDraft for JobApplication {
    const FORM_NAME: &'static str = "job-application";
    const CONFIRMATION: &'static str =
        "Application submitted successfully! You will receive a confirmation email shortly.";

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "experience" => &mut self.experience,
            "currentCompany" => &mut self.current_company,
            "expectedSalary" => &mut self.expected_salary,
            "noticePeriod" => &mut self.notice_period,
            "skills" => &mut self.skills,
            "coverLetter" => &mut self.cover_letter,
            _ => return false, // position and resume are not plain text fields
        };
        *slot = value.to_string();
        true
    }

    fn validate(&self, resume_ceiling_bytes: u64) -> ValidationReport {
        validate::validate_application(self, resume_ceiling_bytes)
    }
}
