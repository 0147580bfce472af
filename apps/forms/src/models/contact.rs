#![allow(dead_code)]

use serde::Serialize;

use crate::controller::FormDraft;
use crate::validate::{self, ValidationReport};

/// Choices offered by the "Service Interest" dropdown. The field itself is
/// free-form on the wire; this list only feeds the presentation layer.
pub const SERVICE_INTEREST_OPTIONS: &[&str] = &[
    "Cybersecurity Solutions",
    "Website Development",
    "ERP Tool Development",
    "Other",
];

/// Draft of the contact form. Lives in memory from form mount until a
/// successful submit resets it to defaults. Field names follow the wire
/// format expected by `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service_interest: String,
    pub message: String,
}

impl FormDraft for ContactSubmission {
    const FORM_NAME: &'static str = "contact";
    const CONFIRMATION: &'static str =
        "Thank you for your inquiry! We will get back to you within 24 hours.";

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "company" => &mut self.company,
            "serviceInterest" => &mut self.service_interest,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    fn validate(&self, _resume_ceiling_bytes: u64) -> ValidationReport {
        validate::validate_contact(self)
    }
}
