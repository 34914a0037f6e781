//! Field validation for the intake form

use super::intake_form::IntakeForm;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Mapping of field name to human-readable validation message.
/// An empty mapping signals a valid form.
pub type ValidationErrors = HashMap<&'static str, String>;

static SSN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{9}$").expect("valid pattern"));
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid pattern"));
static ZIP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").expect("valid pattern"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));

/// Validate the whole form. Every rule is evaluated on every call;
/// no side effects.
pub fn validate(form: &IntakeForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.campaign.is_empty() {
        errors.insert(form.campaign.name, "Campaign is required.".to_string());
    }
    if form.first_name.is_empty() {
        errors.insert(form.first_name.name, "First name is required.".to_string());
    }
    if form.last_name.is_empty() {
        errors.insert(form.last_name.name, "Last name is required.".to_string());
    }
    if !SSN_PATTERN.is_match(form.ssn.as_text()) {
        errors.insert(form.ssn.name, "SSN must be a 9-digit number.".to_string());
    }
    if form.dob.is_empty() {
        errors.insert(form.dob.name, "Date of birth is required.".to_string());
    } else if NaiveDate::parse_from_str(form.dob.as_text().trim(), "%Y-%m-%d").is_err() {
        errors.insert(
            form.dob.name,
            "Date of birth must be a valid YYYY-MM-DD date.".to_string(),
        );
    }
    if !PHONE_PATTERN.is_match(form.phone.as_text()) {
        errors.insert(
            form.phone.name,
            "Phone number must be 10 digits.".to_string(),
        );
    }
    if !EMAIL_PATTERN.is_match(form.email.as_text()) {
        errors.insert(form.email.name, "Invalid email format.".to_string());
    }
    if form.address.is_empty() {
        errors.insert(form.address.name, "Address is required.".to_string());
    }
    if form.city.is_empty() {
        errors.insert(form.city.name, "City is required.".to_string());
    }
    if form.state.is_empty() {
        errors.insert(form.state.name, "State selection is required.".to_string());
    }
    if !ZIP_PATTERN.is_match(form.zip_code.as_text()) {
        errors.insert(form.zip_code.name, "ZIP Code must be 5 digits.".to_string());
    }
    if form.id_document.is_empty() {
        errors.insert(form.id_document.name, "ID document is required.".to_string());
    }
    if form.headshot.is_empty() {
        errors.insert(
            form.headshot.name,
            "Headshot image is required.".to_string(),
        );
    }
    if form.card_photo.is_empty() {
        errors.insert(
            form.card_photo.name,
            "Card holding image is required.".to_string(),
        );
    }

    errors
}

#[cfg(test)]
pub fn valid_form() -> IntakeForm {
    let mut form = IntakeForm::new();
    form.campaign.select_next();
    form.first_name.set_text("Jane".to_string());
    form.last_name.set_text("Doe".to_string());
    form.ssn.set_text("123456789".to_string());
    form.dob.set_text("1990-04-17".to_string());
    form.phone.set_text("5551234567".to_string());
    form.email.set_text("jane.doe@example.com".to_string());
    form.address.set_text("100 Main St".to_string());
    form.city.set_text("Springfield".to_string());
    form.state.select_next();
    form.zip_code.set_text("62704".to_string());
    form.id_document.set_text("/tmp/id.png".to_string());
    form.headshot.set_text("/tmp/headshot.png".to_string());
    form.card_photo.set_text("/tmp/card.png".to_string());
    form
}
