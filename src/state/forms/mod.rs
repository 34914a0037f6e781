//! Form domain layer
//!
//! Type-safe field values, the intake form record, and the pure validator.

mod field;
mod intake_form;
mod validate;

pub use field::{FieldValue, FormField};
pub use intake_form::{Form, IntakeForm, CAMPAIGNS, FIELD_COUNT, US_STATES};
pub use validate::{validate, ValidationErrors};

#[cfg(test)]
pub use validate::valid_form;
