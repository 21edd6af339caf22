use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{DemoRequest, FieldId};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const STORE_TYPE_REQUIRED: &str = "Please select your store type";
pub const COMPANY_REQUIRED: &str = "Please enter your company name";

/// A failed rule for one field. The message is what gets shown under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: &'static str,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Length in UTF-16 code units, the way the browser measures input values.
fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().encode_utf16().count() >= min
}

pub fn validate_field(field: FieldId, value: &str) -> Result<(), FieldError> {
    let failed = |message| Err(FieldError { field, message });

    match field {
        FieldId::Name if !has_min_chars(value, 2) => failed(NAME_REQUIRED),
        FieldId::Email if !is_valid_email(value) => failed(EMAIL_INVALID),
        // An unknown option still counts as a selection; the record carries it verbatim.
        FieldId::StoreType if value.is_empty() => failed(STORE_TYPE_REQUIRED),
        FieldId::Company if !has_min_chars(value, 2) => failed(COMPANY_REQUIRED),
        _ => Ok(()),
    }
}

/// Outcome of checking every field. Each field is checked on its own, so
/// all failures are available at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub errors: BTreeMap<FieldId, &'static str>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}

pub fn validate_form(request: &DemoRequest) -> FormValidation {
    let errors = FieldId::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, request.value(field)).err())
        .map(|err| (err.field, err.message))
        .collect();

    FormValidation { errors }
}
