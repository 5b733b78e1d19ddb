//! BIS (Belgian number for foreigners).
//!
//! Issued to people without a national register number, such as
//! cross-border workers. Same layout as the national register number, but
//! the month is stored plus 40 when the holder's sex was known at issue and
//! plus 20 when it was not.

use chrono::NaiveDate;

use super::person::{self, BirthDate, Gender, MonthEncoding};
use crate::core::clean::clean_unicode;
use crate::core::{ReferenceDate, ValidateResult, ValidationError, Validator};

/// Belgian BIS number validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bis {
    reference: ReferenceDate,
}

impl Bis {
    /// Validator that checks birth dates against today's date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that treats `today` as the current date.
    pub fn at(today: NaiveDate) -> Self {
        Self::with_reference(ReferenceDate::Fixed(today))
    }

    /// Validator that checks birth dates against `reference`.
    pub fn with_reference(reference: ReferenceDate) -> Self {
        Self { reference }
    }

    /// Birth date encoded in a valid number, month offset removed.
    pub fn birth_date(&self, input: &str) -> Result<BirthDate, ValidationError> {
        person::birth_date(&compact(input), MonthEncoding::Offset, self.reference.resolve())
    }

    /// Sex of the holder, `None` when it was unknown at issue.
    pub fn gender(&self, input: &str) -> Result<Option<Gender>, ValidationError> {
        person::gender(&compact(input), MonthEncoding::Offset, self.reference.resolve())
    }
}

impl Validator for Bis {
    fn name(&self) -> &'static str {
        "Belgian Number for Foreigners"
    }

    fn local_name(&self) -> &'static str {
        "Numéro BIS"
    }

    fn abbreviation(&self) -> &'static str {
        "BIS"
    }

    fn compact(&self, input: &str) -> String {
        compact(input)
    }

    fn format(&self, input: &str) -> String {
        format(input)
    }

    fn validate(&self, input: &str) -> ValidateResult {
        validate_at(input, self.reference.resolve())
    }
}

/// Remove spaces, dashes and dots.
pub fn compact(input: &str) -> String {
    clean_unicode(input, " -.")
}

/// Display form `YY.MM.DD-SSS.CC` (month digits as stored).
pub fn format(input: &str) -> String {
    person::format_compact(compact(input))
}

/// Validate against today's date.
pub fn validate(input: &str) -> ValidateResult {
    Bis::new().validate(input)
}

/// Validate with `today` as the current date.
pub fn validate_at(input: &str, today: NaiveDate) -> ValidateResult {
    person::validate(&compact(input), MonthEncoding::Offset, today)
}
