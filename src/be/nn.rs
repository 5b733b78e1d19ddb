//! NN, NISS, RRN (Belgian national register number).
//!
//! The national register number (Rijksregisternummer, Numéro de registre
//! national) identifies natural persons registered in Belgium. It has 11
//! digits: the birth date as `YYMMDD`, a 3-digit serial (odd for men, even
//! for women) and 2 check digits over the first 9 digits, with a `2`
//! prepended for people born in 2000 or later.

use chrono::NaiveDate;

use super::person::{self, BirthDate, Gender, MonthEncoding};
use crate::core::clean::clean_unicode;
use crate::core::{ReferenceDate, ValidateResult, ValidationError, Validator};

/// Belgian national register number validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nn {
    reference: ReferenceDate,
}

impl Nn {
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

    /// Birth date encoded in a valid number.
    pub fn birth_date(&self, input: &str) -> Result<BirthDate, ValidationError> {
        person::birth_date(&compact(input), MonthEncoding::Plain, self.reference.resolve())
    }

    /// Sex of the holder of a valid number.
    pub fn gender(&self, input: &str) -> Result<Option<Gender>, ValidationError> {
        person::gender(&compact(input), MonthEncoding::Plain, self.reference.resolve())
    }
}

impl Validator for Nn {
    fn name(&self) -> &'static str {
        "Belgian National Number"
    }

    fn local_name(&self) -> &'static str {
        "Numéro National"
    }

    fn abbreviation(&self) -> &'static str {
        "NN, RN"
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

/// Display form `YY.MM.DD-SSS.CC`.
pub fn format(input: &str) -> String {
    person::format_compact(compact(input))
}

/// Validate against today's date.
pub fn validate(input: &str) -> ValidateResult {
    Nn::new().validate(input)
}

/// Validate with `today` as the current date.
pub fn validate_at(input: &str, today: NaiveDate) -> ValidateResult {
    person::validate(&compact(input), MonthEncoding::Plain, today)
}
