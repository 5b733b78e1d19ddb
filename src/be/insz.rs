//! INSZ, NISS (Belgian social security identification number).
//!
//! Every person known to Belgian social security has one: either a national
//! register number or a BIS number. Validation tries both schemes on the
//! same input.

use chrono::NaiveDate;
use tracing::debug;

use super::person::{BirthDate, Gender, LENGTH};
use super::{bis, nn};
use crate::core::clean::{clean_unicode, is_digits};
use crate::core::{ReferenceDate, ValidateResult, ValidationError, Validator};

/// Belgian social security number validator (NN or BIS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insz {
    reference: ReferenceDate,
}

impl Insz {
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

    /// Birth date from whichever scheme accepts the number.
    pub fn birth_date(&self, input: &str) -> Result<BirthDate, ValidationError> {
        let today = self.reference.resolve();
        let number = validate_at(input, today)?.compact;
        if nn::validate_at(&number, today).is_ok() {
            nn::Nn::at(today).birth_date(&number)
        } else {
            bis::Bis::at(today).birth_date(&number)
        }
    }

    /// Sex of the holder from whichever scheme accepts the number.
    pub fn gender(&self, input: &str) -> Result<Option<Gender>, ValidationError> {
        let today = self.reference.resolve();
        let number = validate_at(input, today)?.compact;
        if nn::validate_at(&number, today).is_ok() {
            nn::Nn::at(today).gender(&number)
        } else {
            bis::Bis::at(today).gender(&number)
        }
    }
}

impl Validator for Insz {
    fn name(&self) -> &'static str {
        "Belgian Social Security Identification Number"
    }

    fn local_name(&self) -> &'static str {
        "Identificatienummer van de Sociale Zekerheid"
    }

    fn abbreviation(&self) -> &'static str {
        "INSZ"
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
    nn::format(input)
}

/// Validate against today's date.
pub fn validate(input: &str) -> ValidateResult {
    Insz::new().validate(input)
}

/// Validate with `today` as the current date.
///
/// When both schemes reject the number and only the BIS check got as far as
/// the check digits, its checksum error is reported. Otherwise the national
/// register number's error is reported.
pub fn validate_at(input: &str, today: NaiveDate) -> ValidateResult {
    let number = compact(input);
    if number.chars().count() != LENGTH {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) || number.bytes().all(|b| b == b'0') {
        return Err(ValidationError::InvalidFormat);
    }

    let nn_err = match nn::validate_at(&number, today) {
        Ok(valid) => return Ok(valid),
        Err(e) => e,
    };
    let bis_err = match bis::validate_at(&number, today) {
        Ok(valid) => return Ok(valid),
        Err(e) => e,
    };

    let reported = if !nn_err.is_checksum() && bis_err.is_checksum() {
        bis_err
    } else {
        nn_err
    };
    debug!(?nn_err, ?bis_err, ?reported, "number rejected by both NN and BIS");
    Err(reported)
}
