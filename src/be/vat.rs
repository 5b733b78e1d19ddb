//! BTW, TVA, NWSt, ondernemingsnummer (Belgian enterprise number).
//!
//! The enterprise number identifies companies within the Belgian
//! administration and doubles as the VAT number. It has 10 digits; the last
//! two are `97 - (first eight mod 97)`. Older 9-digit numbers are padded
//! with a leading zero.

use crate::core::checksum::{mod97, mod97_matches};
use crate::core::clean::{clean_unicode, is_digits, split_at_many, strip_prefix_any};
use crate::core::{ValidateResult, Validated, ValidationError, Validator};

const LENGTH: usize = 10;

/// Belgian VAT / enterprise number validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vat;

impl Validator for Vat {
    fn name(&self) -> &'static str {
        "Belgian VAT Number"
    }

    fn local_name(&self) -> &'static str {
        "Ondernemingsnummer"
    }

    fn abbreviation(&self) -> &'static str {
        "BTW, TVA, NWSt"
    }

    fn compact(&self, input: &str) -> String {
        compact(input)
    }

    fn format(&self, input: &str) -> String {
        format(input)
    }

    fn validate(&self, input: &str) -> ValidateResult {
        validate(input)
    }
}

/// Remove separators and the `BE` prefix, expand `(0)` and pad 9-digit
/// numbers to 10.
pub fn compact(input: &str) -> String {
    let cleaned = clean_unicode(input, " -./");
    let mut value = strip_prefix_any(&cleaned, &["BE"]).to_string();
    if let Some(rest) = value.strip_prefix("(0)") {
        value = format!("0{rest}");
    }
    if value.chars().count() == 9 {
        value.insert(0, '0');
    }
    value
}

/// Display form `NNNN.NNN.NNN`.
pub fn format(input: &str) -> String {
    let value = compact(input);
    if value.len() != LENGTH || !is_digits(&value) {
        return value;
    }
    split_at_many(&value, &[4, 7]).join(".")
}

/// Validate the number and its check digits.
pub fn validate(input: &str) -> ValidateResult {
    let value = compact(input);
    if value.chars().count() != LENGTH {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&value) {
        return Err(ValidationError::InvalidFormat);
    }

    let (front, check) = value.split_at(8);
    let front = mod97(front).ok_or(ValidationError::InvalidFormat)?;
    let check: u64 = check.parse().map_err(|_| ValidationError::InvalidFormat)?;
    if !mod97_matches(front, check) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(Validated::company(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_pads_and_strips_prefix() {
        assert_eq!(compact("403019261"), "0403019261");
        assert_eq!(compact("BE403019261"), "0403019261");
        assert_eq!(compact("be 0403.019.261"), "0403019261");
        assert_eq!(compact("(0)403019261"), "0403019261");
    }

    #[test]
    fn format_display() {
        assert_eq!(format("403019261"), "0403.019.261");
        assert_eq!(format("12345678"), "12345678");
    }

    #[test]
    fn valid_numbers() {
        for (input, compacted) in [
            ("BE403019261", "0403019261"),
            ("(0)403019261", "0403019261"),
            ("BE 428759497", "0428759497"),
            ("BE 0417497106", "0417497106"),
        ] {
            let v = validate(input).unwrap();
            assert_eq!(v.compact, compacted);
            assert!(v.is_company);
            assert!(!v.is_individual);
        }
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("12345678"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("BE431150351"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("BE04030192AB"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn formatted_output_validates() {
        assert!(Vat.is_valid(&format("BE 428759497")));
    }
}
