#![cfg(feature = "be")]

use chrono::NaiveDate;
use stdnum::be::*;
use stdnum::{ReferenceDate, ValidationError, Validator};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 6, 15)
}

/// Check digits for a 9-digit base, read as a 20th or 21st century number.
fn check_digits(base: &str, born_from_2000: bool) -> String {
    let mut n: u64 = base.parse().unwrap();
    if born_from_2000 {
        n += 2_000_000_000;
    }
    format!("{:02}", 97 - n % 97)
}

// ---------------------------------------------------------------------------
// National register number
// ---------------------------------------------------------------------------

#[test]
fn nn_valid_standard_date() {
    let v = nn::validate_at("88022999990", today()).unwrap();
    assert_eq!(v.compact, "88022999990");
    assert!(v.is_individual);
    assert!(!v.is_company);
}

#[test]
fn nn_length_error() {
    assert_eq!(
        nn::validate_at("1", today()),
        Err(ValidationError::InvalidLength)
    );
    assert_eq!(
        nn::validate_at("880229999900", today()),
        Err(ValidationError::InvalidLength)
    );
}

#[test]
fn nn_separators_and_unicode_dashes() {
    assert!(nn::validate_at("88.02.29-999.90", today()).is_ok());
    assert!(nn::validate_at("88\u{2013}02\u{2013}29 999 90", today()).is_ok());
    assert!(nn::validate_at("\u{FF18}8022999990", today()).is_ok());
}

#[test]
fn nn_century_only_1900s() {
    let base = "990430999";
    let old = format!("{base}{}", check_digits(base, false));
    let new = format!("{base}{}", check_digits(base, true));
    assert!(nn::validate_at(&old, today()).is_ok());
    assert_eq!(
        nn::validate_at(&new, today()),
        Err(ValidationError::InvalidChecksum)
    );
}

#[test]
fn nn_century_only_2000s() {
    let base = "000229999";
    let old = format!("{base}{}", check_digits(base, false));
    let new = format!("{base}{}", check_digits(base, true));
    assert!(nn::validate_at(&new, today()).is_ok());
    assert_eq!(
        nn::validate_at(&old, today()),
        Err(ValidationError::InvalidChecksum)
    );
}

#[test]
fn nn_century_either() {
    let base = "100430999";
    for born_from_2000 in [false, true] {
        let number = format!("{base}{}", check_digits(base, born_from_2000));
        assert!(nn::validate_at(&number, today()).is_ok(), "{number}");
    }
}

#[test]
fn nn_unknown_birth_date_this_year() {
    let yy = 24;
    let base = format!("{yy:02}0000999");
    let number = format!("{base}{}", check_digits(&base, true));
    assert!(nn::validate_at(&number, today()).is_ok(), "{number}");
}

#[test]
fn nn_unknown_birth_date_a_century_ago() {
    let base = "240000999";
    let number = format!("{base}{}", check_digits(base, false));
    assert!(nn::validate_at(&number, today()).is_ok(), "{number}");
}

#[test]
fn nn_unknown_birth_date_in_future_century_not_tried() {
    let base = "250000999";
    let number = format!("{base}{}", check_digits(base, true));
    // 2025 has not started yet on the reference date
    assert_eq!(
        nn::validate_at(&number, today()),
        Err(ValidationError::InvalidChecksum)
    );
    assert!(nn::validate_at(&number, date(2025, 1, 1)).is_ok());
}

#[test]
fn nn_future_birth_date_rejected_before_checksum() {
    let before_2000 = date(1999, 12, 31);
    let base = "000229999";
    let number = format!("{base}{}", check_digits(base, true));
    assert_eq!(
        nn::validate_at(&number, before_2000),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn nn_unknown_birth_date_after_reference_is_checksum_error() {
    let in_1985 = date(1985, 1, 1);
    assert_eq!(
        nn::validate_at("99000099913", in_1985),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(
        bis::validate_at("99200199926", in_1985),
        Err(ValidationError::InvalidChecksum)
    );
    // the checksum error wins the INSZ tie-break
    assert_eq!(
        insz::validate_at("99000099913", in_1985),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(
        insz::validate_at("99200199926", in_1985),
        Err(ValidationError::InvalidChecksum)
    );
}

#[test]
fn nn_birth_tomorrow_accepted() {
    let base = "240616999";
    let number = format!("{base}{}", check_digits(base, true));
    assert!(nn::validate_at(&number, today()).is_ok());
    let base = "240617999";
    let number = format!("{base}{}", check_digits(base, true));
    assert!(nn::validate_at(&number, today()).is_err());
}

#[test]
fn nn_rolled_over_day_rejected() {
    let base = "880230999";
    let number = format!("{base}{}", check_digits(base, false));
    assert_eq!(
        nn::validate_at(&number, today()),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn nn_non_digit_is_format_error() {
    assert_eq!(
        nn::validate_at("8802299999X", today()),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn nn_birth_date() {
    assert_eq!(
        Nn::at(today()).birth_date("85.07.30-033.28"),
        Ok(BirthDate::Known(date(1985, 7, 30)))
    );
    assert_eq!(
        Nn::at(today()).birth_date("85.07.30-033.29"),
        Err(ValidationError::InvalidChecksum)
    );
}

// ---------------------------------------------------------------------------
// BIS
// ---------------------------------------------------------------------------

#[test]
fn bis_offset_20() {
    let v = bis::validate_at("88222999936", today()).unwrap();
    assert_eq!(v.compact, "88222999936");
    assert!(bis::validate_at("08222999934", today()).is_ok());
}

#[test]
fn bis_offset_40() {
    assert!(bis::validate_at("88422999979", today()).is_ok());
    assert!(bis::validate_at("08422999977", today()).is_ok());
}

#[test]
fn bis_wrong_check_digits() {
    assert_eq!(
        bis::validate_at("08222999935", today()),
        Err(ValidationError::InvalidChecksum)
    );
}

#[test]
fn bis_no_viable_month() {
    assert_eq!(
        bis::validate_at("96331699989", today()),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn bis_rejects_plain_month() {
    assert_eq!(
        bis::validate_at("88022999990", today()),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn bis_unknown_birth_date_both_offsets() {
    for offset in ["20", "40"] {
        let base = format!("24{offset}00999");
        let this_century = format!("{base}{}", check_digits(&base, true));
        let last_century = format!("{base}{}", check_digits(&base, false));
        assert!(bis::validate_at(&this_century, today()).is_ok(), "{this_century}");
        assert!(bis::validate_at(&last_century, today()).is_ok(), "{last_century}");
    }
}

#[test]
fn bis_gender() {
    assert_eq!(Bis::at(today()).gender("08422999977"), Ok(Some(Gender::Male)));
    assert_eq!(Bis::at(today()).gender("08222999934"), Ok(None));
}

// ---------------------------------------------------------------------------
// INSZ
// ---------------------------------------------------------------------------

#[test]
fn insz_literal_vectors() {
    assert_eq!(
        insz::validate_at("88022999990", today()).unwrap().compact,
        "88022999990"
    );
    assert_eq!(
        insz::validate_at("88222999936", today()).unwrap().compact,
        "88222999936"
    );
    assert_eq!(
        insz::validate_at("08222999935", today()),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(
        insz::validate_at("96331699989", today()),
        Err(ValidationError::InvalidFormat)
    );
    assert_eq!(
        insz::validate_at("1", today()),
        Err(ValidationError::InvalidLength)
    );
}

#[test]
fn insz_tie_break_prefers_checksum() {
    // NN format error, BIS checksum error
    assert_eq!(
        insz::validate_at("08222999935", today()),
        Err(ValidationError::InvalidChecksum)
    );
    // NN checksum error, BIS format error
    assert_eq!(
        insz::validate_at("20070199952", today()),
        Err(ValidationError::InvalidChecksum)
    );
    // both format errors
    assert_eq!(
        insz::validate_at("88150199951", today()),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn insz_format() {
    assert_eq!(insz::format("88 02 29-999.90"), "88.02.29-999.90");
}

// ---------------------------------------------------------------------------
// VAT
// ---------------------------------------------------------------------------

#[test]
fn vat_vectors() {
    assert_eq!(vat::format("403019261"), "0403.019.261");
    assert_eq!(vat::validate("BE403019261").unwrap().compact, "0403019261");
    assert_eq!(vat::validate("(0)403019261").unwrap().compact, "0403019261");
    assert_eq!(vat::validate("BE 428759497").unwrap().compact, "0428759497");
    assert_eq!(vat::validate("BE 0417497106").unwrap().compact, "0417497106");
    assert_eq!(vat::validate("12345678"), Err(ValidationError::InvalidLength));
    assert_eq!(
        vat::validate("BE431150351"),
        Err(ValidationError::InvalidChecksum)
    );
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_via_trait_objects() {
    let all = validators(ReferenceDate::Fixed(today()));
    let accepted: Vec<_> = all
        .iter()
        .filter(|v| v.is_valid("88222999936"))
        .map(|v| v.abbreviation())
        .collect();
    assert_eq!(accepted, vec!["BIS", "INSZ"]);
}

#[test]
fn result_serializes_to_json() {
    let v = Insz::at(today()).validate("88022999990").unwrap();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(
        json,
        r#"{"compact":"88022999990","is_individual":true,"is_company":false}"#
    );
}
