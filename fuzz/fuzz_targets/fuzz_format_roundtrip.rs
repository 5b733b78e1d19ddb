#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use stdnum::be::{insz, vat};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
            return;
        };
        // A valid number must stay valid, with the same compact form, after formatting.
        if let Ok(valid) = insz::validate_at(s, today) {
            let again = insz::validate_at(&insz::format(s), today);
            assert_eq!(again.map(|v| v.compact), Ok(valid.compact));
        }
        if let Ok(valid) = vat::validate(s) {
            let again = vat::validate(&vat::format(s));
            assert_eq!(again.map(|v| v.compact), Ok(valid.compact));
        }
    }
});
