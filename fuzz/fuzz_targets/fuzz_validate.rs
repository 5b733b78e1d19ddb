#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use stdnum::be::{bis, insz, nn, vat};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine.
        let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
            return;
        };
        let _ = nn::validate_at(s, today);
        let _ = bis::validate_at(s, today);
        let _ = insz::validate_at(s, today);
        let _ = vat::validate(s);
    }
});
