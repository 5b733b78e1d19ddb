//! Modulus-97 arithmetic.

/// Remainder of a decimal digit string modulo 97.
///
/// Streams over the digits, so inputs longer than `u64` can hold are fine.
/// Returns `None` for an empty string or any non-digit byte.
pub fn mod97(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.bytes().try_fold(0u64, |acc, b| {
        let d = char::from(b).to_digit(10)?;
        Some((acc * 10 + u64::from(d)) % 97)
    })
}

/// The two check digits that complete `base` under the `97 - (base mod 97)`
/// rule. Always in `1..=97`; a base divisible by 97 needs `97`.
pub fn mod97_check_digits(base: u64) -> u64 {
    97 - base % 97
}

/// True when `check` equals the check digits for `base`.
///
/// `check == 0` never matches: the rule yields values in `1..=97`.
pub fn mod97_matches(base: u64, check: u64) -> bool {
    mod97_check_digits(base) == check
}
