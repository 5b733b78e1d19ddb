//! Birth-date and check-digit logic shared by the NN and BIS numbers.
//!
//! A person number is `YYMMDD SSS CC`: an encoded birth date, a serial and
//! two check digits. The two-digit year does not say which century the
//! holder was born in, and the check digits are computed over a different
//! base for each century (people born from 2000 on get a `2` prepended to
//! the nine leading digits). Validation therefore enumerates every reading
//! of the date that is plausible, keeps the ones that name a real day not
//! in the future, and accepts the number if any survivor's base matches the
//! check digits. Readings without a full date (month `00` or a reserved
//! prefix) always pass the structure check; the "not in the future" rule
//! only limits which of their centuries are tried as checksum bases.
//!
//! BIS numbers store the month plus 20 or plus 40, which only widens the
//! enumeration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::checksum::mod97_matches;
use crate::core::clean::{is_digits, split_at_many};
use crate::core::{ValidateResult, Validated, ValidationError, is_valid_date};

/// Digits in a compact person number.
pub(crate) const LENGTH: usize = 11;

/// Date prefixes the registry issues when the birth date (year included)
/// was not known.
const UNRECORDED_PREFIXES: [&str; 3] = ["000001", "002001", "004001"];

/// Prepended to the nine base digits for holders born in 2000 or later.
const MILLENNIUM_PREFIX: u64 = 2_000_000_000;

/// How the month digits of a person number are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonthEncoding {
    /// National register number: the month as is.
    Plain,
    /// BIS number: the month plus 20 (sex unknown when issued) or plus 40
    /// (sex known).
    Offset,
}

impl MonthEncoding {
    fn offsets(self) -> &'static [u32] {
        match self {
            Self::Plain => &[0],
            Self::Offset => &[20, 40],
        }
    }

    /// `(offset, month)` pairs the stored month may stand for.
    ///
    /// Offset months must land in `0..=12`. Plain months are passed through
    /// untouched and left to the calendar check.
    fn month_candidates(self, stored: u32) -> impl Iterator<Item = (u32, u32)> {
        self.offsets().iter().filter_map(move |&offset| {
            let month = stored.checked_sub(offset)?;
            (self == Self::Plain || month <= 12).then_some((offset, month))
        })
    }
}

/// What the date digits of one hypothesis say about the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DobKind {
    /// A full calendar date.
    Standard,
    /// Month `00`: only the year is known.
    UnknownMonth,
    /// One of the reserved "no birth date" prefixes.
    Unrecorded,
}

/// One reading of the date digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hypothesis {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Month offset the reading assumed (0 for NN numbers).
    pub offset: u32,
    pub kind: DobKind,
}

impl Hypothesis {
    /// Whether this reading names a day that exists and is not after
    /// `latest`. Readings without a month are dated 1 January.
    fn is_in_past(&self, latest: NaiveDate) -> bool {
        let earliest = match self.kind {
            DobKind::Standard => NaiveDate::from_ymd_opt(self.year, self.month, self.day),
            DobKind::UnknownMonth | DobKind::Unrecorded => {
                NaiveDate::from_ymd_opt(self.year, 1, 1)
            }
        };
        earliest.is_some_and(|date| date <= latest)
    }

    /// Numeric base the check digits are computed over.
    fn checksum_base(&self, base_digits: u64) -> u64 {
        if self.year >= 2000 {
            MILLENNIUM_PREFIX + base_digits
        } else {
            base_digits
        }
    }

    fn birth_date(&self) -> BirthDate {
        match self.kind {
            DobKind::Standard => NaiveDate::from_ymd_opt(self.year, self.month, self.day)
                .map_or(BirthDate::YearOnly(self.year), BirthDate::Known),
            DobKind::UnknownMonth => BirthDate::YearOnly(self.year),
            DobKind::Unrecorded => BirthDate::Unknown,
        }
    }
}

/// Birth date encoded in a valid person number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirthDate {
    /// The full date is known.
    Known(NaiveDate),
    /// Only the year is known (month stored as `00`).
    YearOnly(i32),
    /// The registry had no birth date when the number was issued.
    Unknown,
}

/// Sex recorded in a person number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// One day of slack so a birth "today" in any time zone is accepted.
fn latest_birth_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Every structurally plausible reading of the first six digits.
///
/// Full dates must exist and not lie in the future. Readings without a
/// full date are kept for both centuries; [`resolve`] drops the future ones
/// before comparing check digits.
///
/// `number` must be all digits and at least six long; otherwise the result
/// is empty.
pub(crate) fn hypotheses(
    number: &str,
    encoding: MonthEncoding,
    today: NaiveDate,
) -> Vec<Hypothesis> {
    let Some(prefix) = number.get(..6) else {
        return Vec::new();
    };
    let parts = split_at_many(prefix, &[2, 4]);
    let (Ok(yy), Ok(stored_month), Ok(day)) = (
        parts[0].parse::<i32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    ) else {
        return Vec::new();
    };
    let latest = latest_birth_date(today);

    let mut found = Vec::new();
    for (offset, month) in encoding.month_candidates(stored_month) {
        let dob = format!("{yy:02}{month:02}{day:02}");
        let kind = if UNRECORDED_PREFIXES.contains(&dob.as_str()) {
            DobKind::Unrecorded
        } else if month == 0 {
            DobKind::UnknownMonth
        } else {
            DobKind::Standard
        };
        for century in [1900, 2000] {
            let year = century + yy;
            if kind == DobKind::Standard && !is_valid_date(year, month, day) {
                continue;
            }
            let hypothesis = Hypothesis {
                year,
                month,
                day,
                offset,
                kind,
            };
            if kind != DobKind::Standard || hypothesis.is_in_past(latest) {
                found.push(hypothesis);
            }
        }
    }
    trace!(?encoding, count = found.len(), "enumerated birth date hypotheses");
    found
}

/// Run the full check and return the first hypothesis whose base matches
/// the check digits.
///
/// Checks run in a fixed order: length, digits, date structure, check
/// digits.
pub(crate) fn resolve(
    number: &str,
    encoding: MonthEncoding,
    today: NaiveDate,
) -> Result<Hypothesis, ValidationError> {
    if number.chars().count() != LENGTH {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(number) || number.bytes().all(|b| b == b'0') {
        return Err(ValidationError::InvalidFormat);
    }

    let candidates = hypotheses(number, encoding, today);
    if candidates.is_empty() {
        debug!(?encoding, "no admissible birth date");
        return Err(ValidationError::InvalidFormat);
    }

    let latest = latest_birth_date(today);
    let (base, check) = number.split_at(9);
    let base: u64 = base.parse().map_err(|_| ValidationError::InvalidFormat)?;
    let check: u64 = check.parse().map_err(|_| ValidationError::InvalidFormat)?;

    candidates
        .into_iter()
        .filter(|h| h.is_in_past(latest))
        .find(|h| mod97_matches(h.checksum_base(base), check))
        .ok_or_else(|| {
            debug!(?encoding, "check digits match no birth date hypothesis");
            ValidationError::InvalidChecksum
        })
}

/// Validate an already compacted person number.
pub(crate) fn validate(number: &str, encoding: MonthEncoding, today: NaiveDate) -> ValidateResult {
    resolve(number, encoding, today).map(|_| Validated::individual(number))
}

/// Birth date of a valid person number.
pub(crate) fn birth_date(
    number: &str,
    encoding: MonthEncoding,
    today: NaiveDate,
) -> Result<BirthDate, ValidationError> {
    resolve(number, encoding, today).map(|h| h.birth_date())
}

/// Sex of the holder of a valid person number, if recorded.
///
/// The serial is odd for men and even for women. BIS numbers issued while
/// the sex was unknown carry the +20 month offset and report `None`.
pub(crate) fn gender(
    number: &str,
    encoding: MonthEncoding,
    today: NaiveDate,
) -> Result<Option<Gender>, ValidationError> {
    let hypothesis = resolve(number, encoding, today)?;
    if encoding == MonthEncoding::Offset && hypothesis.offset == 20 {
        return Ok(None);
    }
    let serial: u32 = number[6..9]
        .parse()
        .map_err(|_| ValidationError::InvalidFormat)?;
    Ok(Some(if serial % 2 == 1 {
        Gender::Male
    } else {
        Gender::Female
    }))
}

/// `YY.MM.DD-SSS.CC` for an 11-digit value, anything else unchanged.
pub(crate) fn format_compact(compact: String) -> String {
    if compact.len() != LENGTH || !is_digits(&compact) {
        return compact;
    }
    let p = split_at_many(&compact, &[2, 4, 6, 9]);
    format!("{}.{}.{}-{}.{}", p[0], p[1], p[2], p[3], p[4])
}
