//! Calendar helpers and the reference date used for "not in the future" rules.

use chrono::{NaiveDate, Utc};

/// True when `(year, month, day)` names a real calendar day.
///
/// No rollover: 30 February is rejected, not turned into 2 March.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// The day validators treat as "today".
///
/// Birth dates after this day (plus one day of slack for time zones) are
/// rejected. Validation logic only ever sees the resolved [`NaiveDate`], so
/// pinning a date makes every result reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceDate {
    /// The current UTC date, read once per call.
    #[default]
    Today,
    /// A fixed day.
    Fixed(NaiveDate),
}

impl ReferenceDate {
    /// Resolve to a concrete day.
    pub fn resolve(self) -> NaiveDate {
        match self {
            Self::Today => Utc::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}

impl From<NaiveDate> for ReferenceDate {
    fn from(date: NaiveDate) -> Self {
        Self::Fixed(date)
    }
}
