use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a number failed validation.
///
/// Every validator reports failures with one of these kinds. The checks run
/// in a fixed order (length, character class, structure, checksum), so the
/// kind tells the caller how far the number got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ValidationError {
    /// Characters that are not allowed, or a structure that is not recognised.
    #[error("the number has an invalid format")]
    InvalidFormat,

    /// The number has the wrong number of characters after cleaning.
    #[error("the number has an invalid length")]
    InvalidLength,

    /// The embedded checksum or check digits do not match.
    #[error("the number's checksum or check digit is invalid")]
    InvalidChecksum,

    /// A sub-field refers to something that does not exist
    /// (a date, a region code, a registry entry).
    #[error("one of the parts of the number is invalid or unknown")]
    InvalidComponent,
}

impl ValidationError {
    /// True for [`ValidationError::InvalidChecksum`].
    pub fn is_checksum(&self) -> bool {
        matches!(self, Self::InvalidChecksum)
    }
}
