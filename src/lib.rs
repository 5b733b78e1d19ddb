//! # stdnum
//!
//! Validators for national identifiers: personal numbers, tax numbers and
//! VAT numbers. Every validator offers the same three operations:
//!
//! - `compact`: strip separators and fold look-alike Unicode characters
//! - `format`: render the usual display form (never fails)
//! - `validate`: check length, characters, embedded dates and check digits
//!
//! Validation is pure. Rules that depend on the current date (a birth date
//! may not lie in the future) take the date as a parameter; the `validate`
//! shorthands read the UTC date once and pass it down.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stdnum::be::{insz, nn};
//! use stdnum::ValidationError;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! let valid = nn::validate_at("85.07.30-033.28", today).unwrap();
//! assert_eq!(valid.compact, "85073003328");
//! assert!(valid.is_individual);
//!
//! assert_eq!(
//!     insz::validate_at("08222999935", today),
//!     Err(ValidationError::InvalidChecksum)
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Error taxonomy, `Validator` trait, cleaning and checksum helpers |
//! | `be` (default) | Belgian NN, BIS, INSZ and enterprise (VAT) numbers |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "be")]
pub mod be;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
