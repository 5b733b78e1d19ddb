//! Belgian identifiers.
//!
//! - [`nn`]: national register number (citizens and residents)
//! - [`bis`]: BIS number (people without a national register number)
//! - [`insz`]: social security number, either of the two above
//! - [`vat`]: enterprise / VAT number
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stdnum::Validator;
//! use stdnum::be::{Insz, nn};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! assert!(nn::validate_at("88.02.29-999.90", today).is_ok());
//! assert_eq!(nn::format("88022999990"), "88.02.29-999.90");
//!
//! // BIS number, month stored as 02 + 20
//! let result = Insz::at(today).validate("88222999936").unwrap();
//! assert!(result.is_individual);
//! ```

pub mod bis;
pub mod insz;
pub mod nn;
mod person;
pub mod vat;

pub use bis::Bis;
pub use insz::Insz;
pub use nn::Nn;
pub use person::{BirthDate, Gender};
pub use vat::Vat;

use crate::core::{ReferenceDate, Validator};

/// All Belgian validators. Person numbers check birth dates against
/// `reference`.
pub fn validators(reference: ReferenceDate) -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(Nn::with_reference(reference)),
        Box::new(Bis::with_reference(reference)),
        Box::new(Insz::with_reference(reference)),
        Box::new(Vat),
    ]
}
