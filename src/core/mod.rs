//! Shared validation infrastructure.
//!
//! The error taxonomy, the result type and [`Validator`] trait every
//! identifier implements, plus the cleaning, modulus-97 and calendar helpers
//! the country modules build on.

pub mod checksum;
pub mod clean;
mod date;
mod error;
mod types;

pub use date::*;
pub use error::*;
pub use types::*;
