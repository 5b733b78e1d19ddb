use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// A number that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validated {
    /// The number in its minimal representation (separators removed).
    pub compact: String,
    /// The number identifies a natural person.
    ///
    /// A number may identify neither a person nor a company with certainty.
    pub is_individual: bool,
    /// The number identifies a legal entity.
    pub is_company: bool,
}

impl Validated {
    /// Result for a number that identifies a natural person.
    pub fn individual(compact: impl Into<String>) -> Self {
        Self {
            compact: compact.into(),
            is_individual: true,
            is_company: false,
        }
    }

    /// Result for a number that identifies a legal entity.
    pub fn company(compact: impl Into<String>) -> Self {
        Self {
            compact: compact.into(),
            is_individual: false,
            is_company: true,
        }
    }
}

/// Outcome of [`Validator::validate`].
pub type ValidateResult = Result<Validated, ValidationError>;

/// Common surface of every identifier validator.
///
/// Implementations are cheap values; holding them as `&dyn Validator` or
/// `Box<dyn Validator>` in a catalog is supported.
pub trait Validator: Send + Sync {
    /// English name of the identifier.
    fn name(&self) -> &'static str;

    /// Name of the identifier in the issuing country's language.
    fn local_name(&self) -> &'static str;

    /// Short form or acronym.
    fn abbreviation(&self) -> &'static str;

    /// Strip separators and fold look-alike characters to ASCII.
    fn compact(&self, input: &str) -> String;

    /// Render the number in its usual display form.
    ///
    /// Never fails: input that is not a valid number is returned in its
    /// compact form.
    fn format(&self, input: &str) -> String;

    /// Check the number and return its compact form with entity flags.
    fn validate(&self, input: &str) -> ValidateResult;

    /// Shorthand for `validate(input).is_ok()`.
    fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_flags() {
        let v = Validated::individual("88022999990");
        assert!(v.is_individual);
        assert!(!v.is_company);
        assert_eq!(v.compact, "88022999990");
    }

    #[test]
    fn company_flags() {
        let v = Validated::company("0403019261");
        assert!(!v.is_individual);
        assert!(v.is_company);
    }

    #[test]
    fn serialized_shape() {
        let json = serde_json::to_value(Validated::individual("88022999990")).unwrap();
        assert_eq!(json["compact"], "88022999990");
        assert_eq!(json["is_individual"], true);
        assert_eq!(json["is_company"], false);
    }
}
