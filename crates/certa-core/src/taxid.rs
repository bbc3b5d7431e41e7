//! # Tax Identifier Newtype
//!
//! `TaxId` wraps the 10-digit tax identification number that keys every
//! client record and every storage blob. The constructor validates; an
//! instance in hand is proof the identifier is well-formed.
//!
//! ## Invariant
//!
//! Exactly 10 ASCII digits. Enforced at construction and therefore at every
//! search, create, and delete — a malformed identifier can never reach the
//! storage layer, where it would silently address a key nothing else reads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a well-formed tax identifier.
pub const TAX_ID_DIGITS: usize = 10;

/// Error constructing a [`TaxId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxIdError {
    /// Input length differs from the required 10 digits.
    #[error("tax id must have exactly {TAX_ID_DIGITS} digits, got {got}")]
    WrongLength {
        /// Number of characters in the rejected input.
        got: usize,
    },

    /// Input contains a character outside `0-9`.
    #[error("tax id must contain only digits, found {found:?}")]
    NonDigit {
        /// The first offending character.
        found: char,
    },
}

/// A validated 10-digit tax identification number.
///
/// Client records, progress blobs, and legacy storage keys are all
/// namespaced by this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(String);

impl TaxId {
    /// Validate and construct a tax identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaxIdError`] unless the input is exactly 10 ASCII digits.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let trimmed = input.trim();
        if let Some(found) = trimmed.chars().find(|c| !c.is_ascii_digit()) {
            return Err(TaxIdError::NonDigit { found });
        }
        if trimmed.len() != TAX_ID_DIGITS {
            return Err(TaxIdError::WrongLength { got: trimmed.len() });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Whether the input would parse as a valid tax identifier.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ten_digits_accepted() {
        let id = TaxId::parse("1234567890").unwrap();
        assert_eq!(id.as_str(), "1234567890");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let id = TaxId::parse("  1234567890 ").unwrap();
        assert_eq!(id.as_str(), "1234567890");
    }

    #[test]
    fn test_short_input_rejected() {
        match TaxId::parse("12345") {
            Err(TaxIdError::WrongLength { got }) => assert_eq!(got, 5),
            other => panic!("expected WrongLength, got: {other:?}"),
        }
    }

    #[test]
    fn test_long_input_rejected() {
        assert!(TaxId::parse("12345678901").is_err());
    }

    #[test]
    fn test_non_digit_rejected() {
        match TaxId::parse("12345abc90") {
            Err(TaxIdError::NonDigit { found }) => assert_eq!(found, 'a'),
            other => panic!("expected NonDigit, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert!(TaxId::parse("").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(TaxId::is_valid("0000000000"));
        assert!(!TaxId::is_valid("000000000"));
        assert!(!TaxId::is_valid("00000000x0"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = TaxId::parse("9876543210").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"9876543210\"");
        let parsed: TaxId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        let id = TaxId::parse("1234567890").unwrap();
        assert_eq!(id.to_string(), "1234567890");
    }

    proptest! {
        #[test]
        fn prop_digit_strings_accepted_iff_ten_long(s in "[0-9]{1,20}") {
            prop_assert_eq!(TaxId::parse(&s).is_ok(), s.len() == 10);
        }

        #[test]
        fn prop_parse_never_panics(s in any::<String>()) {
            let _ = TaxId::parse(&s);
        }
    }
}
