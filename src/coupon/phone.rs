//! The `Phone` value type: the contact number for the issuing store.

use std::{fmt::Display, str::FromStr};

use crate::coupon::ValidationError;

/// A phone number: digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Create a phone number from raw text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidPhone] if the trimmed text contains a
    /// non-digit or is shorter than 3 digits.
    pub fn new(phone: &str) -> Result<Self, ValidationError> {
        let phone = phone.trim();

        if phone.len() >= 3 && phone.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(phone.to_string()))
        } else {
            Err(ValidationError::InvalidPhone)
        }
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phone::new(s)
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
