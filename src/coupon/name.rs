//! The `Name` value type: a coupon's display name.

use std::{fmt::Display, str::FromStr};

use crate::coupon::ValidationError;

/// A coupon's name, e.g., 'The Deck Chicken Rice'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Create a name from raw text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidName] if the trimmed text is empty or
    /// contains a character that is not alphanumeric or a space.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let mut chars = name.chars();

        match chars.next() {
            Some(first)
                if first.is_alphanumeric()
                    && chars.all(|c| c.is_alphanumeric() || c == ' ') =>
            {
                Ok(Self(name.to_string()))
            }
            _ => Err(ValidationError::InvalidName),
        }
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::coupon::{Name, ValidationError};

    #[test]
    fn accepts_alphanumeric_names_with_spaces() {
        let got = Name::new("Amy Bee 2nd").map(|name| name.to_string());

        assert_eq!(got, Ok("Amy Bee 2nd".to_string()));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let got = Name::new("  Amy Bee  ").map(|name| name.to_string());

        assert_eq!(got, Ok("Amy Bee".to_string()));
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Name::new("   "), Err(ValidationError::InvalidName));
    }

    #[test]
    fn rejects_special_characters() {
        assert_eq!(Name::new("James&"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn rejects_names_starting_with_a_symbol() {
        assert_eq!(Name::new("-Amy"), Err(ValidationError::InvalidName));
    }
}
