//! The `Tag` value type: a single-word label for grouping coupons.

use std::{fmt::Display, str::FromStr};

use crate::coupon::ValidationError;

/// A tag name: one alphanumeric word, e.g., 'lunch' or 'buy1get1'.
///
/// Displays bracketed as `[name]`; `Ord` sorts tags by name so tag sets
/// render in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Create a tag from raw text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidTag] if the trimmed text is empty or
    /// is not a single alphanumeric word.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();

        if !name.is_empty() && name.chars().all(char::is_alphanumeric) {
            Ok(Self(name.to_string()))
        } else {
            Err(ValidationError::InvalidTag)
        }
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::new(s)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::coupon::{Tag, ValidationError};

    #[test]
    fn accepts_single_alphanumeric_words() {
        let got = Tag::new("buy1get1").map(|tag| tag.to_string());

        assert_eq!(got, Ok("[buy1get1]".to_string()));
    }

    #[test]
    fn rejects_special_characters() {
        assert_eq!(Tag::new("hubby*"), Err(ValidationError::InvalidTag));
    }

    #[test]
    fn rejects_words_with_spaces() {
        assert_eq!(Tag::new("eating out"), Err(ValidationError::InvalidTag));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(Tag::new("  "), Err(ValidationError::InvalidTag));
    }
}
