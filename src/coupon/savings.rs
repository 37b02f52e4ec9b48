//! The `Savings` value type: what a coupon saves.
//!
//! A coupon's value is inherently heterogeneous: a flat dollar amount, a
//! percentage off, free items, or a mix. [Savings] holds each component
//! explicitly and enforces that at least one is present.

use std::{fmt::Display, str::FromStr};

use crate::coupon::ValidationError;

/// A non-negative currency amount saved, e.g., `$2.50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonetaryAmount(f64);

impl MonetaryAmount {
    /// Create a monetary amount.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidMonetaryAmount] if `value` is
    /// negative or not finite.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidMonetaryAmount)
        }
    }

    /// The amount as a plain number.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// A percentage saved, in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageAmount(f64);

impl PercentageAmount {
    /// Create a percentage amount.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidPercentageAmount] if `value` is
    /// outside [0, 100] or not finite.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidPercentageAmount)
        }
    }

    /// The percentage as a plain number.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for PercentageAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A non-quantifiable benefit, e.g., 'Free Coffee'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saveable(String);

impl Saveable {
    /// Create a saveable from raw text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidSaveable] if the trimmed text is
    /// empty.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();

        if text.is_empty() {
            Err(ValidationError::InvalidSaveable)
        } else {
            Ok(Self(text.to_string()))
        }
    }
}

impl AsRef<str> for Saveable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Saveable {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Saveable::new(s)
    }
}

impl Display for Saveable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a coupon saves: an optional monetary amount, an optional percentage
/// amount and an ordered list of saveables, with at least one present.
///
/// Equality compares all three components, treating an absent numeric
/// component as zero rather than as a distinct 'missing' state.
#[derive(Debug, Clone)]
pub struct Savings {
    monetary: Option<MonetaryAmount>,
    percentage: Option<PercentageAmount>,
    saveables: Vec<Saveable>,
}

impl Savings {
    /// Create a savings value from its components.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::BlankSavings] if both amounts are absent and
    /// the saveable list is empty.
    pub fn new(
        monetary: Option<MonetaryAmount>,
        percentage: Option<PercentageAmount>,
        saveables: Vec<Saveable>,
    ) -> Result<Self, ValidationError> {
        if monetary.is_none() && percentage.is_none() && saveables.is_empty() {
            Err(ValidationError::BlankSavings)
        } else {
            Ok(Self {
                monetary,
                percentage,
                saveables,
            })
        }
    }

    /// The monetary component, if present.
    pub fn monetary(&self) -> Option<MonetaryAmount> {
        self.monetary
    }

    /// The percentage component, if present.
    pub fn percentage(&self) -> Option<PercentageAmount> {
        self.percentage
    }

    /// The monetary amount saved, zero when absent.
    pub fn monetary_amount(&self) -> f64 {
        self.monetary.map_or(0.0, |amount| amount.value())
    }

    /// The percentage saved, zero when absent.
    pub fn percentage_amount(&self) -> f64 {
        self.percentage.map_or(0.0, |amount| amount.value())
    }

    /// The saveables, in the order they were given.
    pub fn saveables(&self) -> &[Saveable] {
        &self.saveables
    }
}

impl PartialEq for Savings {
    fn eq(&self, other: &Self) -> bool {
        self.monetary_amount() == other.monetary_amount()
            && self.percentage_amount() == other.percentage_amount()
            && self.saveables == other.saveables
    }
}

impl Display for Savings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if let Some(monetary) = self.monetary {
            parts.push(monetary.to_string());
        }

        if let Some(percentage) = self.percentage {
            parts.push(percentage.to_string());
        }

        parts.extend(self.saveables.iter().map(Saveable::to_string));

        write!(f, "{}", parts.join(", "))
    }
}
