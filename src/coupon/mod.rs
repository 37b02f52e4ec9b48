//! The coupon aggregate and its value types.
//!
//! A [Coupon] is immutable once constructed: edits build a new instance. It
//! carries two notions of sameness, the strong field-by-field equality of
//! `PartialEq` and the looser duplicate-detection heuristic
//! [Coupon::is_same_coupon].

use std::{collections::BTreeSet, fmt::Display};

mod expiry_date;
mod name;
mod phone;
mod savings;
mod tag;

pub use expiry_date::ExpiryDate;
pub use name::Name;
pub use phone::Phone;
pub use savings::{MonetaryAmount, PercentageAmount, Saveable, Savings};
pub use tag::Tag;

/// The errors raised when raw text fails a value type's format rule.
///
/// Each variant's message doubles as the format hint shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name was blank or contained a character that is not alphanumeric
    /// or a space.
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    InvalidName,

    /// The phone number contained a non-digit or was too short.
    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    InvalidPhone,

    /// The expiry date was not a real calendar date in the D-M-YYYY format.
    #[error("Expiry dates should be valid dates in the D-M-YYYY format")]
    InvalidExpiryDate,

    /// The tag name was blank or was not a single alphanumeric word.
    #[error("Tag names should be alphanumeric")]
    InvalidTag,

    /// The monetary amount was negative or not a number.
    #[error("Monetary amounts should be non-negative numbers")]
    InvalidMonetaryAmount,

    /// The percentage amount was outside [0, 100] or not a number.
    #[error("Percentage amounts should be numbers between 0 and 100")]
    InvalidPercentageAmount,

    /// The saveable text was blank.
    #[error("Saveables should not be blank")]
    InvalidSaveable,

    /// A savings value was constructed with no components at all.
    #[error("Savings should have at least a monetary amount, a percentage amount or one saveable")]
    BlankSavings,
}

/// A coupon tracked by the stash.
///
/// `PartialEq` compares all five fields (strong equality); the tag set is
/// order-insensitive by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    name: Name,
    phone: Phone,
    savings: Savings,
    expiry_date: ExpiryDate,
    tags: BTreeSet<Tag>,
}

impl Coupon {
    /// Create a coupon from already-validated parts.
    pub fn new(
        name: Name,
        phone: Phone,
        savings: Savings,
        expiry_date: ExpiryDate,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            savings,
            expiry_date,
            tags,
        }
    }

    /// The coupon's display name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The issuing store's phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// What the coupon saves.
    pub fn savings(&self) -> &Savings {
        &self.savings
    }

    /// The date the coupon stops being usable.
    pub fn expiry_date(&self) -> &ExpiryDate {
        &self.expiry_date
    }

    /// The coupon's tags, sorted by name.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Whether `other` is likely the same real-world coupon as this one.
    ///
    /// True iff the names are equal and at least one of the phone, savings or
    /// expiry date also matches. This is a deliberately loose heuristic used
    /// to reject probable duplicates, not a primary key: two genuinely
    /// distinct coupons sharing a name and one other field will be flagged.
    pub fn is_same_coupon(&self, other: &Coupon) -> bool {
        self.name == other.name
            && (self.phone == other.phone
                || self.savings == other.savings
                || self.expiry_date == other.expiry_date)
    }
}

impl Display for Coupon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Phone: {} Savings: {} Expiry Date: {} Tags: ",
            self.name, self.phone, self.savings, self.expiry_date
        )?;

        for tag in &self.tags {
            write!(f, "{tag}")?;
        }

        Ok(())
    }
}
