//! The `ExpiryDate` value type: the day a coupon stops being usable.

use std::{fmt::Display, str::FromStr};

use time::{Date, Month};

use crate::coupon::ValidationError;

/// A calendar date in the D-M-YYYY format, e.g., '30-12-2020' or '2-6-2021'.
///
/// Ordering is calendar order (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate(Date);

impl ExpiryDate {
    /// Parse an expiry date from raw text, trimming surrounding whitespace.
    ///
    /// The day and month may be one or two digits; the year must be exactly
    /// four.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidExpiryDate] if the text does not
    /// match the D-M-YYYY format or does not name a real calendar date.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let mut parts = text.trim().split('-');

        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ValidationError::InvalidExpiryDate);
        };

        if day.is_empty() || day.len() > 2 || month.is_empty() || month.len() > 2 || year.len() != 4
        {
            return Err(ValidationError::InvalidExpiryDate);
        }

        let day: u8 = day.parse().map_err(|_| ValidationError::InvalidExpiryDate)?;
        let month: u8 = month
            .parse()
            .map_err(|_| ValidationError::InvalidExpiryDate)?;
        let year: i32 = year
            .parse()
            .map_err(|_| ValidationError::InvalidExpiryDate)?;

        let month = Month::try_from(month).map_err(|_| ValidationError::InvalidExpiryDate)?;
        let date = Date::from_calendar_date(year, month, day)
            .map_err(|_| ValidationError::InvalidExpiryDate)?;

        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> Date {
        self.0
    }
}

impl FromStr for ExpiryDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpiryDate::new(s)
    }
}

impl Display for ExpiryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.0.day(),
            self.0.month() as u8,
            self.0.year()
        )
    }
}
