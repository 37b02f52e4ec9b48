//! The `expiring` command: show coupons expiring before a cutoff date.

use crate::{
    command::{Command, CommandError, CommandResult},
    coupon::ExpiryDate,
    model::Model,
    parser::ParseError,
    predicate::CouponPredicate,
};

/// Installs a strict expires-before filter and reports how many coupons
/// remain displayed.
///
/// A coupon expiring exactly on the cutoff has no remaining time and is not
/// listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiringCommand {
    cutoff: ExpiryDate,
}

impl ExpiringCommand {
    /// The keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "expiring";

    /// The usage string shown on a parse failure.
    pub const MESSAGE_USAGE: &'static str =
        "expiring: Finds all coupons expiring before the specified date \
        and displays them as a list with index numbers.\n\
        Parameters: DATE (in the D-M-YYYY format)\n\
        Example: expiring 31-12-2020";

    /// Create the command for an already-parsed cutoff date.
    pub fn new(cutoff: ExpiryDate) -> Self {
        Self { cutoff }
    }

    /// Parse the argument text for an `expiring` command.
    ///
    /// The cutoff is validated here so the predicate never sees raw text.
    ///
    /// # Errors
    ///
    /// Returns a [ParseError] if the trimmed argument is empty or is not a
    /// valid D-M-YYYY date.
    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let trimmed = args.trim();

        if trimmed.is_empty() {
            return Err(ParseError::invalid_format(Self::MESSAGE_USAGE));
        }

        Ok(Self::new(ExpiryDate::new(trimmed)?))
    }
}

impl Command for ExpiringCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_coupon_list(CouponPredicate::ExpiresBefore(self.cutoff));

        Ok(CommandResult::new(format!(
            "{} coupons expiring before {} listed!",
            model.filtered_coupons().len(),
            self.cutoff
        )))
    }
}
