//! The `delete` command: remove a coupon by its displayed index.

use crate::{
    command::{Command, CommandError, CommandResult},
    coupon::Coupon,
    model::Model,
    parser::{ParseError, parse_index},
};

/// Deletes the coupon at a one-based index into the currently displayed
/// list.
///
/// The index is re-resolved against the filtered view at execute time, never
/// against a cached snapshot, so the same index can denote different coupons
/// before and after a filter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: usize,
}

impl DeleteCommand {
    /// The keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "delete";

    /// The usage string shown on a parse failure.
    pub const MESSAGE_USAGE: &'static str =
        "delete: Deletes the coupon identified by the index number used in the displayed coupon list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    /// Create the command for a zero-based index.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Parse the argument text for a `delete` command.
    ///
    /// # Errors
    ///
    /// Returns a [ParseError] unless the arguments are a single positive
    /// integer.
    pub fn parse(args: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse_index(args, Self::MESSAGE_USAGE)?))
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target: Coupon = model
            .filtered_coupons()
            .get(self.index)
            .map(|&coupon| coupon.clone())
            .ok_or(CommandError::InvalidIndex)?;

        model.delete_coupon(&target)?;

        Ok(CommandResult::new(format!("Deleted Coupon: {target}")))
    }
}
