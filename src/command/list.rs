//! The `list` command: show every coupon in the stash.

use crate::{
    command::{Command, CommandError, CommandResult},
    model::Model,
    predicate::CouponPredicate,
};

/// Resets the view to show all coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCommand;

impl ListCommand {
    /// The keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "list";

    /// The message reported on success.
    pub const MESSAGE_SUCCESS: &'static str = "Listed all coupons";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_coupon_list(CouponPredicate::All);

        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
