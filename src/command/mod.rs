//! The command pipeline: one type per user-issued instruction.
//!
//! Each command is parsed from raw argument text by its own `parse`
//! constructor (keeping the command/parser pair in one file) and executed
//! against the [Model]. Execution either fully succeeds with a
//! [CommandResult] or fails with a [CommandError], leaving the model
//! untouched.

use crate::model::{Model, ModelError};

mod add;
mod delete;
mod edit;
mod expiring;
mod find;
mod list;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditCouponDescriptor};
pub use expiring::ExpiringCommand;
pub use find::FindCommand;
pub use list::ListCommand;

/// A semantic failure only discoverable against live model state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The given index is past the end of the currently displayed list.
    #[error("The coupon index provided is invalid")]
    InvalidIndex,

    /// A model mutation was rejected (duplicate or missing coupon).
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// The sole observable output of a successful execution: a message for the
/// presentation layer to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    message: String,
}

impl CommandResult {
    /// Wrap a display message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message to show the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A validated unit of work over the model.
pub trait Command {
    /// Apply this command to `model`.
    ///
    /// # Errors
    ///
    /// Returns a [CommandError] for semantic failures (bad index, duplicate,
    /// not found); the model is guaranteed unchanged on failure.
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}
