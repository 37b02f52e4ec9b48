//! The `find` command: narrow the view to coupons whose names match
//! keywords.

use crate::{
    command::{Command, CommandError, CommandResult},
    model::Model,
    parser::ParseError,
    predicate::CouponPredicate,
};

/// Installs a name-keyword filter and reports how many coupons remain
/// displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    predicate: CouponPredicate,
}

impl FindCommand {
    /// The keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "find";

    /// The usage string shown on a parse failure.
    pub const MESSAGE_USAGE: &'static str =
        "find: Finds all coupons whose names contain any of the specified keywords (case-insensitive) \
        and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find deck noodles rice";

    /// Create the command for an already-built predicate.
    pub fn new(predicate: CouponPredicate) -> Self {
        Self { predicate }
    }

    /// Parse the argument text for a `find` command.
    ///
    /// # Errors
    ///
    /// Returns a [ParseError] if no keyword was given.
    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let keywords: Vec<String> = args.split_whitespace().map(String::from).collect();

        if keywords.is_empty() {
            return Err(ParseError::invalid_format(Self::MESSAGE_USAGE));
        }

        Ok(Self::new(CouponPredicate::NameContainsKeywords(keywords)))
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_coupon_list(self.predicate.clone());

        Ok(CommandResult::new(format!(
            "{} coupons listed!",
            model.filtered_coupons().len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::{Command, FindCommand},
        model::Model,
        predicate::CouponPredicate,
        test_util::{amy, bob},
    };

    #[test]
    fn parses_whitespace_separated_keywords() {
        let command = FindCommand::parse("  Amy   Bob  ").unwrap();

        let want = FindCommand::new(CouponPredicate::NameContainsKeywords(vec![
            "Amy".to_string(),
            "Bob".to_string(),
        ]));
        assert_eq!(command, want);
    }

    #[test]
    fn blank_keywords_fail() {
        assert!(FindCommand::parse("   ").is_err());
    }

    #[test]
    fn narrows_the_view_and_reports_the_count() {
        let mut model = Model::from_coupons(vec![amy(), bob()]);

        let result = FindCommand::parse("Amy").unwrap().execute(&mut model).unwrap();

        assert_eq!(result.message(), "1 coupons listed!");
        assert_eq!(model.filtered_coupons(), vec![&amy()]);
        // Backing collection is untouched.
        assert_eq!(model.coupon_stash().len(), 2);
    }
}
