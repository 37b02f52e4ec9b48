//! The `add` command: record a new coupon in the stash.

use crate::{
    command::{Command, CommandError, CommandResult},
    coupon::{Coupon, Name, Phone},
    model::Model,
    parser::{
        ArgumentMultimap, PREFIX_EXPIRY_DATE, PREFIX_NAME, PREFIX_PHONE, PREFIX_SAVINGS,
        PREFIX_TAG, ParseError, parse_savings, parse_tags,
    },
};

/// Adds a coupon built from prefixed argument text.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    coupon: Coupon,
}

impl AddCommand {
    /// The keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "add";

    /// The usage string shown on a parse failure.
    pub const MESSAGE_USAGE: &'static str = "add: Adds a coupon to the CouponStash.\n\
        Parameters: n/NAME p/PHONE s/SAVINGS... e/EXPIRY_DATE [t/TAG]...\n\
        Example: add n/The Deck p/93210283 s/$2.50 e/30-12-2020 t/lunch";

    /// Create the command for an already-built coupon.
    pub fn new(coupon: Coupon) -> Self {
        Self { coupon }
    }

    /// Parse the argument text for an `add` command.
    ///
    /// # Errors
    ///
    /// Returns a [ParseError] on a non-empty preamble, a missing or repeated
    /// single-valued prefix, or any value failing its format rule.
    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let map = ArgumentMultimap::tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_SAVINGS,
                PREFIX_EXPIRY_DATE,
                PREFIX_TAG,
            ],
        );

        if !map.preamble().is_empty() {
            return Err(ParseError::invalid_format(Self::MESSAGE_USAGE));
        }

        let name = map.exactly_one(PREFIX_NAME, Self::MESSAGE_USAGE)?;
        let phone = map.exactly_one(PREFIX_PHONE, Self::MESSAGE_USAGE)?;
        let expiry_date = map.exactly_one(PREFIX_EXPIRY_DATE, Self::MESSAGE_USAGE)?;

        let coupon = Coupon::new(
            Name::new(name)?,
            Phone::new(phone)?,
            parse_savings(&map.all_values(PREFIX_SAVINGS), Self::MESSAGE_USAGE)?,
            expiry_date.parse()?,
            parse_tags(&map.all_values(PREFIX_TAG))?,
        );

        Ok(Self::new(coupon))
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.add_coupon(self.coupon.clone())?;

        Ok(CommandResult::new(format!(
            "New coupon added: {}",
            self.coupon
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::{AddCommand, Command, CommandError},
        model::{Model, ModelError},
        test_util::{AMY_ARGS, CouponBuilder, amy},
    };

    #[test]
    fn parses_all_fields_from_prefixed_text() {
        let command = AddCommand::parse(AMY_ARGS).unwrap();

        assert_eq!(command, AddCommand::new(amy()));
    }

    #[test]
    fn missing_required_prefix_fails() {
        let got = AddCommand::parse("n/Amy Bee p/11111111 s/Cake");

        assert!(got.is_err());
    }

    #[test]
    fn repeated_name_prefix_fails() {
        let got = AddCommand::parse("n/Amy n/Bee p/11111111 s/Cake e/30-12-2020");

        assert!(got.is_err());
    }

    #[test]
    fn non_empty_preamble_fails() {
        let got = AddCommand::parse("oops n/Amy Bee p/11111111 s/Cake e/30-12-2020");

        assert!(got.is_err());
    }

    #[test]
    fn invalid_value_text_fails_with_the_format_hint() {
        let got = AddCommand::parse("n/Amy Bee p/911a s/Cake e/30-12-2020");

        assert!(got.is_err());
    }

    #[test]
    fn execute_appends_the_coupon() {
        let mut model = Model::new();
        let command = AddCommand::new(amy());

        let result = command.execute(&mut model).unwrap();

        assert_eq!(model.coupon_stash(), &[amy()]);
        assert_eq!(result.message(), format!("New coupon added: {}", amy()));
    }

    #[test]
    fn execute_rejects_weak_duplicates() {
        let mut model = Model::from_coupons(vec![amy()]);
        let near_duplicate = CouponBuilder::from(&amy()).with_tags(&["other"]).build();

        let got = AddCommand::new(near_duplicate).execute(&mut model);

        assert_eq!(got, Err(CommandError::Model(ModelError::DuplicateCoupon)));
        assert_eq!(model.coupon_stash().len(), 1);
    }
}
