//! The `edit` command: rebuild a coupon with some fields replaced.

use std::collections::BTreeSet;

use crate::{
    command::{Command, CommandError, CommandResult},
    coupon::{Coupon, ExpiryDate, Name, Phone, Savings, Tag},
    model::Model,
    parser::{
        ArgumentMultimap, PREFIX_EXPIRY_DATE, PREFIX_NAME, PREFIX_PHONE, PREFIX_SAVINGS,
        PREFIX_TAG, ParseError, parse_index, parse_savings, parse_tags,
    },
    predicate::CouponPredicate,
};

/// The fields to overwrite on the target coupon; unset fields keep the
/// target's values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditCouponDescriptor {
    /// The replacement name, if edited.
    pub name: Option<Name>,
    /// The replacement phone, if edited.
    pub phone: Option<Phone>,
    /// The replacement savings, if edited.
    pub savings: Option<Savings>,
    /// The replacement expiry date, if edited.
    pub expiry_date: Option<ExpiryDate>,
    /// The replacement tag set, if edited. `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditCouponDescriptor {
    /// Whether at least one field would be overwritten.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.savings.is_some()
            || self.expiry_date.is_some()
            || self.tags.is_some()
    }

    /// Build the edited coupon, taking unset fields from `target`.
    fn apply_to(&self, target: &Coupon) -> Coupon {
        Coupon::new(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            self.phone.clone().unwrap_or_else(|| target.phone().clone()),
            self.savings
                .clone()
                .unwrap_or_else(|| target.savings().clone()),
            self.expiry_date.unwrap_or(*target.expiry_date()),
            self.tags.clone().unwrap_or_else(|| target.tags().clone()),
        )
    }
}

/// Edits the coupon at a one-based index into the currently displayed list.
///
/// Editing never mutates in place: a new coupon replaces the target at the
/// same position. Afterwards the view resets to show all coupons.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: usize,
    descriptor: EditCouponDescriptor,
}

impl EditCommand {
    /// The keyword that selects this command.
    pub const COMMAND_WORD: &'static str = "edit";

    /// The usage string shown on a parse failure.
    pub const MESSAGE_USAGE: &'static str =
        "edit: Edits the coupon identified by the index number used in the displayed coupon list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [s/SAVINGS]... [e/EXPIRY_DATE] [t/TAG]...\n\
        Example: edit 1 p/91234567";

    /// The message for an edit that names no fields.
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    /// Create the command for a zero-based index and a descriptor.
    pub fn new(index: usize, descriptor: EditCouponDescriptor) -> Self {
        Self { index, descriptor }
    }

    /// Parse the argument text for an `edit` command.
    ///
    /// # Errors
    ///
    /// Returns a [ParseError] on a missing or malformed index, a repeated
    /// single-valued prefix, a value failing its format rule, or when no
    /// field to edit was given.
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

        let index = parse_index(map.preamble(), Self::MESSAGE_USAGE)?;

        let savings_values = map.all_values(PREFIX_SAVINGS);
        let savings = if savings_values.is_empty() {
            None
        } else {
            Some(parse_savings(&savings_values, Self::MESSAGE_USAGE)?)
        };

        let descriptor = EditCouponDescriptor {
            name: map
                .at_most_one(PREFIX_NAME, Self::MESSAGE_USAGE)?
                .map(Name::new)
                .transpose()?,
            phone: map
                .at_most_one(PREFIX_PHONE, Self::MESSAGE_USAGE)?
                .map(Phone::new)
                .transpose()?,
            savings,
            expiry_date: map
                .at_most_one(PREFIX_EXPIRY_DATE, Self::MESSAGE_USAGE)?
                .map(ExpiryDate::new)
                .transpose()?,
            tags: parse_tags_for_edit(&map.all_values(PREFIX_TAG))?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::new(Self::MESSAGE_NOT_EDITED));
        }

        Ok(Self::new(index, descriptor))
    }
}

/// Parse the `t/` values of an edit: absent means 'keep the tags', a single
/// empty `t/` means 'clear the tags'.
fn parse_tags_for_edit(values: &[&str]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match values {
        [] => Ok(None),
        [""] => Ok(Some(BTreeSet::new())),
        _ => Ok(Some(parse_tags(values)?)),
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target: Coupon = model
            .filtered_coupons()
            .get(self.index)
            .map(|&coupon| coupon.clone())
            .ok_or(CommandError::InvalidIndex)?;

        let edited = self.descriptor.apply_to(&target);
        model.set_coupon(&target, edited.clone())?;
        model.update_filtered_coupon_list(CouponPredicate::All);

        Ok(CommandResult::new(format!("Edited Coupon: {edited}")))
    }
}
