//! Turning raw command text into validated commands.
//!
//! Parsing is pure syntax plus value-type validation; it never touches the
//! [Model](crate::model::Model). Argument text uses fixed prefixes (`n/`,
//! `p/`, `s/`, `e/`, `t/`), each introducing one value that runs until the
//! next prefix. Repeatable prefixes (`s/`, `t/`) may appear any number of
//! times; the single-valued ones may appear at most once.

use std::collections::BTreeSet;

use crate::{
    command::{
        AddCommand, Command, DeleteCommand, EditCommand, ExpiringCommand, FindCommand, ListCommand,
    },
    coupon::{MonetaryAmount, PercentageAmount, Saveable, Savings, Tag, ValidationError},
};

/// A fixed argument prefix, e.g., `n/`.
pub type Prefix = &'static str;

/// Introduces the coupon name.
pub const PREFIX_NAME: Prefix = "n/";
/// Introduces the phone number.
pub const PREFIX_PHONE: Prefix = "p/";
/// Introduces one savings component; repeatable.
pub const PREFIX_SAVINGS: Prefix = "s/";
/// Introduces the expiry date.
pub const PREFIX_EXPIRY_DATE: Prefix = "e/";
/// Introduces one tag; repeatable.
pub const PREFIX_TAG: Prefix = "t/";

/// A malformed or incomplete command, reported before any model access.
///
/// The message carries the offending command's usage string or the failing
/// value type's format hint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(String);

impl ParseError {
    /// A parse error with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The error for arguments that do not fit a command's expected shape.
    pub fn invalid_format(usage: &str) -> Self {
        Self(format!("Invalid command format!\n{usage}"))
    }

    /// The error for a keyword with no matching command.
    pub fn unknown_command() -> Self {
        Self("Unknown command".to_string())
    }
}

impl From<ValidationError> for ParseError {
    fn from(error: ValidationError) -> Self {
        Self(error.to_string())
    }
}

/// Raw argument text split into a preamble and per-prefix values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    /// Tokenize `args` around occurrences of `prefixes`.
    ///
    /// A prefix only counts when preceded by whitespace (or at the start of
    /// the arguments), so free text like `1-for-1` cannot be mistaken for
    /// one. Each value runs from its prefix to the next prefix and is
    /// trimmed; the preamble is whatever precedes the first prefix.
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> Self {
        // A leading space makes 'preceded by whitespace' uniform.
        let padded = format!(" {args}");
        let mut positions: Vec<(usize, Prefix)> = Vec::new();

        for &prefix in prefixes {
            let marker = format!(" {prefix}");
            let mut from = 0;

            while let Some(found) = padded[from..].find(&marker) {
                let at = from + found + 1;
                positions.push((at, prefix));
                from = at + prefix.len();
            }
        }

        positions.sort_unstable_by_key(|&(at, _)| at);

        let preamble_end = positions.first().map_or(padded.len(), |&(at, _)| at);
        let preamble = padded[1..preamble_end].trim().to_string();

        let values = positions
            .iter()
            .enumerate()
            .map(|(i, &(at, prefix))| {
                let end = positions.get(i + 1).map_or(padded.len(), |&(next, _)| next);
                let value = padded[at + prefix.len()..end].trim().to_string();
                (prefix, value)
            })
            .collect();

        Self { preamble, values }
    }

    /// The text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// The value of a single-valued prefix, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Fails with [ParseError::invalid_format] for `usage` when the prefix
    /// was repeated.
    pub fn at_most_one(&self, prefix: Prefix, usage: &str) -> Result<Option<&str>, ParseError> {
        match self.all_values(prefix)[..] {
            [] => Ok(None),
            [value] => Ok(Some(value)),
            _ => Err(ParseError::invalid_format(usage)),
        }
    }

    /// The value of a required single-valued prefix.
    ///
    /// # Errors
    ///
    /// Fails with [ParseError::invalid_format] for `usage` when the prefix
    /// is absent or repeated.
    pub fn exactly_one(&self, prefix: Prefix, usage: &str) -> Result<&str, ParseError> {
        self.at_most_one(prefix, usage)?
            .ok_or_else(|| ParseError::invalid_format(usage))
    }
}

/// Parse a one-based display index into its zero-based form.
pub(crate) fn parse_index(text: &str, usage: &str) -> Result<usize, ParseError> {
    match text.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index - 1),
        _ => Err(ParseError::invalid_format(usage)),
    }
}

/// The message for a savings list with more than one monetary amount.
pub const MESSAGE_DUPLICATE_MONETARY_AMOUNT: &str =
    "Savings should have at most one monetary amount";
/// The message for a savings list with more than one percentage amount.
pub const MESSAGE_DUPLICATE_PERCENTAGE_AMOUNT: &str =
    "Savings should have at most one percentage amount";

/// Parse the values of the repeated `s/` prefix into a [Savings].
///
/// A leading `$` marks a monetary amount and a trailing `%` a percentage;
/// anything else is a saveable. At most one of each numeric kind is allowed.
pub(crate) fn parse_savings(values: &[&str], usage: &str) -> Result<Savings, ParseError> {
    if values.is_empty() {
        return Err(ParseError::invalid_format(usage));
    }

    let mut monetary = None;
    let mut percentage = None;
    let mut saveables = Vec::new();

    for &value in values {
        if let Some(amount_text) = value.strip_prefix('$') {
            if monetary.is_some() {
                return Err(ParseError::new(MESSAGE_DUPLICATE_MONETARY_AMOUNT));
            }

            let amount: f64 = amount_text
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidMonetaryAmount)?;
            monetary = Some(MonetaryAmount::new(amount)?);
        } else if let Some(percent_text) = value.strip_suffix('%') {
            if percentage.is_some() {
                return Err(ParseError::new(MESSAGE_DUPLICATE_PERCENTAGE_AMOUNT));
            }

            let amount: f64 = percent_text
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidPercentageAmount)?;
            percentage = Some(PercentageAmount::new(amount)?);
        } else {
            saveables.push(Saveable::new(value)?);
        }
    }

    Ok(Savings::new(monetary, percentage, saveables)?)
}

/// Parse the values of the repeated `t/` prefix into a tag set.
pub(crate) fn parse_tags(values: &[&str]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|value| Tag::new(value).map_err(ParseError::from))
        .collect()
}

/// Select the parser for the leading keyword and run it.
///
/// The keyword-to-parser mapping is a fixed `match`: the set of supported
/// commands is closed, and an unrecognized keyword fails before any
/// per-command parser runs.
///
/// # Errors
///
/// Returns a [ParseError] for an unknown keyword or any failure inside the
/// selected command's parser.
pub fn parse_command(input: &str) -> Result<Box<dyn Command>, ParseError> {
    let trimmed = input.trim();
    let (keyword, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match keyword {
        AddCommand::COMMAND_WORD => Ok(Box::new(AddCommand::parse(args)?)),
        DeleteCommand::COMMAND_WORD => Ok(Box::new(DeleteCommand::parse(args)?)),
        EditCommand::COMMAND_WORD => Ok(Box::new(EditCommand::parse(args)?)),
        FindCommand::COMMAND_WORD => Ok(Box::new(FindCommand::parse(args)?)),
        ListCommand::COMMAND_WORD => Ok(Box::new(ListCommand)),
        ExpiringCommand::COMMAND_WORD => Ok(Box::new(ExpiringCommand::parse(args)?)),
        _ => Err(ParseError::unknown_command()),
    }
}
