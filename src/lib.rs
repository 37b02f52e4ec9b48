//! Coupon Stash is a local app for keeping track of coupons: what they save,
//! when they expire, and how to reach the store that issued them.
//!
//! This library holds the coupon domain model and the command pipeline that
//! operates on it. Raw input is dispatched to a per-command parser
//! ([parser::parse_command]), which builds a validated [command::Command];
//! executing the command against the [model::Model] mutates or queries the
//! stash and yields a [command::CommandResult] for display.

#![warn(missing_docs)]

pub mod command;
pub mod coupon;
pub mod model;
pub mod parser;
pub mod predicate;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_util;

pub use command::{Command, CommandError, CommandResult};
pub use coupon::{Coupon, ValidationError};
pub use model::{Model, ModelError};
pub use parser::{ParseError, parse_command};
pub use predicate::CouponPredicate;
