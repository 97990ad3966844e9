//! The abstract elements of a session, and their representation.
//!
//! - [Propositions](proposition), each belonging to a [dimension](dimension).
//! - [Literals](literal), propositions paired with a polarity.
//! - [Expressions](expression), boolean formulas built from literals.
//! - [Worlds](world), total [valuations](valuation) which pick one alternative per dimension.

pub mod dimension;
pub mod expression;
pub mod literal;
pub mod proposition;
pub mod valuation;
pub mod world;
