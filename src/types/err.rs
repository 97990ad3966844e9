//! Error types used in the library.
//!
//! - Each of these marks a broken invariant upstream, e.g. a world space requested without dimensions or an expression mentioning a proposition no world assigns.
//! - Running out of fresh statements, or a round of search without a determining subset, are *not* errors.
//!   These are ordinary results, see [StatementOk](crate::procedures::synthesis::StatementOk) and [Report](crate::reports::Report).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::proposition::Proposition;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Evaluation(EvaluationError),
    State(StateError),
    Synthesis(SynthesisError),
    WorldSpace(WorldSpaceError),
}

/// Noted errors when checking a configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value of the named option is outside of the bounds of the option.
    OutOfBounds { name: &'static str },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors during evaluation of an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The expression mentions a proposition which the world does not assign a value.
    UnknownProposition(Proposition),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Noted errors regarding the state of a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// The hidden world is not a world of the world space.
    NoHiddenWorld,

    /// A round was requested, though every statement has already been revealed.
    PoolExhausted,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Noted errors during synthesis of an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SynthesisError {
    /// A budget of zero propositions admits no expression.
    EmptyBudget,

    /// There are no propositions to build an expression from.
    NoPropositions,
}

impl From<SynthesisError> for ErrorKind {
    fn from(e: SynthesisError) -> Self {
        ErrorKind::Synthesis(e)
    }
}

/// Noted errors when building a world space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorldSpaceError {
    /// No dimensions were given.
    NoDimensions,

    /// The dimension at the given index has no alternatives, and so no world could pick one.
    EmptyDimension(usize),

    /// The product of the cardinalities of the dimensions overflows.
    TooManyWorlds,
}

impl From<WorldSpaceError> for ErrorKind {
    fn from(e: WorldSpaceError) -> Self {
        ErrorKind::WorldSpace(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(ConfigError::OutOfBounds { name }) => {
                write!(f, "The value of {name} is out of bounds")
            }
            Self::Evaluation(EvaluationError::UnknownProposition(p)) => {
                write!(f, "No value for {p}")
            }
            Self::State(StateError::NoHiddenWorld) => write!(f, "No hidden world"),
            Self::State(StateError::PoolExhausted) => write!(f, "Every statement is revealed"),
            Self::Synthesis(SynthesisError::EmptyBudget) => write!(f, "Empty proposition budget"),
            Self::Synthesis(SynthesisError::NoPropositions) => write!(f, "No propositions"),
            Self::WorldSpace(WorldSpaceError::NoDimensions) => write!(f, "No dimensions"),
            Self::WorldSpace(WorldSpaceError::EmptyDimension(index)) => {
                write!(f, "Dimension {index} is empty")
            }
            Self::WorldSpace(WorldSpaceError::TooManyWorlds) => write!(f, "Too many worlds"),
        }
    }
}
