//! Literals are propositions paired with a (boolean) polarity.
//!
//! A literal with polarity true claims the proposition, and a literal with polarity false claims the negation of the proposition.
//! Negative literals are written with a leading `-`, in the style of DIMACS.
//!
//! ```rust
//! # use sleuth::structures::literal::Literal;
//! # use sleuth::structures::proposition::Proposition;
//! let literal = Literal::new(Proposition::new(0, 0), true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.to_string(), "A1");
//! assert_eq!(literal.negate().to_string(), "-A1");
//! assert_eq!(literal.negate().negate(), literal);
//! ```

use serde::Serialize;

use crate::{structures::proposition::Proposition, structures::valuation::Valuation, types::err};

/// The representation of a literal as a proposition paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Literal {
    /// The proposition of a literal.
    proposition: Proposition,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a proposition with a boolean.
    pub fn new(proposition: Proposition, polarity: bool) -> Self {
        Literal {
            proposition,
            polarity,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            proposition: self.proposition,
            polarity: !self.polarity,
        }
    }

    pub fn proposition(&self) -> Proposition {
        self.proposition
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The value of the literal on a valuation.
    pub fn value_on(&self, valuation: &impl Valuation) -> Result<bool, err::EvaluationError> {
        match valuation.value_of(self.proposition) {
            Some(value) => Ok(value == self.polarity),
            None => Err(err::EvaluationError::UnknownProposition(self.proposition)),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.proposition),
            false => write!(f, "-{}", self.proposition),
        }
    }
}
