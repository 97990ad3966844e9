/*!
Reports for a search, and for a round of a session.
*/

use serde::Serialize;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Report {
    /// Some subset of the statements determines a unique world.
    Determined,

    /// No subset of the statements determines a unique world.
    ///
    /// This is not an error, only a lack of information.
    Undetermined,

    /// The search stopped at a limit before examining every subset.
    ///
    /// Any determining subsets found before the limit are kept.
    BudgetExceeded,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Determined => write!(f, "Determined"),
            Self::Undetermined => write!(f, "Undetermined"),
            Self::BudgetExceeded => write!(f, "Budget exceeded"),
        }
    }
}
