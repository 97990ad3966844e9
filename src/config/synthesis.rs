//! Configuration of [synthesis](crate::procedures::synthesis).

use super::{ConfigOption, Probability};

/// Configuration for synthesis of statements.
#[derive(Clone, Debug)]
pub struct SynthesisConfig {
    /// The maximum number of leaf occurrences in a synthesised statement.
    pub max_propositions: ConfigOption<usize>,

    /// The depth at which only literals and implications between literals are synthesised.
    pub max_depth: ConfigOption<usize>,

    /// The depth after which literals and implications between literals are favoured over conjunctions and disjunctions.
    pub simplify_after_depth: ConfigOption<usize>,

    /// The probability of taking the negation of a true statement as the second disjunct of a disjunction.
    pub false_disjunct_probability: ConfigOption<Probability>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            max_propositions: ConfigOption {
                name: "max_propositions",
                min: 1,
                max: 64,
                value: 4,
            },

            max_depth: ConfigOption {
                name: "max_depth",
                min: 0,
                max: 32,
                value: 6,
            },

            simplify_after_depth: ConfigOption {
                name: "simplify_after_depth",
                min: 0,
                max: 32,
                value: 2,
            },

            false_disjunct_probability: ConfigOption {
                name: "false_disjunct_probability",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },
        }
    }
}
