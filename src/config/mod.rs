/*!
Configuration of a session.

All configuration for a session is contained within a [Config].
Procedures read the part of the configuration relevant to them, e.g. [synthesis](crate::procedures::synthesis) reads a [SynthesisConfig].

Bounded values are stored as a [ConfigOption], and [Config::validate] checks each value is within bounds.

```rust
# use sleuth::config::Config;
let mut config = Config::default();
assert!(config.validate().is_ok());

config.synthesis.max_propositions.value = 0;
assert!(config.validate().is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod search;
pub use search::SearchConfig;

pub mod synthesis;
pub use synthesis::SynthesisConfig;

use crate::types::err;

/// Representation for a probability.
pub type Probability = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of synthesis.
    pub synthesis: SynthesisConfig,

    /// Configuration of search.
    pub search: SearchConfig,

    /// The number of distinct statements to synthesise for a session.
    pub statement_target: ConfigOption<usize>,

    /// The number of attempts made to synthesise a statement distinct from those already synthesised.
    pub retry_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            synthesis: SynthesisConfig::default(),
            search: SearchConfig::default(),

            statement_target: ConfigOption {
                name: "statement_target",
                min: 1,
                max: 1024,
                value: 50,
            },

            retry_limit: ConfigOption {
                name: "retry_limit",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },
        }
    }
}

impl Config {
    /// Ok if every bounded value is within bounds, otherwise an error naming the first value out of bounds.
    pub fn validate(&self) -> Result<(), err::ConfigError> {
        self.synthesis.max_propositions.check()?;
        self.synthesis.max_depth.check()?;
        self.synthesis.simplify_after_depth.check()?;
        self.synthesis.false_disjunct_probability.check()?;
        self.statement_target.check()?;
        self.retry_limit.check()?;
        Ok(())
    }
}
