use clap::Parser;
use sleuth::{
    config::Config,
    structures::{dimension::Dimension, proposition::dimension_letters},
};

/// Synthesises clues true of a hidden world, and reveals them until some clues determine the world
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the source of randomness
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// The number of distinct statements to synthesise
    #[arg(short = 'n', long = "statements", default_value_t = 50)]
    statements: usize,

    /// The maximum number of propositions in a statement
    #[arg(short = 'k', long, default_value_t = 4)]
    max_propositions: usize,

    /// The maximum depth of conjunctions and disjunctions in a statement
    #[arg(long, default_value_t = 6)]
    max_depth: usize,

    /// Attempts made to synthesise a statement distinct from those already synthesised
    #[arg(long, default_value_t = 1000)]
    retry_limit: usize,

    /// The maximum number of subsets examined by a round of search
    #[arg(long)]
    subset_limit: Option<usize>,

    /// Time limit for a round of search, in seconds, where 0 is no limit
    #[arg(short, long, default_value = "5", value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    time_limit: std::time::Duration,

    /// The cardinality of each dimension, e.g. 3,3,4, in place of the default suspect, location, and weapon
    #[arg(short, long, value_delimiter = ',')]
    dimensions: Option<Vec<u32>>,

    /// Display the hidden world before the first round
    #[arg(long, default_value_t = false)]
    show_hidden: bool,

    /// Display each statement as it is revealed
    #[arg(long, default_value_t = false)]
    show_statements: bool,
}

/// A collection of configuration options relevant only to the CLI.
pub struct CliConfig {
    pub seed: u64,

    pub dimensions: Vec<Dimension>,

    /// Whether to display the hidden world.
    pub show_hidden: bool,

    /// Whether to display each revealed statement.
    pub show_statements: bool,
}

/// The configuration of a session and of the CLI, from parsed arguments.
pub fn config_from_args(args: Args) -> (Config, CliConfig) {
    let mut config = Config::default();
    config.statement_target.value = args.statements;
    config.retry_limit.value = args.retry_limit;
    config.synthesis.max_propositions.value = args.max_propositions;
    config.synthesis.max_depth.value = args.max_depth;
    config.search.subset_limit = args.subset_limit;
    config.search.time_limit = match args.time_limit.is_zero() {
        true => None,
        false => Some(args.time_limit),
    };

    let dimensions = match args.dimensions {
        Some(cardinalities) => cardinalities
            .into_iter()
            .enumerate()
            .map(|(index, cardinality)| Dimension::unlabelled(dimension_letters(index as u32), cardinality))
            .collect(),

        None => vec![
            Dimension::new("suspect", ["Plum", "Mustard", "Peacock"]),
            Dimension::new("location", ["Kitchen", "Library", "Conservatory"]),
            Dimension::new("weapon", ["Knife", "Revolver", "Candlestick"]),
        ],
    };

    let cli_config = CliConfig {
        seed: args.seed,
        dimensions,
        show_hidden: args.show_hidden,
        show_statements: args.show_statements,
    };

    (config, cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn rounds_are_timed_by_default() {
        let (config, _) = config_from_args(Args::parse_from(["sleuth_cli"]));
        assert_eq!(config.search.time_limit, Some(Duration::from_secs(5)));
        assert_eq!(config.search.subset_limit, None);
    }

    #[test]
    fn zero_time_limit_is_unlimited() {
        let (config, _) = config_from_args(Args::parse_from(["sleuth_cli", "--time-limit", "0"]));
        assert_eq!(config.search.time_limit, None);
    }

    #[test]
    fn dimensions_from_cardinalities() {
        let (_, cli_config) = config_from_args(Args::parse_from(["sleuth_cli", "--dimensions", "2,4"]));
        let cardinalities = cli_config.dimensions.iter().map(Dimension::cardinality).collect::<Vec<_>>();
        assert_eq!(cardinalities, vec![2, 4]);
        assert_eq!(cli_config.dimensions[1].name(), "B");
    }
}
