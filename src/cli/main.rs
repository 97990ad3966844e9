use clap::Parser;
use sleuth::{
    procedures::synthesis::StatementOk,
    reports::Report,
    session::Session,
    types::err::ErrorKind,
};

mod args;

use args::{config_from_args, Args};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let (config, cli_config) = config_from_args(Args::parse());

    let mut the_session = match Session::from_config(config, cli_config.dimensions, cli_config.seed) {
        Ok(session) => session,
        Err(e) => {
            println!("c Session error: {e}");
            std::process::exit(1);
        }
    };

    println!("c {} worlds", the_session.world_space.len());

    if cli_config.show_hidden {
        let hidden = the_session.hidden_world();
        for (dimension, label) in the_session.world_space.describe(hidden) {
            println!("c Hidden {dimension}: {label}");
        }
    }

    match the_session.synthesize_pool() {
        Ok(Some(StatementOk::Exhausted)) => {
            println!(
                "c Could not generate enough distinct clues, continuing with {}",
                the_session.statement_db.len()
            );
        }
        Ok(_) => {}
        Err(e) => {
            println!("c Synthesis error: {e}");
            std::process::exit(2);
        }
    }

    let last_round = loop {
        let round = match the_session.next_round() {
            Ok(round) => round,
            Err(ErrorKind::State(_)) => {
                println!("c No statements to reveal");
                std::process::exit(0);
            }
            Err(e) => {
                println!("c Search error: {e}");
                std::process::exit(2);
            }
        };

        let revealed = the_session.statement_db.revealed();
        if cli_config.show_statements {
            if let Some(statement) = revealed.last() {
                println!("c Statement {}: {statement}", revealed.len());
            }
        }

        if round.report == Report::Undetermined && the_session.statement_db.unrevealed_count() > 0 {
            println!("c Round {}: insufficient evidence, revealing more", round.round);
            continue;
        }
        break round;
    };

    println!(
        "c Round {}: {} subsets examined, {} pruned",
        last_round.round, last_round.stats.examined, last_round.stats.pruned
    );
    for subset in &last_round.stats.sample {
        let indices = subset.iter().map(|index| (index + 1).to_string()).collect::<Vec<_>>();
        println!("c Examined {{{}}}", indices.join(", "));
    }

    let revealed = the_session.statement_db.revealed();
    for solution in &last_round.solutions {
        println!("c Determining subset of size {}:", solution.size());
        for index in &solution.indices {
            println!("c   {}: {}", index + 1, revealed[*index]);
        }
        if let Some(world) = the_session.world_space.world(solution.world) {
            for (dimension, label) in the_session.world_space.describe(world) {
                println!("c   {dimension}: {label}");
            }
        }
    }

    println!("s {}", last_round.report);
    match last_round.report {
        Report::Determined => std::process::exit(10),
        Report::Undetermined => std::process::exit(20),
        Report::BudgetExceeded => std::process::exit(30),
    }
}
