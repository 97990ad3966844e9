/*!
Rounds of a session.

Each round reveals the next statement of the pool, and then [searches](crate::procedures::search) the revealed statements for subsets which determine a world.

Subsets are recomputed from scratch each round.
As a subset which determines a world on some pool of statements also determines the world on any larger pool, solutions from an earlier round are found again, together with any new solutions using the newly revealed statement.

[run](GenericSession::run) synthesises a pool of statements (if the pool is empty) and then plays rounds until some round determines a world, or the statements are exhausted:

```rust,ignore
loop {
    let round = self.next_round()?;
    if round.report != Report::Undetermined || self.statement_db.unrevealed_count() == 0 {
        return Ok(round);
    }
}
```
*/

use rand::Rng;
use serde::Serialize;

use crate::{
    misc::log::targets,
    procedures::search::{find_minimal_determining_subsets, DeterminingSubset, SearchStats},
    reports::Report,
    session::GenericSession,
    types::err::{self, ErrorKind},
};

/// A report on a round of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// The number of the round, from 1.
    pub round: usize,

    pub report: Report,

    /// Determining subsets of the revealed statements, as indices into the revealed statements.
    pub solutions: Vec<DeterminingSubset>,

    pub stats: SearchStats,
}

impl<R: Rng> GenericSession<R> {
    /// Reveals the next statement and searches the revealed statements for determining subsets.
    ///
    /// Fails with [PoolExhausted](err::StateError::PoolExhausted) if every statement is already revealed.
    pub fn next_round(&mut self) -> Result<RoundReport, ErrorKind> {
        if self.statement_db.reveal_next().is_none() {
            return Err(ErrorKind::from(err::StateError::PoolExhausted));
        }
        self.counters.rounds += 1;

        let started = std::time::Instant::now();
        let search = find_minimal_determining_subsets(
            self.statement_db.revealed(),
            &self.world_space,
            &self.config.search,
        )?;
        self.counters.search_time += started.elapsed();
        self.counters.subsets_examined += search.stats.examined;

        log::info!(target: targets::SESSION, "Round {}: {}", self.counters.rounds, search.report);

        Ok(RoundReport {
            round: self.counters.rounds,
            report: search.report,
            solutions: search.solutions,
            stats: search.stats,
        })
    }

    /// Plays rounds until some round determines a world, a search exceeds its budget, or every statement has been revealed.
    ///
    /// If the pool of statements is empty, a pool is synthesised first.
    /// Returns the report of the final round.
    pub fn run(&mut self) -> Result<RoundReport, ErrorKind> {
        if self.statement_db.is_empty() {
            self.synthesize_pool()?;
        }

        loop {
            let round = self.next_round()?;
            if round.report != Report::Undetermined || self.statement_db.unrevealed_count() == 0 {
                return Ok(round);
            }
        }
    }
}
