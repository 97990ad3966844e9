/*!
A search for the smallest subsets of statements which determine a unique world.

# Overview

A subset of statements *determines* a world if exactly one world of the world space is consistent with every statement of the subset.

The search examines subsets of the statements in order of size, and lexicographically by index within a size.
A subset is recorded as a solution when it determines a world.
And, before examining a subset, the subset is skipped if it contains some solution already recorded, as a strict superset of a solution cannot be minimal.

```rust,ignore
for subset in SizeOrderedSubsets::new(statements.len()) {
    if solutions.iter().any(|solution| solution.is_contained_in(&subset)) {
        continue;
    }
    if let [world] = consistent_worlds(subset) {
        solutions.push(DeterminingSubset { indices: subset, world });
    }
}
```

# Minimality

Pruning is by containment of a recorded solution only.
So, every recorded solution is inclusion-minimal among determining subsets:
- Any proper subset of a recorded solution is smaller, and so was examined earlier, and did not determine a world (or was itself skipped for containing a solution, which contradicts the recorded solution not being skipped).

Still, no claim is made beyond this.
In particular, the recorded solutions are not a minimum cover of anything, and a subset which determines a world only because it contains a recorded solution is never reported.

# Cost

There are 2<sup>n</sup> - 1 non-empty subsets of *n* statements, and so the search is exponential in the number of statements.
This is the main limit on the size of a pool of statements.
[SearchConfig] allows a cap on the number of subsets examined, and/or on the time taken, after which the search stops with a [BudgetExceeded](Report::BudgetExceeded) report.

To keep the cost of examining a subset low the worlds on which each statement is true are computed once, and the worlds consistent with a subset are the intersection of these.

# Hidden worlds

The search has no knowledge of any hidden world.
Every world of the world space is treated alike, and whichever world a solution determines is found by elimination.
*/

use serde::Serialize;

use crate::{
    config::SearchConfig,
    db::world_space::{WorldIndex, WorldSpace},
    generic::{subsets::SizeOrderedSubsets, world_set::WorldSet},
    misc::log::targets,
    reports::Report,
    structures::expression::Expression,
    types::err,
};

/// The number of examined subsets kept as a sample in [SearchStats].
pub const SAMPLE_SIZE: usize = 10;

/// A subset of statements which determines a unique world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeterminingSubset {
    /// Indices of the statements in the subset, strictly increasing.
    pub indices: Vec<usize>,

    /// The world determined by the subset.
    pub world: WorldIndex,
}

impl DeterminingSubset {
    /// The number of statements in the subset.
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Whether every statement of the subset is in the other subset.
    ///
    /// Both lists of indices are strictly increasing.
    pub fn is_contained_in(&self, other: &[usize]) -> bool {
        let mut other = other.iter();
        self.indices
            .iter()
            .all(|index| other.by_ref().any(|other_index| other_index == index))
    }
}

/// Counts regarding a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// A count of the subsets for which consistent worlds were found.
    pub examined: usize,

    /// A count of the subsets skipped for containing a solution.
    pub pruned: usize,

    /// The first few subsets examined, in order, as (0-based) indices into the statements.
    pub sample: Vec<Vec<usize>>,
}

/// The result of a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Search {
    pub report: Report,

    /// The determining subsets found, by increasing size.
    pub solutions: Vec<DeterminingSubset>,

    pub stats: SearchStats,
}

/// Finds every subset of the statements which determines a unique world of the world space, and which contains no smaller determining subset.
///
/// Subsets are given as indices into `statements`.
/// If no subset determines a world the report is [Undetermined](Report::Undetermined) with no solutions, which is the case for an empty collection of statements whenever the world space has more than one world.
///
/// Fails if some statement mentions a proposition outside of the world space.
pub fn find_minimal_determining_subsets(
    statements: &[Expression],
    world_space: &WorldSpace,
    config: &SearchConfig,
) -> Result<Search, err::EvaluationError> {
    let started = std::time::Instant::now();

    let truth_sets = statements
        .iter()
        .map(|statement| truth_set(statement, world_space))
        .collect::<Result<Vec<_>, _>>()?;

    let mut solutions: Vec<DeterminingSubset> = Vec::default();
    let mut stats = SearchStats::default();
    let mut budget_exceeded = false;

    for subset in SizeOrderedSubsets::new(statements.len()) {
        if solutions.iter().any(|solution| solution.is_contained_in(&subset)) {
            stats.pruned += 1;
            continue;
        }

        if config.subset_limit.is_some_and(|limit| stats.examined >= limit)
            || config.time_limit.is_some_and(|limit| started.elapsed() >= limit)
        {
            log::info!(target: targets::SEARCH, "Search stopped after {} subsets", stats.examined);
            budget_exceeded = true;
            break;
        }

        let mut consistent = WorldSet::full(world_space.len());
        for index in &subset {
            consistent.intersect_with(&truth_sets[*index]);
        }

        stats.examined += 1;
        if stats.sample.len() < SAMPLE_SIZE {
            stats.sample.push(subset.clone());
        }

        if consistent.len() == 1 {
            if let Some(world) = consistent.first() {
                log::debug!(target: targets::SEARCH, "Subset {subset:?} determines world {world}");
                solutions.push(DeterminingSubset {
                    indices: subset,
                    world,
                });
            }
        }
    }

    solutions.sort_by_key(|solution| solution.size());

    let report = match (budget_exceeded, solutions.is_empty()) {
        (true, _) => Report::BudgetExceeded,
        (false, false) => Report::Determined,
        (false, true) => Report::Undetermined,
    };

    log::info!(target: targets::SEARCH,
        "{report} with {} solutions from {} statements ({} examined, {} pruned)",
        solutions.len(), statements.len(), stats.examined, stats.pruned);

    Ok(Search {
        report,
        solutions,
        stats,
    })
}

/// The worlds on which the statement is true.
fn truth_set(statement: &Expression, world_space: &WorldSpace) -> Result<WorldSet, err::EvaluationError> {
    world_space.check_statement(statement)?;
    let mut set = WorldSet::empty(world_space.len());
    for (index, world) in world_space.worlds().iter().enumerate() {
        if statement.evaluate(world)? {
            set.insert(index);
        }
    }
    Ok(set)
}
