/*!
Synthesis of random statements which are true on a hidden world.

# Overview

A statement is built top-down by choosing a [kind of node](NodeKind) and, for conjunctions and disjunctions, building the children recursively:

- [Literal](NodeKind::Literal) --- a random proposition, with polarity matching its value on the hidden world.
- [NegatedLiteral](NodeKind::NegatedLiteral) --- a random proposition, built as the negation of the positive literal if the proposition is false on the hidden world.
- [Implication](NodeKind::Implication) --- an implication between literals of two distinct random propositions `p` and `q`.
  The polarities of the literals are the first of `p → q`, `¬p → q`, `p → ¬q`, `¬p → ¬q` which is true on the hidden world.
  As `¬p → q` is true whenever `p → q` is false, some choice always succeeds.
- [And](NodeKind::And) --- the conjunction of two statements true on the hidden world.
- [Or](NodeKind::Or) --- the disjunction of a statement true on the hidden world with either another such statement, or the negation of one (with [probability](crate::config::SynthesisConfig::false_disjunct_probability)).

So, by induction, every synthesised statement is true on the hidden world.

# Budget

Each call is given a budget of propositions, and the leaves of a statement never exceed the budget:
- A literal uses one proposition, and an implication two.
  An implication is only chosen with a budget of at least two.
- The first child of a conjunction or disjunction is given half the budget (rounded down), and the second child the remainder of the budget after the first child.
  Conjunctions and disjunctions are only chosen with a budget of at least two, so each child is given at least one and strictly less than the whole budget.

As the budget strictly decreases with each recursive call, synthesis always terminates.
In addition, past the [maximum depth](crate::config::SynthesisConfig::max_depth) only literals and implications are chosen.

Should a combined conjunction or disjunction use more propositions than the budget, the first child is returned in place of the combination.
With the budget split as above this does not happen, though the check is kept as the final word on the budget.

# Depth bias

Past [simplify_after_depth](crate::config::SynthesisConfig::simplify_after_depth), literals and implications are weighted over conjunctions and disjunctions, to favour shallow statements.

# Example

```rust
# use rand::{rngs::StdRng, SeedableRng};
# use sleuth::config::SynthesisConfig;
# use sleuth::db::world_space::WorldSpace;
# use sleuth::procedures::synthesis::synthesize;
# use sleuth::structures::dimension::Dimension;
let space = WorldSpace::build(vec![Dimension::unlabelled("A", 3), Dimension::unlabelled("B", 3)]).unwrap();
let hidden = &space.worlds()[4];
let mut rng = StdRng::seed_from_u64(42);

let statement = synthesize(hidden, &SynthesisConfig::default(), &mut rng).unwrap();
assert_eq!(statement.evaluate(hidden), Ok(true));
assert!(statement.proposition_count() <= 4);
```
*/

use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;

use crate::{
    config::SynthesisConfig,
    misc::log::targets,
    session::GenericSession,
    structures::{expression::Expression, proposition::Proposition, world::World},
    types::err,
};

/// The kinds of node chosen between during synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Literal,
    NegatedLiteral,
    Implication,
    And,
    Or,
}

/// Weights of each kind of node, at or before the depth from which simple nodes are favoured.
const SHALLOW_WEIGHTS: [(NodeKind, usize); 5] = [
    (NodeKind::Literal, 1),
    (NodeKind::NegatedLiteral, 1),
    (NodeKind::Implication, 1),
    (NodeKind::And, 1),
    (NodeKind::Or, 1),
];

/// Weights of each kind of node, past the depth from which simple nodes are favoured.
const DEEP_WEIGHTS: [(NodeKind, usize); 5] = [
    (NodeKind::Literal, 3),
    (NodeKind::NegatedLiteral, 3),
    (NodeKind::Implication, 2),
    (NodeKind::And, 1),
    (NodeKind::Or, 1),
];

/// Polarities of the antecedent and consequent of an implication, in order of preference.
const IMPLICATION_POLARITIES: [(bool, bool); 4] = [(true, true), (false, true), (true, false), (false, false)];

/// A synthesiser of statements true on some hidden world.
pub struct Synthesizer<'a> {
    /// The value of each proposition on the hidden world.
    facts: Vec<(Proposition, bool)>,

    config: &'a SynthesisConfig,

    #[cfg(debug_assertions)]
    hidden: &'a World,
}

impl<'a> Synthesizer<'a> {
    /// A synthesiser for the given hidden world.
    ///
    /// Fails if the budget of propositions is zero, or the world has no propositions.
    pub fn new(hidden: &'a World, config: &'a SynthesisConfig) -> Result<Self, err::SynthesisError> {
        if config.max_propositions.value == 0 {
            return Err(err::SynthesisError::EmptyBudget);
        }

        let facts = hidden.proposition_value_pairs().collect::<Vec<_>>();
        if facts.is_empty() {
            return Err(err::SynthesisError::NoPropositions);
        }

        Ok(Synthesizer {
            facts,
            config,
            #[cfg(debug_assertions)]
            hidden,
        })
    }

    /// A random statement true on the hidden world, within the configured budget of propositions.
    pub fn synthesize(&self, rng: &mut impl Rng) -> Expression {
        let statement = self.synthesize_within(self.config.max_propositions.value, 0, rng);

        #[cfg(debug_assertions)]
        debug_assert_eq!(statement.evaluate(self.hidden), Ok(true));

        log::trace!(target: targets::SYNTHESIS, "Synthesised {statement}");
        statement
    }

    fn synthesize_within(&self, budget: usize, depth: usize, rng: &mut impl Rng) -> Expression {
        match self.choose_kind(budget, depth, rng) {
            NodeKind::Literal => self.literal(rng),

            NodeKind::NegatedLiteral => self.negated_literal(rng),

            NodeKind::Implication => self.implication(rng),

            NodeKind::And => {
                let first = self.synthesize_within(budget / 2, depth + 1, rng);
                let remaining = budget - first.proposition_count();
                let second = self.synthesize_within(remaining, depth + 1, rng);

                Self::within_budget(Expression::and(first, second), budget)
            }

            NodeKind::Or => {
                let first = self.synthesize_within(budget / 2, depth + 1, rng);
                let remaining = budget - first.proposition_count();
                let second = match rng.random_bool(self.config.false_disjunct_probability.value) {
                    true => Expression::not(self.synthesize_within(remaining, depth + 1, rng)),
                    false => self.synthesize_within(remaining, depth + 1, rng),
                };

                Self::within_budget(Expression::or(first, second), budget)
            }
        }
    }

    /// The combination, if within budget, and otherwise the first child of the combination.
    fn within_budget(combination: Expression, budget: usize) -> Expression {
        if combination.proposition_count() <= budget {
            return combination;
        }
        log::trace!(target: targets::SYNTHESIS, "{combination} exceeds a budget of {budget}");
        match combination {
            Expression::And(mut children) | Expression::Or(mut children) if !children.is_empty() => {
                children.swap_remove(0)
            }
            other => other,
        }
    }

    /// Chooses the kind of the next node from those which fit the budget and depth.
    fn choose_kind(&self, budget: usize, depth: usize, rng: &mut impl Rng) -> NodeKind {
        let weights = match depth > self.config.simplify_after_depth.value {
            true => &DEEP_WEIGHTS,
            false => &SHALLOW_WEIGHTS,
        };

        let compound_permitted = budget >= 2 && depth < self.config.max_depth.value;
        let implication_permitted = budget >= 2 && self.facts.len() >= 2;

        let kinds = weights
            .iter()
            .filter(|(kind, _)| match kind {
                NodeKind::Literal | NodeKind::NegatedLiteral => true,
                NodeKind::Implication => implication_permitted,
                NodeKind::And | NodeKind::Or => compound_permitted,
            })
            .flat_map(|(kind, weight)| std::iter::repeat_n(*kind, *weight))
            .collect::<Vec<_>>();

        kinds.choose(rng).copied().unwrap_or(NodeKind::Literal)
    }

    fn literal(&self, rng: &mut impl Rng) -> Expression {
        let (proposition, value) = self.facts[rng.random_range(0..self.facts.len())];
        Expression::literal(proposition, value)
    }

    fn negated_literal(&self, rng: &mut impl Rng) -> Expression {
        let (proposition, value) = self.facts[rng.random_range(0..self.facts.len())];
        match value {
            true => Expression::literal(proposition, true),
            false => Expression::not(Expression::literal(proposition, true)),
        }
    }

    fn implication(&self, rng: &mut impl Rng) -> Expression {
        let picks = rand::seq::index::sample(rng, self.facts.len(), 2);
        let (p, p_value) = self.facts[picks.index(0)];
        let (q, q_value) = self.facts[picks.index(1)];

        let (p_polarity, q_polarity) = IMPLICATION_POLARITIES
            .into_iter()
            .find(|(p_polarity, q_polarity)| *p_polarity != p_value || *q_polarity == q_value)
            .unwrap_or((!p_value, q_value));

        Expression::implies(
            Expression::literal(p, p_polarity),
            Expression::literal(q, q_polarity),
        )
    }
}

/// A random statement true on the hidden world, with at most [max_propositions](SynthesisConfig::max_propositions) leaves.
///
/// Fails if the budget of propositions is zero, or the world has no propositions.
pub fn synthesize(
    hidden: &World,
    config: &SynthesisConfig,
    rng: &mut impl Rng,
) -> Result<Expression, err::SynthesisError> {
    Ok(Synthesizer::new(hidden, config)?.synthesize(rng))
}

/// Ok results of requesting a fresh statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementOk {
    /// A fresh statement was stored, at the given index of the statement database.
    Fresh(usize),

    /// Every attempt within the retry limit gave a statement already stored.
    Exhausted,
}

impl<R: Rng> GenericSession<R> {
    /// Synthesises statements until one distinct from every stored statement is found, or the [retry limit](crate::config::Config::retry_limit) is reached.
    pub fn fresh_statement(&mut self) -> Result<StatementOk, err::ErrorKind> {
        let hidden = &self.world_space.worlds()[self.hidden_index()];
        let synthesizer = Synthesizer::new(hidden, &self.config.synthesis)?;

        for _ in 0..self.config.retry_limit.value {
            let statement = synthesizer.synthesize(&mut self.rng);
            self.counters.synthesised += 1;

            if self.statement_db.insert(statement) {
                return Ok(StatementOk::Fresh(self.statement_db.len() - 1));
            }
            self.counters.duplicates += 1;
        }

        log::info!(target: targets::SYNTHESIS, "No fresh statement within {} attempts", self.config.retry_limit.value);
        Ok(StatementOk::Exhausted)
    }

    /// Synthesises fresh statements until the database holds the [statement target](crate::config::Config::statement_target), then shuffles the statements yet to be revealed.
    ///
    /// Synthesis stops early if no fresh statement can be found, and so the database may hold fewer statements than the target.
    /// Returns the result of the final request for a fresh statement, if any request was made.
    pub fn synthesize_pool(&mut self) -> Result<Option<StatementOk>, err::ErrorKind> {
        let mut last = None;
        while self.statement_db.len() < self.config.statement_target.value {
            let result = self.fresh_statement()?;
            last = Some(result);
            if result == StatementOk::Exhausted {
                break;
            }
        }

        self.statement_db.shuffle_unrevealed(&mut self.rng);
        log::info!(target: targets::SYNTHESIS,
            "Pool of {} statements from {} attempts", self.statement_db.len(), self.counters.synthesised);

        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::world_space::WorldSpace,
        structures::{dimension::Dimension, literal::Literal},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn space() -> WorldSpace {
        WorldSpace::build(vec![
            Dimension::unlabelled("A", 3),
            Dimension::unlabelled("B", 3),
            Dimension::unlabelled("C", 3),
        ])
        .unwrap()
    }

    #[test]
    fn true_and_within_budget() {
        let space = space();
        for max_propositions in 1..=8 {
            let mut config = SynthesisConfig::default();
            config.max_propositions.value = max_propositions;
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let hidden = &space.worlds()[(seed as usize) % space.len()];
                let statement = synthesize(hidden, &config, &mut rng).unwrap();
                assert_eq!(statement.evaluate(hidden), Ok(true), "{statement}");
                assert!(statement.proposition_count() <= max_propositions, "{statement}");
            }
        }
    }

    #[test]
    fn depth_is_bounded() {
        let space = space();
        let mut config = SynthesisConfig::default();
        config.max_propositions.value = 64;
        config.max_depth.value = 3;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let statement = synthesize(&space.worlds()[0], &config, &mut rng).unwrap();
            // A disjunction may negate its second disjunct, and an implication sits one below the maximum.
            assert!(statement.depth() <= 2 * 3 + 1, "{statement}");
        }
    }

    #[test]
    fn single_proposition_budget_gives_literals() {
        let space = space();
        let mut config = SynthesisConfig::default();
        config.max_propositions.value = 1;
        let hidden = &space.worlds()[13];
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let statement = synthesize(hidden, &config, &mut rng).unwrap();
            assert!(matches!(statement, Expression::Literal(_)), "{statement}");
        }
    }

    #[test]
    fn implication_polarity_preference() {
        let space = WorldSpace::build(vec![Dimension::unlabelled("A", 2)]).unwrap();
        let config = SynthesisConfig::default();

        // A1 true, A2 false, so A1 -> A2 is false and -A1 -> A2 is the first true choice.
        let hidden = &space.worlds()[0];
        let synthesizer = Synthesizer::new(hidden, &config).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let implication = synthesizer.implication(&mut rng);
            assert_eq!(implication.evaluate(hidden), Ok(true));
            let expected = match implication.literals().next().map(Literal::proposition) {
                Some(p) if p == Proposition::new(0, 0) => "(-A1 -> A2)",
                _ => "(A2 -> A1)",
            };
            assert_eq!(implication.canonical(), expected);
        }
    }

    #[test]
    fn negated_literals_are_oriented() {
        let space = space();
        let config = SynthesisConfig::default();
        let hidden = &space.worlds()[0];
        let synthesizer = Synthesizer::new(hidden, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let (mut positive, mut negative) = (0, 0);
        for _ in 0..200 {
            let statement = synthesizer.negated_literal(&mut rng);
            assert_eq!(statement.evaluate(hidden), Ok(true));
            match statement {
                Expression::Literal(literal) if literal.polarity() => positive += 1,
                Expression::Literal(_) => negative += 1,
                other => panic!("{other}"),
            }
        }
        // Three of the nine propositions are true on the hidden world.
        assert!(positive > 0 && negative > positive);
    }

    #[test]
    fn single_world_uses_positive_literals() {
        let space = WorldSpace::build(vec![Dimension::unlabelled("A", 1)]).unwrap();
        let config = SynthesisConfig::default();
        let hidden = &space.worlds()[0];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let statement = synthesize(hidden, &config, &mut rng).unwrap();
            assert_eq!(statement.evaluate(hidden), Ok(true));
        }
    }

    #[test]
    fn empty_budget() {
        let space = space();
        let mut config = SynthesisConfig::default();
        config.max_propositions.value = 0;
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            synthesize(&space.worlds()[0], &config, &mut rng),
            Err(err::SynthesisError::EmptyBudget)
        );
    }

    #[test]
    fn over_budget_combination_keeps_first() {
        let a1 = Expression::literal(Proposition::new(0, 0), true);
        let b1 = Expression::literal(Proposition::new(1, 0), true);
        let combination = Expression::and(a1.clone(), b1);
        assert_eq!(Synthesizer::within_budget(combination.clone(), 2), combination);
        assert_eq!(Synthesizer::within_budget(combination, 1), a1);
    }

    #[test]
    fn pool_reaches_target() {
        let mut config = crate::config::Config::default();
        config.statement_target.value = 30;
        let mut session = GenericSession::from_parts(config, space(), 13, StdRng::seed_from_u64(1)).unwrap();

        assert!(matches!(session.synthesize_pool(), Ok(Some(StatementOk::Fresh(29)))));
        assert_eq!(session.statement_db.len(), 30);
        for statement in session.statement_db.statements() {
            assert_eq!(statement.evaluate(session.hidden_world()), Ok(true));
        }
    }

    #[test]
    fn small_space_exhausts() {
        // Only A1 and -A2 are available as statements with a budget of one.
        let space = WorldSpace::build(vec![Dimension::unlabelled("A", 2)]).unwrap();
        let mut config = crate::config::Config::default();
        config.synthesis.max_propositions.value = 1;
        config.retry_limit.value = 50;
        let mut session = GenericSession::from_parts(config, space, 0, StdRng::seed_from_u64(4)).unwrap();

        assert_eq!(session.synthesize_pool(), Ok(Some(StatementOk::Exhausted)));
        assert_eq!(session.statement_db.len(), 2);
        assert_eq!(session.fresh_statement(), Ok(StatementOk::Exhausted));
        assert!(session.counters.duplicates >= 50);
    }
}
