/*!
The statement database, aka. the pool of statements of a session.

Statements are stored in the order they will be revealed, and the database tracks how many have been revealed so far.
The revealed statements are always a prefix of the stored statements, and statements are never removed.

Each statement is keyed by its [canonical form](crate::structures::expression::Expression::canonical), and a statement whose canonical form is already stored is refused.

```rust
# use sleuth::db::statement::StatementDB;
# use sleuth::structures::expression::Expression;
# use sleuth::structures::proposition::Proposition;
let mut db = StatementDB::default();
let a1 = Expression::literal(Proposition::new(0, 0), true);

assert!(db.insert(a1.clone()));
assert!(!db.insert(a1));
assert_eq!(db.len(), 1);

assert!(db.revealed().is_empty());
assert!(db.reveal_next().is_some());
assert_eq!(db.revealed().len(), 1);
assert!(db.reveal_next().is_none());
```
*/

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::{misc::log::targets, structures::expression::Expression};

#[derive(Default)]
pub struct StatementDB {
    /// Statements, in reveal order.
    statements: Vec<Expression>,

    /// The canonical form of each statement.
    canonical: HashSet<String>,

    /// A count of the revealed statements.
    revealed: usize,
}

impl StatementDB {
    /// Stores the statement, unless a statement with the same canonical form is already stored.
    ///
    /// Returns true if the statement was stored.
    pub fn insert(&mut self, statement: Expression) -> bool {
        match self.canonical.insert(statement.canonical()) {
            true => {
                log::trace!(target: targets::STATEMENT_DB, "Stored {statement}");
                self.statements.push(statement);
                true
            }
            false => false,
        }
    }

    pub fn contains(&self, statement: &Expression) -> bool {
        self.canonical.contains(&statement.canonical())
    }

    /// A count of all stored statements, revealed or not.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// All stored statements, in reveal order.
    pub fn statements(&self) -> &[Expression] {
        &self.statements
    }

    /// The revealed statements, in the order revealed.
    pub fn revealed(&self) -> &[Expression] {
        &self.statements[..self.revealed]
    }

    /// A count of the statements yet to be revealed.
    pub fn unrevealed_count(&self) -> usize {
        self.statements.len() - self.revealed
    }

    /// Reveals the next statement, if some statement remains to be revealed.
    pub fn reveal_next(&mut self) -> Option<&Expression> {
        let next = self.statements.get(self.revealed)?;
        self.revealed += 1;
        log::trace!(target: targets::STATEMENT_DB, "Revealed {next} as statement {}", self.revealed);
        Some(next)
    }

    /// Shuffles the order of the statements yet to be revealed.
    pub fn shuffle_unrevealed(&mut self, rng: &mut impl Rng) {
        self.statements[self.revealed..].shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::proposition::Proposition;
    use rand::{rngs::StdRng, SeedableRng};

    fn lit(d: u32, a: u32, polarity: bool) -> Expression {
        Expression::literal(Proposition::new(d, a), polarity)
    }

    #[test]
    fn deduplicates_by_canonical_form() {
        let mut db = StatementDB::default();
        assert!(db.insert(lit(0, 0, false)));
        assert!(!db.insert(Expression::not(lit(0, 0, true))));
        assert!(db.insert(lit(0, 0, true)));
        assert_eq!(db.len(), 2);
        assert!(db.contains(&lit(0, 0, true)));
    }

    #[test]
    fn shuffle_keeps_revealed_prefix() {
        let mut db = StatementDB::default();
        for a in 0..10 {
            db.insert(lit(0, a, true));
        }
        db.reveal_next();
        db.reveal_next();
        let prefix = db.revealed().to_vec();

        let mut rng = StdRng::seed_from_u64(7);
        db.shuffle_unrevealed(&mut rng);

        assert_eq!(db.revealed(), prefix.as_slice());
        assert_eq!(db.len(), 10);
        assert_eq!(db.unrevealed_count(), 8);
        for a in 0..10 {
            assert!(db.contains(&lit(0, a, true)));
        }
    }
}
