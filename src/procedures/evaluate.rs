/*!
Evaluation of expressions on valuations, and filtering of a world space by statements.

# Semantics

- A literal is true if and only if the value of its proposition matches its polarity.
- `Not(e)` is the negation of `e`.
- `And(e1, .., en)` is true if and only if every `ei` is true, and so the empty conjunction is true.
- `Or(e1, .., en)` is true if and only if some `ei` is true, and so the empty disjunction is false.
- `Implies(a, b)` is true if and only if `a` is false or `b` is true.

Conjunctions, disjunctions, and implications short-circuit, left to right.

# Errors

Evaluation fails if a literal whose value is required mentions a proposition without a value on the valuation.
No default value is assumed, as such a proposition indicates a statement built against a different world space.
To check every proposition of a statement, regardless of short-circuiting, use [WorldSpace::check_statement].

```rust
# use sleuth::db::world_space::WorldSpace;
# use sleuth::structures::dimension::Dimension;
# use sleuth::structures::expression::Expression;
# use sleuth::structures::proposition::Proposition;
let space = WorldSpace::build(vec![Dimension::unlabelled("A", 2), Dimension::unlabelled("B", 2)]).unwrap();
let a1 = Expression::literal(Proposition::new(0, 0), true);
let b2 = Expression::literal(Proposition::new(1, 1), true);

let (_, world) = space.find(&[1, 1]).unwrap();
assert_eq!(Expression::implies(a1.clone(), b2.clone()).evaluate(world), Ok(true));
assert_eq!(Expression::and(a1.clone(), b2.clone()).evaluate(world), Ok(false));

let consistent = space.consistent_worlds([&Expression::or(a1, b2)]).unwrap();
assert_eq!(consistent, vec![0, 1, 3]);
```
*/

use crate::{
    db::world_space::{WorldIndex, WorldSpace},
    structures::{expression::Expression, valuation::Valuation},
    types::err,
};

impl Expression {
    /// The value of the expression on the valuation.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Result<bool, err::EvaluationError> {
        match self {
            Expression::Literal(literal) => literal.value_on(valuation),

            Expression::Not(inner) => Ok(!inner.evaluate(valuation)?),

            Expression::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(valuation)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Expression::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(valuation)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Expression::Implies(antecedent, consequent) => match antecedent.evaluate(valuation)? {
                false => Ok(true),
                true => consequent.evaluate(valuation),
            },
        }
    }
}

/// The value of an expression on a valuation.
///
/// Equivalent to [Expression::evaluate].
pub fn evaluate(expression: &Expression, valuation: &impl Valuation) -> Result<bool, err::EvaluationError> {
    expression.evaluate(valuation)
}

impl WorldSpace {
    /// Ok if every proposition mentioned in the statement belongs to the world space.
    pub fn check_statement(&self, statement: &Expression) -> Result<(), err::EvaluationError> {
        let Some(some_world) = self.worlds().first() else {
            return Ok(());
        };

        for literal in statement.literals() {
            if some_world.value_of(literal.proposition()).is_none() {
                return Err(err::EvaluationError::UnknownProposition(literal.proposition()));
            }
        }
        Ok(())
    }

    /// The indices of the worlds on which every given statement is true, in world order.
    pub fn consistent_worlds<'a, I>(&self, statements: I) -> Result<Vec<WorldIndex>, err::EvaluationError>
    where
        I: IntoIterator<Item = &'a Expression>,
        I::IntoIter: Clone,
    {
        self.consistent_worlds_bounded(statements, usize::MAX)
    }

    /// As [consistent_worlds](WorldSpace::consistent_worlds), though stops after finding `bound` consistent worlds.
    pub fn consistent_worlds_bounded<'a, I>(
        &self,
        statements: I,
        bound: usize,
    ) -> Result<Vec<WorldIndex>, err::EvaluationError>
    where
        I: IntoIterator<Item = &'a Expression>,
        I::IntoIter: Clone,
    {
        let statements = statements.into_iter();
        let mut consistent = Vec::default();

        'world_loop: for (index, world) in self.worlds().iter().enumerate() {
            if consistent.len() >= bound {
                break;
            }
            for statement in statements.clone() {
                if !statement.evaluate(world)? {
                    continue 'world_loop;
                }
            }
            consistent.push(index);
        }

        Ok(consistent)
    }
}
