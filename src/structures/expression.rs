/*!
Expressions, aka. statements, aka. boolean formulas over propositions.

An expression is a finite tree whose leaves are [literals](crate::structures::literal) and whose interior nodes are one of a fixed collection of connectives:

| Variant   | Reading                                    | Written        |
|-----------|--------------------------------------------|----------------|
| `Literal` | the literal                                | `A1`, `-A1`    |
| `Not`     | the negation of a (compound) expression    | `-(A1 & B2)`   |
| `And`     | every conjunct holds                       | `(A1 & B2)`    |
| `Or`      | some disjunct holds                        | `(A1 \| B2)`   |
| `Implies` | the consequent holds if the antecedent does | `(A1 -> B2)`  |

Implication is a variant in its own right, rather than sugar for a disjunction with a negated first disjunct.
So, `(A1 -> B2)` and `(-A1 | B2)` are distinct expressions with the same value on every world.

Each node owns its children, and expressions are compared by structure.
The [canonical form](Expression::canonical) of an expression is the written form, and two expressions have the same canonical form if and only if they are structurally equal.

```rust
# use sleuth::structures::expression::Expression;
# use sleuth::structures::proposition::Proposition;
let a1 = Expression::literal(Proposition::new(0, 0), true);
let b2 = Expression::literal(Proposition::new(1, 1), true);
let c3 = Expression::literal(Proposition::new(2, 2), true);

let clue = Expression::implies(Expression::and(a1.clone(), b2.clone()), Expression::not(c3));
assert_eq!(clue.canonical(), "((A1 & B2) -> -C3)");
assert_eq!(clue.proposition_count(), 3);
assert_eq!(clue.depth(), 2);
```

# Smart constructors

[Expression::not] pushes negation into literals and removes double negations, so `Not` only ever wraps a compound expression when built through the constructors.
This keeps a single canonical form for `-A1`, whether built as a negative literal or as the negation of a positive literal.
*/

use serde::Serialize;

use crate::structures::{literal::Literal, proposition::Proposition};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Expression {
    Literal(Literal),
    Not(Box<Expression>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Implies(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn literal(proposition: Proposition, polarity: bool) -> Self {
        Expression::Literal(Literal::new(proposition, polarity))
    }

    /// The negation of an expression.
    ///
    /// Literals are negated in place, and a double negation is removed.
    pub fn not(expression: Self) -> Self {
        match expression {
            Expression::Literal(literal) => Expression::Literal(literal.negate()),
            Expression::Not(inner) => *inner,
            _ => Expression::Not(Box::new(expression)),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expression::And(vec![lhs, rhs])
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expression::Or(vec![lhs, rhs])
    }

    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Expression::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// The conjunction of any number of expressions.
    pub fn conjunction(conjuncts: impl IntoIterator<Item = Self>) -> Self {
        Expression::And(conjuncts.into_iter().collect())
    }

    /// The disjunction of any number of expressions.
    pub fn disjunction(disjuncts: impl IntoIterator<Item = Self>) -> Self {
        Expression::Or(disjuncts.into_iter().collect())
    }

    /// A count of the leaves of the expression.
    ///
    /// Each occurrence of a proposition is counted, so `(A1 & -A1)` has a count of two.
    pub fn proposition_count(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Not(inner) => inner.proposition_count(),
            Expression::And(es) | Expression::Or(es) => es.iter().map(|e| e.proposition_count()).sum(),
            Expression::Implies(a, b) => a.proposition_count() + b.proposition_count(),
        }
    }

    /// The number of connectives on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Literal(_) => 0,
            Expression::Not(inner) => 1 + inner.depth(),
            Expression::And(es) | Expression::Or(es) => {
                1 + es.iter().map(|e| e.depth()).max().unwrap_or(0)
            }
            Expression::Implies(a, b) => 1 + a.depth().max(b.depth()),
        }
    }

    /// An iterator over the literals at the leaves of the expression, left to right.
    pub fn literals(&self) -> Box<dyn Iterator<Item = &Literal> + '_> {
        match self {
            Expression::Literal(literal) => Box::new(std::iter::once(literal)),
            Expression::Not(inner) => inner.literals(),
            Expression::And(es) | Expression::Or(es) => Box::new(es.iter().flat_map(|e| e.literals())),
            Expression::Implies(a, b) => Box::new(a.literals().chain(b.literals())),
        }
    }

    /// The canonical string form of the expression, used as a key when deduplicating statements.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

fn write_joined(
    f: &mut std::fmt::Formatter<'_>,
    es: &[Expression],
    connective: &str,
    empty: &str,
) -> std::fmt::Result {
    if es.is_empty() {
        return write!(f, "{empty}");
    }
    write!(f, "(")?;
    for (index, e) in es.iter().enumerate() {
        if index > 0 {
            write!(f, " {connective} ")?;
        }
        write!(f, "{e}")?;
    }
    write!(f, ")")
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::Not(inner) => match inner.as_ref() {
                Expression::Literal(literal) => write!(f, "-({literal})"),
                _ => write!(f, "-{inner}"),
            },
            Expression::And(es) => write_joined(f, es, "&", "true"),
            Expression::Or(es) => write_joined(f, es, "|", "false"),
            Expression::Implies(a, b) => write!(f, "({a} -> {b})"),
        }
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(d: u32, a: u32) -> Expression {
        Expression::literal(Proposition::new(d, a), true)
    }

    #[test]
    fn negation_is_pushed_into_literals() {
        let a1 = p(0, 0);
        assert_eq!(Expression::not(a1.clone()).to_string(), "-A1");
        assert_eq!(Expression::not(Expression::not(a1.clone())), a1);
    }

    #[test]
    fn double_negation_is_removed() {
        let conjunction = Expression::and(p(0, 0), p(1, 0));
        let negated = Expression::not(conjunction.clone());
        assert_eq!(negated.to_string(), "-(A1 & B1)");
        assert_eq!(Expression::not(negated), conjunction);
    }

    #[test]
    fn explicit_negation_of_a_literal_is_distinct() {
        let wrapped = Expression::Not(Box::new(p(0, 0)));
        assert_eq!(wrapped.canonical(), "-(A1)");
        assert_ne!(wrapped.canonical(), Expression::not(p(0, 0)).canonical());
    }

    #[test]
    fn implication_is_not_a_disjunction() {
        let implication = Expression::implies(p(0, 0), p(1, 1));
        let disjunction = Expression::or(Expression::not(p(0, 0)), p(1, 1));
        assert_eq!(implication.canonical(), "(A1 -> B2)");
        assert_eq!(disjunction.canonical(), "(-A1 | B2)");
        assert_ne!(implication, disjunction);
    }

    #[test]
    fn counts() {
        let e = Expression::or(
            Expression::and(p(0, 0), Expression::not(p(0, 0))),
            Expression::implies(p(1, 0), p(2, 2)),
        );
        assert_eq!(e.proposition_count(), 4);
        assert_eq!(e.depth(), 2);
        assert_eq!(e.literals().count(), 4);
        assert_eq!(Expression::conjunction(vec![]).proposition_count(), 0);
    }

    #[test]
    fn empty_connectives() {
        assert_eq!(Expression::conjunction(vec![]).to_string(), "true");
        assert_eq!(Expression::disjunction(vec![]).to_string(), "false");
        assert_eq!(Expression::conjunction(vec![p(0, 0)]).to_string(), "(A1)");
    }
}
