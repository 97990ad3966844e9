/*!
Worlds, aka. total valuations respecting the dimensions of a world space.

A world picks exactly one alternative from each dimension.
So, the proposition claiming the picked alternative is true, and every other proposition of the dimension is false.

Internally, a world is the list of picked alternatives, indexed by dimension, together with the cardinality of each dimension (shared between all worlds of a [world space](crate::db::world_space)).
This representation makes the one-true-per-dimension invariant hold by construction.

```rust
# use sleuth::db::world_space::WorldSpace;
# use sleuth::structures::dimension::Dimension;
# use sleuth::structures::proposition::Proposition;
# use sleuth::structures::valuation::Valuation;
let space = WorldSpace::build(vec![Dimension::unlabelled("A", 3), Dimension::unlabelled("B", 3)]).unwrap();
let (_, world) = space.find(&[0, 1]).unwrap();

assert_eq!(world.value_of(Proposition::new(0, 0)), Some(true));
assert_eq!(world.value_of(Proposition::new(1, 0)), Some(false));
assert_eq!(world.value_of(Proposition::new(2, 0)), None);
assert_eq!(world.to_string(), "A1 B2");
```

Worlds are immutable once built.
*/

use std::sync::Arc;

use crate::structures::{
    proposition::{Alternative, DimensionIndex, Proposition},
    valuation::Valuation,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct World {
    /// The alternative picked from each dimension.
    choices: Box<[Alternative]>,

    /// The cardinality of each dimension.
    cardinalities: Arc<[Alternative]>,
}

impl World {
    /// A world from the picked alternatives of each dimension.
    ///
    /// The caller guarantees each choice is within the cardinality of the matching dimension.
    pub(crate) fn from_parts(choices: Box<[Alternative]>, cardinalities: Arc<[Alternative]>) -> Self {
        debug_assert_eq!(choices.len(), cardinalities.len());
        debug_assert!(choices.iter().zip(cardinalities.iter()).all(|(c, k)| c < k));
        World {
            choices,
            cardinalities,
        }
    }

    /// The alternative picked from the given dimension, if the dimension is part of the world.
    pub fn choice(&self, dimension: DimensionIndex) -> Option<Alternative> {
        self.choices.get(dimension as usize).copied()
    }

    /// The alternatives picked from each dimension, in dimension order.
    pub fn choices(&self) -> &[Alternative] {
        &self.choices
    }

    /// An iterator over the propositions which are true on the world, one per dimension.
    pub fn true_propositions(&self) -> impl Iterator<Item = Proposition> + '_ {
        self.choices
            .iter()
            .enumerate()
            .map(|(dimension, alternative)| Proposition::new(dimension as DimensionIndex, *alternative))
    }

    /// An iterator through all (Proposition, Value) pairs, in dimension and then alternative order.
    pub fn proposition_value_pairs(&self) -> impl Iterator<Item = (Proposition, bool)> + '_ {
        self.cardinalities
            .iter()
            .enumerate()
            .flat_map(move |(dimension, cardinality)| {
                (0..*cardinality).map(move |alternative| {
                    (
                        Proposition::new(dimension as DimensionIndex, alternative),
                        self.choices[dimension] == alternative,
                    )
                })
            })
    }
}

impl Valuation for World {
    fn value_of(&self, proposition: Proposition) -> Option<bool> {
        let dimension = proposition.dimension() as usize;
        let cardinality = *self.cardinalities.get(dimension)?;
        match proposition.alternative() < cardinality {
            true => Some(self.choices[dimension] == proposition.alternative()),
            false => None,
        }
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let propositions = self
            .true_propositions()
            .map(|proposition| proposition.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", propositions.join(" "))
    }
}
