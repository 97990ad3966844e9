/*!
The world space, aka. every world of some collection of dimensions.

The world space is the Cartesian product of the alternatives of each dimension, built once and read-only thereafter.

# Order

Worlds are enumerated in lexicographic order of their choices, with the last dimension varying fastest.
The position of a world in this order is its [WorldIndex], and indices are stable for the life of the world space.

```rust
# use sleuth::db::world_space::WorldSpace;
# use sleuth::structures::dimension::Dimension;
let space = WorldSpace::build(vec![
    Dimension::unlabelled("A", 3),
    Dimension::unlabelled("B", 3),
    Dimension::unlabelled("C", 3),
])
.unwrap();

assert_eq!(space.len(), 27);
assert_eq!(space.worlds()[0].to_string(), "A1 B1 C1");
assert_eq!(space.worlds()[1].to_string(), "A1 B1 C2");
assert_eq!(space.worlds()[26].to_string(), "A3 B3 C3");

let (index, world) = space.find(&[0, 1, 2]).unwrap();
assert_eq!(index, 5);
assert_eq!(space.index_of(world), Some(5));
```

The world space has no knowledge of which world is hidden.
*/

use std::sync::Arc;

use crate::{
    misc::log::targets,
    structures::{
        dimension::Dimension,
        proposition::{Alternative, DimensionIndex, Proposition},
        world::World,
    },
    types::err,
};

/// The index of a world in a world space.
pub type WorldIndex = usize;

pub struct WorldSpace {
    /// The dimensions, in order.
    dimensions: Vec<Dimension>,

    /// The cardinality of each dimension, shared with each world.
    cardinalities: Arc<[Alternative]>,

    /// Every proposition, ordered by dimension and then alternative.
    propositions: Vec<Proposition>,

    /// Every world, in enumeration order.
    worlds: Vec<World>,
}

impl WorldSpace {
    /// The most worlds a world space may hold.
    pub const MAX_WORLDS: usize = 1 << 24;

    /// Builds the world space of the given dimensions.
    ///
    /// Fails if there are no dimensions, some dimension has no alternatives, or there are more than [MAX_WORLDS](WorldSpace::MAX_WORLDS) worlds.
    pub fn build(dimensions: Vec<Dimension>) -> Result<Self, err::WorldSpaceError> {
        if dimensions.is_empty() {
            return Err(err::WorldSpaceError::NoDimensions);
        }

        let cardinalities: Arc<[Alternative]> = dimensions.iter().map(|d| d.cardinality()).collect();

        let mut world_count: usize = 1;
        for (index, cardinality) in cardinalities.iter().enumerate() {
            if *cardinality == 0 {
                return Err(err::WorldSpaceError::EmptyDimension(index));
            }
            world_count = world_count
                .checked_mul(*cardinality as usize)
                .ok_or(err::WorldSpaceError::TooManyWorlds)?;
        }
        if world_count > Self::MAX_WORLDS {
            return Err(err::WorldSpaceError::TooManyWorlds);
        }

        let propositions = cardinalities
            .iter()
            .enumerate()
            .flat_map(|(dimension, cardinality)| {
                (0..*cardinality).map(move |alternative| {
                    Proposition::new(dimension as DimensionIndex, alternative)
                })
            })
            .collect();

        let mut worlds = Vec::with_capacity(world_count);
        let mut choices = vec![0 as Alternative; cardinalities.len()];

        'enumeration: loop {
            worlds.push(World::from_parts(
                choices.clone().into_boxed_slice(),
                cardinalities.clone(),
            ));

            // Advance the choices as an odometer, last dimension first.
            for position in (0..choices.len()).rev() {
                choices[position] += 1;
                if choices[position] < cardinalities[position] {
                    continue 'enumeration;
                }
                choices[position] = 0;
            }
            break;
        }

        log::debug!(target: targets::WORLD_SPACE, "Built {} worlds over {} dimensions", worlds.len(), dimensions.len());

        Ok(WorldSpace {
            dimensions,
            cardinalities,
            propositions,
            worlds,
        })
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Every proposition, ordered by dimension and then alternative.
    pub fn propositions(&self) -> &[Proposition] {
        &self.propositions
    }

    /// Every world, in enumeration order.
    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn world(&self, index: WorldIndex) -> Option<&World> {
        self.worlds.get(index)
    }

    /// A count of the worlds.
    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    /// Always false, as a world space is built from at least one non-empty dimension.
    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// The world which picks the given alternatives, together with its index, if the alternatives pick a world.
    pub fn find(&self, choices: &[Alternative]) -> Option<(WorldIndex, &World)> {
        if choices.len() != self.cardinalities.len() {
            return None;
        }

        let mut index: WorldIndex = 0;
        for (choice, cardinality) in choices.iter().zip(self.cardinalities.iter()) {
            if choice >= cardinality {
                return None;
            }
            index = index * (*cardinality as usize) + (*choice as usize);
        }

        Some((index, &self.worlds[index]))
    }

    /// The index of a world, if the world belongs to the world space.
    pub fn index_of(&self, world: &World) -> Option<WorldIndex> {
        match self.find(world.choices()) {
            Some((index, found)) if found == world => Some(index),
            _ => None,
        }
    }

    /// Pairs of dimension names and the label of the alternative the world picks from the dimension.
    pub fn describe<'a>(&'a self, world: &'a World) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.dimensions
            .iter()
            .zip(world.choices())
            .map(|(dimension, choice)| (dimension.name(), dimension.label(*choice).unwrap_or("?")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Valuation;

    fn three_by_three() -> WorldSpace {
        WorldSpace::build(vec![
            Dimension::unlabelled("A", 3),
            Dimension::unlabelled("B", 3),
            Dimension::unlabelled("C", 3),
        ])
        .unwrap()
    }

    #[test]
    fn twenty_seven_worlds() {
        let space = three_by_three();
        assert_eq!(space.len(), 27);
        assert_eq!(space.propositions().len(), 9);
    }

    #[test]
    fn one_true_per_dimension() {
        let space = three_by_three();
        for world in space.worlds() {
            for dimension in 0..3 {
                let true_count = (0..3)
                    .filter(|a| world.value_of(Proposition::new(dimension, *a)) == Some(true))
                    .count();
                assert_eq!(true_count, 1);
            }
        }
    }

    #[test]
    fn worlds_are_distinct() {
        let space = three_by_three();
        let distinct = space.worlds().iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), space.len());
    }

    #[test]
    fn indices_are_positions() {
        let space = three_by_three();
        for (index, world) in space.worlds().iter().enumerate() {
            assert_eq!(space.index_of(world), Some(index));
        }
        assert!(space.find(&[3, 0, 0]).is_none());
        assert!(space.find(&[0, 0]).is_none());
    }

    #[test]
    fn uneven_dimensions() {
        let space = WorldSpace::build(vec![Dimension::unlabelled("A", 2), Dimension::unlabelled("B", 5)]).unwrap();
        assert_eq!(space.len(), 10);
        assert_eq!(space.worlds()[9].to_string(), "A2 B5");
    }

    #[test]
    fn rejections() {
        assert_eq!(WorldSpace::build(vec![]).err(), Some(err::WorldSpaceError::NoDimensions));
        assert_eq!(
            WorldSpace::build(vec![Dimension::unlabelled("A", 2), Dimension::unlabelled("B", 0)]).err(),
            Some(err::WorldSpaceError::EmptyDimension(1))
        );

        let threes = (0..40).map(|i| Dimension::unlabelled(format!("D{i}"), 3)).collect();
        assert_eq!(WorldSpace::build(threes).err(), Some(err::WorldSpaceError::TooManyWorlds));

        let twos = (0..25).map(|i| Dimension::unlabelled(format!("D{i}"), 2)).collect();
        assert_eq!(WorldSpace::build(twos).err(), Some(err::WorldSpaceError::TooManyWorlds));
    }

    #[test]
    fn description() {
        let space = WorldSpace::build(vec![
            Dimension::new("suspect", ["plum", "mustard"]),
            Dimension::new("weapon", ["knife", "rope"]),
        ])
        .unwrap();
        let (_, world) = space.find(&[1, 0]).unwrap();
        let description = space.describe(world).collect::<Vec<_>>();
        assert_eq!(description, vec![("suspect", "mustard"), ("weapon", "knife")]);
    }
}
