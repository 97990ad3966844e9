/*!
Propositions, each the claim that some [dimension](crate::structures::dimension) takes some alternative.

A proposition is a pair of indices: the index of a dimension and the index of an alternative of that dimension.
For example, if the second dimension is a location with alternatives kitchen, library, and conservatory, then the proposition `(1, 1)` is the claim that the location is the library.

Propositions are written as a letter for the dimension followed by the (1-based) index of the alternative.

```rust
# use sleuth::structures::proposition::Proposition;
let in_the_library = Proposition::new(1, 1);
assert_eq!(in_the_library.to_string(), "B2");

let far_along = Proposition::new(27, 0);
assert_eq!(far_along.to_string(), "AB1");
```

The written form is independent of any labels attached to a dimension, and is used for the [canonical form](crate::structures::expression::Expression::canonical) of an expression.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- Within a dimension exactly one proposition is true on any [world](crate::structures::world).
*/

use serde::Serialize;

/// The index of a dimension.
pub type DimensionIndex = u32;

/// The index of an alternative within a dimension.
pub type Alternative = u32;

/// A proposition, aka. an 'atom'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Proposition {
    /// The dimension the proposition belongs to.
    dimension: DimensionIndex,

    /// The alternative of the dimension claimed by the proposition.
    alternative: Alternative,
}

impl Proposition {
    pub fn new(dimension: DimensionIndex, alternative: Alternative) -> Self {
        Proposition {
            dimension,
            alternative,
        }
    }

    pub fn dimension(&self) -> DimensionIndex {
        self.dimension
    }

    pub fn alternative(&self) -> Alternative {
        self.alternative
    }
}

/// The letter(s) of a dimension, in the style of spreadsheet columns: A..Z, AA..AZ, BA..
pub fn dimension_letters(dimension: DimensionIndex) -> String {
    let mut letters = Vec::new();
    let mut remaining = dimension as u64 + 1;
    while remaining > 0 {
        remaining -= 1;
        letters.push((b'A' + (remaining % 26) as u8) as char);
        remaining /= 26;
    }
    letters.iter().rev().collect()
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            dimension_letters(self.dimension),
            self.alternative as u64 + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(dimension_letters(0), "A");
        assert_eq!(dimension_letters(25), "Z");
        assert_eq!(dimension_letters(26), "AA");
        assert_eq!(dimension_letters(51), "AZ");
        assert_eq!(dimension_letters(52), "BA");
    }

    #[test]
    fn ordered_by_dimension_then_alternative() {
        let mut propositions = vec![
            Proposition::new(1, 0),
            Proposition::new(0, 2),
            Proposition::new(0, 1),
        ];
        propositions.sort();
        assert_eq!(
            propositions,
            vec![
                Proposition::new(0, 1),
                Proposition::new(0, 2),
                Proposition::new(1, 0)
            ]
        );
    }
}
