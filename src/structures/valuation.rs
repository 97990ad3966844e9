/*!
A (total) function from propositions to truth values.

The valuation trait is the single point of contact between [expressions](crate::structures::expression) and whatever assigns values to propositions.
The canonical implementation is a [World](crate::structures::world::World), though any lookup from propositions to booleans will do.

```rust
# use std::collections::HashMap;
# use sleuth::structures::proposition::Proposition;
# use sleuth::structures::valuation::Valuation;
let p = Proposition::new(0, 0);
let q = Proposition::new(0, 1);
let valuation = HashMap::from([(p, true)]);

assert_eq!(valuation.value_of(p), Some(true));
assert_eq!(valuation.value_of(q), None);
```

A proposition without a value is not read as false.
Instead, evaluation of an expression which mentions such a proposition fails with an [UnknownProposition](crate::types::err::EvaluationError::UnknownProposition) error.
*/

use std::collections::HashMap;

use crate::structures::proposition::Proposition;

/// Something which stores the value of a proposition, or otherwise the information that the proposition has no value.
pub trait Valuation {
    /// The value of a proposition under the valuation, or otherwise nothing.
    fn value_of(&self, proposition: Proposition) -> Option<bool>;
}

impl Valuation for HashMap<Proposition, bool> {
    fn value_of(&self, proposition: Proposition) -> Option<bool> {
        self.get(&proposition).copied()
    }
}

impl<V: Valuation> Valuation for &V {
    fn value_of(&self, proposition: Proposition) -> Option<bool> {
        (*self).value_of(proposition)
    }
}
