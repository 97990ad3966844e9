/*!
Dimensions, aka. mutually exclusive categories of propositions.

A dimension has a name and a (non-empty) list of alternatives, and on any world exactly one of the alternatives holds.
For example, a dimension named 'weapon' with alternatives 'knife', 'revolver', and 'candlestick'.

Names and labels are for presentation only.
Within the library a dimension is identified by its index in a [world space](crate::db::world_space), and an alternative by its index in the dimension.

```rust
# use sleuth::structures::dimension::Dimension;
let weapon = Dimension::new("weapon", ["knife", "revolver", "candlestick"]);
assert_eq!(weapon.cardinality(), 3);
assert_eq!(weapon.label(1), Some("revolver"));

let plain = Dimension::unlabelled("C", 3);
assert_eq!(plain.label(2), Some("3"));
```
*/

use crate::structures::proposition::Alternative;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    name: String,
    labels: Vec<String>,
}

impl Dimension {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        Dimension {
            name: name.into(),
            labels: labels.into_iter().map(|label| label.into()).collect(),
        }
    }

    /// A dimension whose alternatives are labelled by their (1-based) index.
    pub fn unlabelled(name: impl Into<String>, cardinality: Alternative) -> Self {
        Dimension {
            name: name.into(),
            labels: (1..=cardinality).map(|i| i.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of alternatives of the dimension.
    pub fn cardinality(&self) -> Alternative {
        self.labels.len() as Alternative
    }

    pub fn label(&self, alternative: Alternative) -> Option<&str> {
        self.labels.get(alternative as usize).map(|label| label.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.as_str())
    }
}
