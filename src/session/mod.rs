/*!
The session --- within which a hidden world is fixed, statements are synthesised, and rounds of search take place.

Strictly, a [GenericSession] and a [Session].

The generic session is generic over the source of randomness, so tests may supply any [Rng](rand::Rng).
[from_config](Session::from_config) is implemented for a session rather than a generic session, to take a seed in place of a source of randomness.

# Example
```rust
# use sleuth::config::Config;
# use sleuth::reports::Report;
# use sleuth::session::Session;
# use sleuth::structures::dimension::Dimension;
let dimensions = vec![
    Dimension::unlabelled("A", 3),
    Dimension::unlabelled("B", 3),
    Dimension::unlabelled("C", 3),
];
let mut the_session = Session::from_config(Config::default(), dimensions, 7).unwrap();

let last_round = the_session.run().unwrap();

if last_round.report == Report::Determined {
    let solution = &last_round.solutions[0];
    assert_eq!(solution.world, the_session.hidden_index());
}
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericSession;
mod specific;
pub use specific::Session;
