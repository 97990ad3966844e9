//! A library for synthesising clues about a hidden world, and for finding the smallest collections of clues which determine that world.
//!
//! sleuth models a small deduction puzzle.
//! There are a handful of *dimensions* (who, where, with what…), each with a handful of alternatives, and a *world* picks one alternative from each dimension.
//! One world is hidden.
//! Clues are boolean statements over propositions such as 'the suspect is the first alternative of dimension A', written `A1`, and every clue is true on the hidden world.
//!
//! The library supports two tasks:
//! - [Synthesis](crate::procedures::synthesis) of random statements which are true on the hidden world, within a budget of propositions.
//! - [Search](crate::procedures::search) of a pool of statements for every subset whose statements are together true on exactly one world, and which contains no smaller such subset.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [session].
//!
//! A session is built from a [configuration](crate::config) and a list of [dimensions](crate::structures::dimension).
//! From the dimensions, a [world space](crate::db::world_space) of every world is built, and a hidden world is chosen.
//! Statements synthesised for the hidden world are stored in a [statement database](crate::db::statement), and revealed one per [round](crate::procedures::round).
//! Each round, the revealed statements are searched for determining subsets.
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with propositions, worlds, and expressions.
//! - The [search procedure](crate::procedures::search), for how determining subsets are found, and the limits of the search.
//! - The [synthesis procedure](crate::procedures::synthesis), for how statements are kept true on the hidden world.
//!
//! # Example
//!
//! Statements need not be synthesised, and the search may be used directly.
//!
//! ```rust
//! # use sleuth::config::SearchConfig;
//! # use sleuth::db::world_space::WorldSpace;
//! # use sleuth::procedures::search::find_minimal_determining_subsets;
//! # use sleuth::reports::Report;
//! # use sleuth::structures::dimension::Dimension;
//! # use sleuth::structures::expression::Expression;
//! # use sleuth::structures::proposition::Proposition;
//! let space = WorldSpace::build(vec![
//!     Dimension::new("suspect", ["Plum", "Mustard", "Peacock"]),
//!     Dimension::new("location", ["Kitchen", "Library", "Conservatory"]),
//!     Dimension::new("weapon", ["Knife", "Revolver", "Candlestick"]),
//! ])
//! .unwrap();
//! assert_eq!(space.len(), 27);
//!
//! let p = |d, a| Expression::literal(Proposition::new(d, a), true);
//! let statements = vec![Expression::and(p(0, 0), p(1, 1)), p(2, 2)];
//!
//! let search = find_minimal_determining_subsets(&statements, &space, &SearchConfig::default()).unwrap();
//! assert_eq!(search.report, Report::Determined);
//! assert_eq!(search.solutions[0].indices, vec![0, 1]);
//!
//! let world = space.world(search.solutions[0].world).unwrap();
//! assert_eq!(
//!     space.describe(world).collect::<Vec<_>>(),
//!     vec![("suspect", "Plum"), ("location", "Library"), ("weapon", "Candlestick")]
//! );
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [search](crate::procedures::search) can be filtered with `RUST_LOG=search …` or,
//! - Each synthesised statement can be found with `RUST_LOG=synthesis=trace …`

pub mod procedures;

pub mod config;
pub mod session;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod reports;

pub mod misc;
