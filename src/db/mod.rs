//! Databases for holding information relevant to a session.
//!
//! - [The world space](crate::db::world_space)
//!   + Every world of the dimensions of a session, in a stable order. \
//!     Built once, and read-only thereafter.
//! - [The statement database](crate::db::statement)
//!   + The pool of statements, in reveal order, with the count of statements revealed so far. \
//!     Grows monotonically.

pub mod statement;
pub mod world_space;
