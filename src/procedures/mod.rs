//! Various procedures over expressions, world spaces, and sessions.
//!
//! Evaluation and search are free functions over plain data.
//! Synthesis of a pool and rounds of search are methods accessed via a session, and primarily placed here for documentation.

pub mod evaluate;
pub mod round;
pub mod search;
pub mod synthesis;
