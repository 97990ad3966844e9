//! Generic structures, not specific to worlds or statements.

pub mod subsets;
pub mod world_set;
