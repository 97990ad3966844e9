//! Configuration of [search](crate::procedures::search).

/// Limits on a single search.
///
/// The search examines subsets of statements in order of size, and so the number of subsets examined grows exponentially with the number of statements.
/// Without limits a search over a few dozen statements may not finish in reasonable time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// The maximum number of subsets to examine, if any.
    pub subset_limit: Option<usize>,

    /// The maximum time to spend on a search, if any.
    pub time_limit: Option<std::time::Duration>,
}
