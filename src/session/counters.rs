use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every statement synthesised, including duplicates.
    pub synthesised: usize,

    /// A count of synthesised statements refused as duplicates.
    pub duplicates: usize,

    /// A count of rounds of search.
    pub rounds: usize,

    /// A count of subsets examined, over all rounds.
    pub subsets_examined: usize,

    /// The time taken by search, over all rounds.
    pub search_time: Duration,
}
