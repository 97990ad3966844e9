/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [world space](crate::db::world_space)
    pub const WORLD_SPACE: &str = "world_space";

    /// Logs related to the [statement database](crate::db::statement)
    pub const STATEMENT_DB: &str = "statement_db";

    /// Logs related to [synthesis](crate::procedures::synthesis)
    pub const SYNTHESIS: &str = "synthesis";

    /// Logs related to [search](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [rounds](crate::procedures::round) of a session
    pub const SESSION: &str = "session";
}
