use crate::{
    config::Config,
    db::{
        statement::StatementDB,
        world_space::{WorldIndex, WorldSpace},
    },
    structures::world::World,
    types::err::{self, ErrorKind},
};

use super::Counters;

/// A generic session, parameratised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use rand::{rngs::StdRng, SeedableRng};
/// # use sleuth::config::Config;
/// # use sleuth::db::world_space::WorldSpace;
/// # use sleuth::session::GenericSession;
/// # use sleuth::structures::dimension::Dimension;
/// let space = WorldSpace::build(vec![Dimension::unlabelled("A", 2)]).unwrap();
/// let session = GenericSession::from_parts(Config::default(), space, 1, StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(session.hidden_world().to_string(), "A2");
/// ```
pub struct GenericSession<R: rand::Rng> {
    /// The configuration of a session.
    pub config: Config,

    /// Counters related to a session.
    pub counters: Counters,

    /// The world space.
    /// See [db::world_space](crate::db::world_space) for details.
    pub world_space: WorldSpace,

    /// The statement database.
    /// See [db::statement](crate::db::statement) for details.
    pub statement_db: StatementDB,

    /// The index of the hidden world in the world space.
    hidden: WorldIndex,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericSession<R> {
    /// A session from a world space with a given hidden world.
    ///
    /// Fails if the configuration is invalid, or if the hidden world is not in the world space.
    pub fn from_parts(config: Config, world_space: WorldSpace, hidden: WorldIndex, rng: R) -> Result<Self, ErrorKind> {
        config.validate()?;
        if hidden >= world_space.len() {
            return Err(ErrorKind::from(err::StateError::NoHiddenWorld));
        }

        Ok(GenericSession {
            config,
            counters: Counters::default(),
            world_space,
            statement_db: StatementDB::default(),
            hidden,
            rng,
        })
    }

    /// The index of the hidden world.
    pub fn hidden_index(&self) -> WorldIndex {
        self.hidden
    }

    /// The hidden world.
    pub fn hidden_world(&self) -> &World {
        &self.world_space.worlds()[self.hidden]
    }
}
