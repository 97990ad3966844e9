use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::Config,
    db::world_space::WorldSpace,
    misc::log::targets,
    structures::dimension::Dimension,
    types::err::ErrorKind,
};

use super::GenericSession;

/// A session which uses [StdRng] as a source of randomness.
pub type Session = GenericSession<StdRng>;

impl Session {
    /// Creates a session from some given configuration, dimensions, and seed.
    ///
    /// The hidden world is chosen uniformly from the world space, using the seeded source of randomness.
    pub fn from_config(config: Config, dimensions: Vec<Dimension>, seed: u64) -> Result<Self, ErrorKind> {
        let world_space = WorldSpace::build(dimensions)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let hidden = rng.random_range(0..world_space.len());
        log::info!(target: targets::SESSION, "Hidden world {hidden} of {}", world_space.len());

        Self::from_parts(config, world_space, hidden, rng)
    }
}
