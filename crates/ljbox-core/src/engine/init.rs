use super::config::SimulationConfig;
use super::error::EngineError;
use super::integrator::refresh_accelerations;
use crate::core::forcefield::field::ForceField;
use crate::core::models::particle::Particle;
use crate::core::models::system::ParticleSystem;
use nalgebra::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, instrument};

/// Creates the initial system using the configured seed.
///
/// Without a seed the generator is seeded from OS entropy and the run is not
/// reproducible.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if the configuration is invalid.
pub fn create_system(config: &SimulationConfig) -> Result<ParticleSystem, EngineError> {
    let mut rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    create_system_with_rng(config, &mut rng)
}

/// Creates the initial system drawing from an injected random source.
///
/// Positions are uniform in the box, velocity components are normal with mean zero and
/// standard deviation `initial_velocity_std`. All positions are drawn before any
/// velocity, in particle index order. Accelerations are seeded with one force
/// evaluation so the first integration step is consistent.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if the configuration is invalid, before any random
/// numbers are drawn.
#[instrument(skip_all, fields(particles = config.particle_count))]
pub fn create_system_with_rng<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<ParticleSystem, EngineError> {
    config.validate()?;

    let velocity_distribution = Normal::new(0.0, config.initial_velocity_std)
        .map_err(|e| EngineError::Initialization(format!("velocity distribution: {e}")))?;

    let positions: Vec<Point3<f64>> = (0..config.particle_count)
        .map(|_| {
            Point3::new(
                rng.gen_range(0.0..config.box_size),
                rng.gen_range(0.0..config.box_size),
                rng.gen_range(0.0..config.box_size),
            )
        })
        .collect();

    let particles = positions
        .into_iter()
        .map(|position| {
            let velocity = Vector3::new(
                velocity_distribution.sample(rng),
                velocity_distribution.sample(rng),
                velocity_distribution.sample(rng),
            );
            Particle::new(position, velocity)
        })
        .collect();

    let mut system = ParticleSystem::new(particles, config.mass, config.box_size);
    let field = ForceField::new(&config.physics, config.box_size);
    refresh_accelerations(&mut system, &field);

    debug!(
        box_size = config.box_size,
        seed = ?config.random_seed,
        "Initial particle system created."
    );
    Ok(system)
}
