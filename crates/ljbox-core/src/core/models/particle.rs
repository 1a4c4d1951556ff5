use nalgebra::{Point3, Vector3};

/// A point particle in the simulation box.
///
/// Particles carry no identity beyond their index in the owning
/// [`ParticleSystem`](super::system::ParticleSystem); the index order is stable for the
/// lifetime of a run and defines the pairing used for force bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in reduced length units.
    pub position: Point3<f64>,
    /// Velocity in reduced length per reduced time.
    pub velocity: Vector3<f64>,
    /// Acceleration from the most recent force evaluation.
    pub acceleration: Vector3<f64>,
}

impl Particle {
    /// Creates a particle at rest with zero acceleration.
    pub fn at_rest(position: Point3<f64>) -> Self {
        Self::new(position, Vector3::zeros())
    }

    /// Creates a particle with the given position and velocity and zero acceleration.
    pub fn new(position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector3::zeros(),
        }
    }

    #[inline]
    pub fn speed_squared(&self) -> f64 {
        self.velocity.norm_squared()
    }
}
