use super::particle::Particle;
use nalgebra::{Point3, Vector3};

/// The complete dynamical state of a confined particle cluster.
///
/// A `ParticleSystem` owns an ordered sequence of [`Particle`]s that share a single
/// uniform mass, together with the edge length of the cubic confinement region. The
/// cube spans `[0, box_size]` along every axis. The number of particles is fixed once the
/// system is created; integrators only ever rewrite the per-particle state in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    mass: f64,
    box_size: f64,
}

impl ParticleSystem {
    /// Creates a system from explicit particles.
    ///
    /// No validation is performed here; systems built from a
    /// [`SimulationConfig`](crate::engine::config::SimulationConfig) are validated by
    /// [`create_system`](crate::engine::init::create_system), and hand-built ones by
    /// [`Simulation::from_system`](crate::engine::simulation::Simulation::from_system).
    pub fn new(particles: Vec<Particle>, mass: f64, box_size: f64) -> Self {
        Self {
            particles,
            mass,
            box_size,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn box_size(&self) -> f64 {
        self.box_size
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particle states.
    ///
    /// The slice cannot grow or shrink, so the particle count stays fixed.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Returns a snapshot of all particle positions in index order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Returns `true` if the point lies inside the closed confinement cube.
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point
            .iter()
            .all(|&coordinate| (0.0..=self.box_size).contains(&coordinate))
    }

    pub fn center_of_mass(&self) -> Option<Point3<f64>> {
        if self.particles.is_empty() {
            return None;
        }
        let sum = self
            .particles
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.position.coords);
        Some(Point3::from(sum / self.particles.len() as f64))
    }

    /// Total linear momentum `m·Σv`.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.particles
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.velocity)
            * self.mass
    }
}
