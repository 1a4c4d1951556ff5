//! Read-only energy diagnostics.
//!
//! Nothing here feeds back into the dynamics. The potential energy is evaluated with a
//! clamped minimum separation so that it stays finite and bounded below by `−ε` per pair
//! even when particles are pushed into contact.

use crate::core::forcefield::params::PhysicalParameters;
use crate::core::forcefield::potentials::{
    lennard_jones_equilibrium_distance, lennard_jones_potential,
};
use crate::core::models::system::ParticleSystem;
use serde::Serialize;

/// Kinetic and potential contributions to the energy of a system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergyReport {
    pub fn new(kinetic: f64, potential: f64) -> Self {
        Self { kinetic, potential }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Lennard-Jones energy summed over all unordered pairs.
///
/// Each separation is clamped from below to the equilibrium distance `2^(1/6)·σ` before
/// evaluation, so every pair contributes at least `−ε` and never diverges.
pub fn potential_energy(system: &ParticleSystem, epsilon: f64, sigma: f64) -> f64 {
    let r_min = lennard_jones_equilibrium_distance(sigma);
    let particles = system.particles();
    let mut energy = 0.0;

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dist = (particles[j].position - particles[i].position).norm();
            energy += lennard_jones_potential(dist.max(r_min), epsilon, sigma);
        }
    }

    energy
}

/// `Σ ½·m·|v|²`.
pub fn kinetic_energy(system: &ParticleSystem) -> f64 {
    0.5 * system.mass()
        * system
            .particles()
            .iter()
            .map(|p| p.speed_squared())
            .sum::<f64>()
}

/// Instantaneous temperature in reduced units from equipartition, `T = (2/3)·KE/N`.
///
/// Returns zero for an empty system.
pub fn temperature(system: &ParticleSystem) -> f64 {
    if system.is_empty() {
        return 0.0;
    }
    (2.0 / 3.0) * kinetic_energy(system) / system.len() as f64
}

pub fn energy_report(system: &ParticleSystem, params: &PhysicalParameters) -> EnergyReport {
    EnergyReport {
        kinetic: kinetic_energy(system),
        potential: potential_energy(system, params.epsilon, params.sigma),
    }
}
