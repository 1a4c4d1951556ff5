use crate::core::forcefield::field::ForceField;
use crate::core::models::system::ParticleSystem;

/// Velocity-Verlet time stepper.
///
/// One step maps `(p, v, a)` to `(p', v', a')` as
///
/// 1. `p' = p + v·dt + ½·a·dt²`
/// 2. `a' = F(p') / m`
/// 3. `v' = v + ½·(a + a')·dt`
///
/// Forces are always re-evaluated at the new positions before the velocity update; the
/// scheme is second order and symplectic. The stepper holds nothing but `dt`, so the
/// accelerations stored in the system must already match its positions (see
/// [`refresh_accelerations`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityVerlet {
    dt: f64,
}

impl VelocityVerlet {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    pub fn step(&self, system: &mut ParticleSystem, field: &ForceField) {
        let dt = self.dt;
        let half_dt_sq = 0.5 * dt * dt;
        let inv_mass = 1.0 / system.mass();

        for particle in system.particles_mut() {
            particle.position += particle.velocity * dt + particle.acceleration * half_dt_sq;
        }

        let forces = field.compute_forces(&system.positions());

        for (particle, force) in system.particles_mut().iter_mut().zip(forces) {
            let new_acceleration = force * inv_mass;
            particle.velocity += (particle.acceleration + new_acceleration) * (0.5 * dt);
            particle.acceleration = new_acceleration;
        }
    }
}

/// Overwrites every acceleration with `F(p) / m` at the current positions.
///
/// Used once before the first step so that step 1 of the scheme sees a consistent `a`.
pub fn refresh_accelerations(system: &mut ParticleSystem, field: &ForceField) {
    let inv_mass = 1.0 / system.mass();
    let forces = field.compute_forces(&system.positions());
    for (particle, force) in system.particles_mut().iter_mut().zip(forces) {
        particle.acceleration = force * inv_mass;
    }
}
