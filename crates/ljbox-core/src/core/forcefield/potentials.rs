/// Radial force factor of the Lennard-Jones 12-6 potential, `-dV/dr`.
///
/// Equal to `24·ε·(2·σ¹²/r¹³ − σ⁶/r⁷)`. Positive values are repulsive. The caller must
/// ensure `dist > 0`; for separations small enough that `(σ/r)¹²` overflows the result is
/// not finite.
#[inline]
pub fn lennard_jones_force_factor(dist: f64, epsilon: f64, sigma: f64) -> f64 {
    let sr6 = (sigma / dist).powi(6);
    24.0 * epsilon * (2.0 * sr6 * sr6 - sr6) / dist
}

/// Lennard-Jones 12-6 pair energy `4·ε·((σ/r)¹² − (σ/r)⁶)`.
#[inline]
pub fn lennard_jones_potential(dist: f64, epsilon: f64, sigma: f64) -> f64 {
    let sr6 = (sigma / dist).powi(6);
    4.0 * epsilon * (sr6 * sr6 - sr6)
}

/// Separation at which the Lennard-Jones force vanishes, `2^(1/6)·σ ≈ 1.12·σ`.
#[inline]
pub fn lennard_jones_equilibrium_distance(sigma: f64) -> f64 {
    2f64.powf(1.0 / 6.0) * sigma
}

/// Magnitude of the one-dimensional soft-wall restoring force.
///
/// Zero while the particle is at least `thickness` away from the face, then grows
/// linearly with the penetration depth `thickness − distance_to_face`. Distances below
/// zero (a particle outside the box) keep growing the force.
#[inline]
pub fn soft_wall_force(distance_to_face: f64, thickness: f64, stiffness: f64) -> f64 {
    if distance_to_face < thickness {
        stiffness * (thickness - distance_to_face)
    } else {
        0.0
    }
}

/// Clamps a signed radial force factor into `[-max_force, max_force]`.
///
/// Applied to a factor that multiplies a unit vector, this caps the norm of the force
/// vector without changing its direction. A NaN factor can only come from `∞ − ∞` in the
/// Lennard-Jones expression at vanishing separation, where repulsion dominates, so it is
/// mapped to the repulsive cap.
#[inline]
pub fn cap_force_factor(factor: f64, max_force: f64) -> f64 {
    if factor.is_nan() {
        return max_force;
    }
    factor.clamp(-max_force, max_force)
}
