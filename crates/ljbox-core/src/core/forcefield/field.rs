use super::params::PhysicalParameters;
use super::potentials::{cap_force_factor, lennard_jones_force_factor, soft_wall_force};
use nalgebra::{Point3, Vector3};

/// Evaluates the net force on every particle from positions alone.
///
/// The field combines capped Lennard-Jones pair forces with soft-wall confinement. It
/// only reads geometry; masses, velocities and accelerations are the integrator's
/// business. Every method is side-effect-free and returns a freshly allocated array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceField {
    epsilon: f64,
    sigma: f64,
    max_force: f64,
    wall_thickness: f64,
    wall_stiffness: f64,
    box_size: f64,
}

impl ForceField {
    pub fn new(params: &PhysicalParameters, box_size: f64) -> Self {
        Self {
            epsilon: params.epsilon,
            sigma: params.sigma,
            max_force: params.max_force,
            wall_thickness: params.wall_thickness,
            wall_stiffness: params.wall_stiffness,
            box_size,
        }
    }

    /// Lennard-Jones force exerted across the separation `r_vec`.
    ///
    /// The result acts on the particle at the head of `r_vec` and is caused by the
    /// particle at its tail; it is directed along `r_vec` when repulsive. Its norm is
    /// capped at `max_force` with direction preserved. A zero separation yields the zero
    /// vector.
    pub fn pairwise_force(&self, r_vec: &Vector3<f64>) -> Vector3<f64> {
        let scale = r_vec.amax();
        if scale == 0.0 {
            return Vector3::zeros();
        }
        // Normalize by the largest component first so the norm of a tiny separation
        // cannot underflow to zero.
        let scaled = r_vec / scale;
        let scaled_norm = scaled.norm();
        let factor = lennard_jones_force_factor(scale * scaled_norm, self.epsilon, self.sigma);
        scaled * (cap_force_factor(factor, self.max_force) / scaled_norm)
    }

    /// Sum of all pairwise Lennard-Jones forces, one evaluation per unordered pair.
    ///
    /// Each pair contributes equal and opposite forces, so the returned vectors always
    /// sum to zero.
    pub fn compute_pairwise_forces(&self, positions: &[Point3<f64>]) -> Vec<Vector3<f64>> {
        let n = positions.len();
        let mut forces = vec![Vector3::zeros(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let force_on_i = self.pairwise_force(&(positions[i] - positions[j]));
                forces[i] += force_on_i;
                forces[j] -= force_on_i;
            }
        }

        forces
    }

    /// Soft-wall confinement forces, applied independently along each axis.
    ///
    /// A coordinate closer than `wall_thickness` to the near face (0) is pushed in the
    /// positive direction; one closer than `wall_thickness` to the far face (`box_size`)
    /// is pushed in the negative direction.
    pub fn compute_wall_forces(&self, positions: &[Point3<f64>]) -> Vec<Vector3<f64>> {
        positions
            .iter()
            .map(|position| {
                let mut force = Vector3::zeros();
                for axis in 0..3 {
                    let coordinate = position[axis];
                    force[axis] +=
                        soft_wall_force(coordinate, self.wall_thickness, self.wall_stiffness);
                    force[axis] -= soft_wall_force(
                        self.box_size - coordinate,
                        self.wall_thickness,
                        self.wall_stiffness,
                    );
                }
                force
            })
            .collect()
    }

    /// Net force on every particle: capped pair forces plus wall forces.
    ///
    /// The cap bounds each pairwise contribution only; wall forces are added afterwards
    /// and are not capped.
    pub fn compute_forces(&self, positions: &[Point3<f64>]) -> Vec<Vector3<f64>> {
        let mut forces = self.compute_pairwise_forces(positions);
        for (force, wall) in forces.iter_mut().zip(self.compute_wall_forces(positions)) {
            *force += wall;
        }
        forces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::potentials::lennard_jones_equilibrium_distance;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-9;

    fn params(max_force: f64, wall_stiffness: f64) -> PhysicalParameters {
        PhysicalParameters {
            epsilon: 1.0,
            sigma: 1.0,
            dt: 0.005,
            max_force,
            wall_thickness: 0.5,
            wall_stiffness,
            steps_per_frame: 1,
        }
    }

    fn field() -> ForceField {
        ForceField::new(&params(1.0e6, 20.0), 10.0)
    }

    fn cluster() -> Vec<Point3<f64>> {
        vec![
            Point3::new(4.5, 5.0, 5.0),
            Point3::new(5.6, 5.1, 4.9),
            Point3::new(5.0, 6.0, 5.2),
            Point3::new(4.2, 4.1, 5.8),
            Point3::new(6.1, 4.4, 4.3),
        ]
    }

    #[test]
    fn pairwise_force_is_antisymmetric() {
        let field = field();
        let positions = cluster();
        for i in 0..positions.len() {
            for j in 0..positions.len() {
                if i == j {
                    continue;
                }
                let forward = field.pairwise_force(&(positions[j] - positions[i]));
                let backward = field.pairwise_force(&(positions[i] - positions[j]));
                assert_relative_eq!(forward, -backward, epsilon = TOLERANCE);
            }
        }
    }

    #[test]
    fn pairwise_force_is_zero_for_coincident_particles() {
        assert_eq!(field().pairwise_force(&Vector3::zeros()), Vector3::zeros());
    }

    #[test]
    fn pairwise_force_is_repulsive_below_equilibrium() {
        let force = field().pairwise_force(&Vector3::new(0.9, 0.0, 0.0));
        assert!(force.x > 0.0);
        assert_eq!(force.y, 0.0);
        assert_eq!(force.z, 0.0);
    }

    #[test]
    fn pairwise_force_is_attractive_beyond_equilibrium() {
        let force = field().pairwise_force(&Vector3::new(0.0, 2.0, 0.0));
        assert!(force.y < 0.0);
    }

    #[test]
    fn pairwise_force_vanishes_at_equilibrium() {
        let r_eq = lennard_jones_equilibrium_distance(1.0);
        let force = field().pairwise_force(&Vector3::new(0.0, 0.0, r_eq));
        assert!(force.norm() < TOLERANCE);
    }

    #[test]
    fn pairwise_force_norm_never_exceeds_cap_as_separation_shrinks() {
        let cap = 50.0;
        let field = ForceField::new(&params(cap, 0.0), 10.0);
        let direction = Vector3::new(1.0, -2.0, 0.5).normalize();
        let mut dist = 2.0;
        while dist > 1e-300 {
            let force = field.pairwise_force(&(direction * dist));
            assert!(force.iter().all(|c| c.is_finite()), "dist = {dist:e}");
            assert!(force.norm() <= cap * (1.0 + 1e-12), "dist = {dist:e}");
            dist *= 0.5;
        }
    }

    #[test]
    fn underflowing_separation_is_still_pushed_apart_at_the_cap() {
        let cap = 50.0;
        let field = ForceField::new(&params(cap, 0.0), 10.0);
        let r_vec = Vector3::new(1e-170, 1e-170, 0.0);
        assert_eq!(r_vec.norm(), 0.0);

        let force = field.pairwise_force(&r_vec);
        assert_relative_eq!(force.norm(), cap, epsilon = 1e-9);
        assert_relative_eq!(force.x, force.y, epsilon = 1e-9);
        assert!(force.x > 0.0);
        assert_eq!(force.z, 0.0);
    }

    #[test]
    fn capping_preserves_direction() {
        let cap = 50.0;
        let field = ForceField::new(&params(cap, 0.0), 10.0);
        let r_vec = Vector3::new(0.1, 0.2, -0.2);
        let force = field.pairwise_force(&r_vec);
        assert_relative_eq!(force.norm(), cap, epsilon = 1e-9);
        assert_relative_eq!(force.normalize(), r_vec.normalize(), epsilon = 1e-12);
    }

    #[test]
    fn pairwise_forces_sum_to_zero() {
        let forces = field().compute_pairwise_forces(&cluster());
        let total = forces.iter().fold(Vector3::zeros(), |acc, f| acc + f);
        assert!(total.norm() < 1e-9, "net internal force = {total:?}");
    }

    #[test]
    fn pairwise_forces_sum_to_zero_when_capped() {
        let field = ForceField::new(&params(5.0, 0.0), 10.0);
        let mut positions = cluster();
        positions.push(Point3::new(4.55, 5.0, 5.0));
        positions.push(Point3::new(4.55, 5.0, 5.0));
        let forces = field.compute_pairwise_forces(&positions);
        let total = forces.iter().fold(Vector3::zeros(), |acc, f| acc + f);
        assert!(total.norm() < 1e-9);
    }

    #[test]
    fn single_particle_has_no_pairwise_force() {
        let forces = field().compute_pairwise_forces(&[Point3::new(5.0, 5.0, 5.0)]);
        assert_eq!(forces, vec![Vector3::zeros()]);
    }

    #[test]
    fn wall_forces_are_zero_in_the_interior() {
        let forces = field().compute_wall_forces(&[Point3::new(5.0, 0.5, 9.5)]);
        assert_eq!(forces, vec![Vector3::zeros()]);
    }

    #[test]
    fn wall_force_near_low_face_pushes_in_positive_direction() {
        let forces = field().compute_wall_forces(&[Point3::new(0.2, 5.0, 5.0)]);
        // 20 * (0.5 - 0.2)
        assert_relative_eq!(forces[0], Vector3::new(6.0, 0.0, 0.0), epsilon = TOLERANCE);
    }

    #[test]
    fn wall_force_near_high_face_pushes_in_negative_direction() {
        let forces = field().compute_wall_forces(&[Point3::new(5.0, 5.0, 9.9)]);
        // 20 * (0.5 - 0.1)
        assert_relative_eq!(forces[0], Vector3::new(0.0, 0.0, -8.0), epsilon = TOLERANCE);
    }

    #[test]
    fn corner_particle_receives_independent_push_on_every_axis() {
        let forces = field().compute_wall_forces(&[Point3::new(0.1, 9.8, 0.4)]);
        assert_relative_eq!(forces[0], Vector3::new(8.0, -6.0, 2.0), epsilon = TOLERANCE);
    }

    #[test]
    fn wall_force_grows_with_penetration_depth() {
        let field = field();
        let shallow = field.compute_wall_forces(&[Point3::new(0.4, 5.0, 5.0)])[0].x;
        let deep = field.compute_wall_forces(&[Point3::new(0.1, 5.0, 5.0)])[0].x;
        let outside = field.compute_wall_forces(&[Point3::new(-0.2, 5.0, 5.0)])[0].x;
        assert!(0.0 < shallow && shallow < deep && deep < outside);
    }

    #[test]
    fn zero_stiffness_disables_walls() {
        let field = ForceField::new(&params(1.0e6, 0.0), 10.0);
        let forces = field.compute_wall_forces(&[Point3::new(0.0, 10.0, 0.25)]);
        assert_eq!(forces, vec![Vector3::zeros()]);
    }

    #[test]
    fn compute_forces_is_sum_of_pairwise_and_wall_contributions() {
        let field = field();
        let mut positions = cluster();
        positions.push(Point3::new(0.3, 9.7, 5.0));

        let pairwise = field.compute_pairwise_forces(&positions);
        let walls = field.compute_wall_forces(&positions);
        let total = field.compute_forces(&positions);

        for k in 0..positions.len() {
            assert_relative_eq!(total[k], pairwise[k] + walls[k], epsilon = TOLERANCE);
        }
    }

    #[test]
    fn wall_forces_are_not_subject_to_pairwise_cap() {
        let field = ForceField::new(&params(1.0, 100.0), 10.0);
        let forces = field.compute_forces(&[Point3::new(0.0, 5.0, 5.0)]);
        assert_relative_eq!(forces[0].x, 50.0, epsilon = TOLERANCE);
    }
}
