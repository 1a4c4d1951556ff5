/// Physical constants that stay fixed for the whole run.
///
/// All quantities are in reduced Lennard-Jones units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Lennard-Jones well depth.
    pub epsilon: f64,
    /// Lennard-Jones characteristic length (zero crossing of the potential).
    pub sigma: f64,
    /// Integration time step.
    pub dt: f64,
    /// Upper bound on the norm of any single pairwise force vector.
    pub max_force: f64,
    /// Distance from a face at which the soft wall starts pushing.
    pub wall_thickness: f64,
    /// Linear spring constant of the soft wall.
    pub wall_stiffness: f64,
    /// Number of integration sub-steps advanced per external frame.
    pub steps_per_frame: usize,
}

impl PhysicalParameters {
    /// Simulated time covered by one frame.
    #[inline]
    pub fn frame_duration(&self) -> f64 {
        self.dt * self.steps_per_frame as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_duration_is_dt_times_steps_per_frame() {
        let params = PhysicalParameters {
            epsilon: 1.0,
            sigma: 1.0,
            dt: 0.005,
            max_force: 50.0,
            wall_thickness: 0.5,
            wall_stiffness: 50.0,
            steps_per_frame: 4,
        };
        assert!((params.frame_duration() - 0.02).abs() < 1e-15);
    }
}
