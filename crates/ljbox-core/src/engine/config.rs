use crate::core::forcefield::params::PhysicalParameters;
use crate::core::models::system::ParticleSystem;
use thiserror::Error;

/// Standard deviation of the initial per-component velocity distribution when none is
/// configured explicitly.
pub const DEFAULT_INITIAL_VELOCITY_STD: f64 = 0.1;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value {value} for parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Everything needed to create and run a simulation. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub box_size: f64,
    pub mass: f64,
    /// Seed for the initial positions and velocities; `None` draws from OS entropy.
    pub random_seed: Option<u64>,
    pub initial_velocity_std: f64,
    pub physics: PhysicalParameters,
}

impl SimulationConfig {
    /// Checks every field, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "particle_count",
                value: 0.0,
                reason: "at least one particle is required",
            });
        }
        require_positive("box_size", self.box_size)?;
        require_positive("mass", self.mass)?;
        require_non_negative("initial_velocity_std", self.initial_velocity_std)?;
        validate_physical_parameters(&self.physics, self.box_size)
    }
}

/// Validates run parameters against the box they will be used in.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidParameter`] naming the offending field.
pub fn validate_physical_parameters(
    params: &PhysicalParameters,
    box_size: f64,
) -> Result<(), ConfigError> {
    require_positive("epsilon", params.epsilon)?;
    require_positive("sigma", params.sigma)?;
    require_positive("dt", params.dt)?;
    require_positive("max_force", params.max_force)?;
    require_positive("wall_thickness", params.wall_thickness)?;
    if params.wall_thickness >= box_size / 2.0 {
        return Err(ConfigError::InvalidParameter {
            name: "wall_thickness",
            value: params.wall_thickness,
            reason: "must be smaller than half the box size",
        });
    }
    require_non_negative("wall_stiffness", params.wall_stiffness)?;
    if params.steps_per_frame == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "steps_per_frame",
            value: 0.0,
            reason: "at least one integration step per frame is required",
        });
    }
    Ok(())
}

/// Validates the mass and box of an externally assembled system.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidParameter`] naming `mass` or `box_size`.
pub fn validate_system(system: &ParticleSystem) -> Result<(), ConfigError> {
    require_positive("mass", system.mass())?;
    require_positive("box_size", system.box_size())
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be a positive finite number",
        })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be a non-negative finite number",
        })
    }
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    particle_count: Option<usize>,
    box_size: Option<f64>,
    mass: Option<f64>,
    random_seed: Option<u64>,
    initial_velocity_std: Option<f64>,
    epsilon: Option<f64>,
    sigma: Option<f64>,
    dt: Option<f64>,
    max_force: Option<f64>,
    wall_thickness: Option<f64>,
    wall_stiffness: Option<f64>,
    steps_per_frame: Option<usize>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particle_count(mut self, count: usize) -> Self {
        self.particle_count = Some(count);
        self
    }
    pub fn box_size(mut self, size: f64) -> Self {
        self.box_size = Some(size);
        self
    }
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }
    pub fn random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }
    pub fn initial_velocity_std(mut self, std_dev: f64) -> Self {
        self.initial_velocity_std = Some(std_dev);
        self
    }
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }
    pub fn max_force(mut self, max_force: f64) -> Self {
        self.max_force = Some(max_force);
        self
    }
    pub fn wall_thickness(mut self, thickness: f64) -> Self {
        self.wall_thickness = Some(thickness);
        self
    }
    pub fn wall_stiffness(mut self, stiffness: f64) -> Self {
        self.wall_stiffness = Some(stiffness);
        self
    }
    pub fn steps_per_frame(mut self, steps: usize) -> Self {
        self.steps_per_frame = Some(steps);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let physics = PhysicalParameters {
            epsilon: self
                .epsilon
                .ok_or(ConfigError::MissingParameter("epsilon"))?,
            sigma: self.sigma.ok_or(ConfigError::MissingParameter("sigma"))?,
            dt: self.dt.ok_or(ConfigError::MissingParameter("dt"))?,
            max_force: self
                .max_force
                .ok_or(ConfigError::MissingParameter("max_force"))?,
            wall_thickness: self
                .wall_thickness
                .ok_or(ConfigError::MissingParameter("wall_thickness"))?,
            wall_stiffness: self
                .wall_stiffness
                .ok_or(ConfigError::MissingParameter("wall_stiffness"))?,
            steps_per_frame: self
                .steps_per_frame
                .ok_or(ConfigError::MissingParameter("steps_per_frame"))?,
        };
        let config = SimulationConfig {
            particle_count: self
                .particle_count
                .ok_or(ConfigError::MissingParameter("particle_count"))?,
            box_size: self
                .box_size
                .ok_or(ConfigError::MissingParameter("box_size"))?,
            mass: self.mass.ok_or(ConfigError::MissingParameter("mass"))?,
            random_seed: self.random_seed,
            initial_velocity_std: self
                .initial_velocity_std
                .unwrap_or(DEFAULT_INITIAL_VELOCITY_STD),
            physics,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
            .particle_count(20)
            .box_size(10.0)
            .mass(1.0)
            .random_seed(Some(7))
            .epsilon(1.0)
            .sigma(1.0)
            .dt(0.005)
            .max_force(50.0)
            .wall_thickness(0.5)
            .wall_stiffness(50.0)
            .steps_per_frame(5)
    }

    fn invalid_name(config: &SimulationConfig) -> &'static str {
        match config.validate() {
            Err(ConfigError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn build_with_all_parameters_succeeds() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.particle_count, 20);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.physics.steps_per_frame, 5);
        assert_eq!(config.initial_velocity_std, DEFAULT_INITIAL_VELOCITY_STD);
    }

    #[test]
    fn build_without_seed_leaves_seed_unset() {
        let config = complete_builder().random_seed(None).build().unwrap();
        assert!(config.random_seed.is_none());
    }

    #[test]
    fn build_reports_missing_parameter() {
        let result = SimulationConfigBuilder::new()
            .particle_count(2)
            .box_size(10.0)
            .mass(1.0)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("epsilon")));
    }

    #[test]
    fn build_rejects_invalid_values() {
        let result = complete_builder().dt(-0.1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "dt", .. })
        ));
    }

    #[test]
    fn validate_rejects_each_non_positive_core_parameter() {
        let base = complete_builder().build().unwrap();

        let mut c = base.clone();
        c.particle_count = 0;
        assert_eq!(invalid_name(&c), "particle_count");

        let mut c = base.clone();
        c.mass = 0.0;
        assert_eq!(invalid_name(&c), "mass");

        let mut c = base.clone();
        c.box_size = -1.0;
        assert_eq!(invalid_name(&c), "box_size");

        let mut c = base.clone();
        c.physics.epsilon = 0.0;
        assert_eq!(invalid_name(&c), "epsilon");

        let mut c = base.clone();
        c.physics.sigma = -1.0;
        assert_eq!(invalid_name(&c), "sigma");

        let mut c = base.clone();
        c.physics.dt = 0.0;
        assert_eq!(invalid_name(&c), "dt");

        let mut c = base.clone();
        c.physics.max_force = 0.0;
        assert_eq!(invalid_name(&c), "max_force");

        let mut c = base;
        c.physics.steps_per_frame = 0;
        assert_eq!(invalid_name(&c), "steps_per_frame");
    }

    #[test]
    fn validate_rejects_wall_thickness_of_half_the_box_or_more() {
        let mut config = complete_builder().build().unwrap();
        config.physics.wall_thickness = 5.0;
        assert_eq!(invalid_name(&config), "wall_thickness");
        config.physics.wall_thickness = 4.999;
        assert!(config.validate().is_ok());
        config.physics.wall_thickness = 0.0;
        assert_eq!(invalid_name(&config), "wall_thickness");
    }

    #[test]
    fn validate_accepts_zero_wall_stiffness_but_rejects_negative() {
        let mut config = complete_builder().build().unwrap();
        config.physics.wall_stiffness = 0.0;
        assert!(config.validate().is_ok());
        config.physics.wall_stiffness = -1.0;
        assert_eq!(invalid_name(&config), "wall_stiffness");
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let mut config = complete_builder().build().unwrap();
        config.physics.dt = f64::NAN;
        assert_eq!(invalid_name(&config), "dt");

        let mut config = complete_builder().build().unwrap();
        config.initial_velocity_std = f64::INFINITY;
        assert_eq!(invalid_name(&config), "initial_velocity_std");
    }

    #[test]
    fn validate_system_rejects_bad_mass_and_box() {
        let system = |mass: f64, box_size: f64| ParticleSystem::new(Vec::new(), mass, box_size);

        assert!(validate_system(&system(1.0, 10.0)).is_ok());
        for mass in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                validate_system(&system(mass, 10.0)),
                Err(ConfigError::InvalidParameter { name: "mass", .. })
            ));
        }
        assert!(matches!(
            validate_system(&system(1.0, f64::NAN)),
            Err(ConfigError::InvalidParameter { name: "box_size", .. })
        ));
    }

    #[test]
    fn config_error_messages_name_the_parameter() {
        let err = ConfigError::InvalidParameter {
            name: "sigma",
            value: -1.0,
            reason: "must be a positive finite number",
        };
        assert!(err.to_string().contains("'sigma'"));
        assert_eq!(
            ConfigError::MissingParameter("dt").to_string(),
            "Missing required parameter: dt"
        );
    }
}
