use super::config::{SimulationConfig, validate_physical_parameters, validate_system};
use super::error::EngineError;
use super::init::{create_system, create_system_with_rng};
use super::integrator::{VelocityVerlet, refresh_accelerations};
use crate::core::diagnostics::{EnergyReport, energy_report};
use crate::core::forcefield::field::ForceField;
use crate::core::forcefield::params::PhysicalParameters;
use crate::core::models::system::ParticleSystem;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// Shared cooperative cancellation flag.
///
/// Clones observe the same flag, so a handle can be moved into a signal handler or
/// another thread while the session keeps its own copy. The flag is only ever read at
/// frame boundaries.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Outcome of a call to [`Simulation::advance_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// All sub-steps of the frame were integrated.
    Advanced,
    /// A stop was requested before the frame began; the system is unchanged.
    Stopped,
}

/// A running simulation session.
///
/// The session owns the particle system for the whole run. External drivers call
/// [`advance_frame`](Self::advance_frame) once per rendered or recorded frame and read
/// the updated state back through [`system`](Self::system).
#[derive(Debug)]
pub struct Simulation {
    system: ParticleSystem,
    params: PhysicalParameters,
    field: ForceField,
    integrator: VelocityVerlet,
    stop: StopHandle,
    frames_completed: u64,
    steps_completed: u64,
}

impl Simulation {
    /// Creates a session with a freshly initialized system.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration is invalid.
    pub fn new(config: &SimulationConfig) -> Result<Self, EngineError> {
        let system = create_system(config)?;
        Self::from_system(system, config.physics)
    }

    /// Creates a session whose initial state is drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration is invalid.
    pub fn with_rng<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Result<Self, EngineError> {
        let system = create_system_with_rng(config, rng)?;
        Self::from_system(system, config.physics)
    }

    /// Wraps an existing system, for drivers that place particles themselves.
    ///
    /// Accelerations are recomputed from the current positions so the first step is
    /// consistent regardless of what the caller stored in them.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the system's mass or box is not a positive
    /// finite number, or if the parameters are invalid for the box.
    pub fn from_system(
        mut system: ParticleSystem,
        params: PhysicalParameters,
    ) -> Result<Self, EngineError> {
        validate_system(&system)?;
        validate_physical_parameters(&params, system.box_size())?;
        let field = ForceField::new(&params, system.box_size());
        refresh_accelerations(&mut system, &field);

        Ok(Self {
            system,
            params,
            field,
            integrator: VelocityVerlet::new(params.dt),
            stop: StopHandle::new(),
            frames_completed: 0,
            steps_completed: 0,
        })
    }

    /// Replaces the session's stop flag with one shared with an external driver.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn request_stop(&self) {
        self.stop.request_stop();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop.is_stop_requested()
    }

    /// Advances the system by one frame of `steps_per_frame` velocity-Verlet steps.
    ///
    /// The stop flag is checked once, before any integration. A stop requested while
    /// the frame is running takes effect on the next call.
    pub fn advance_frame(&mut self, frame_index: u64) -> FrameStatus {
        if self.stop.is_stop_requested() {
            trace!(frame_index, "Stop requested, frame skipped.");
            return FrameStatus::Stopped;
        }

        for _ in 0..self.params.steps_per_frame {
            self.integrator.step(&mut self.system, &self.field);
        }
        self.steps_completed += self.params.steps_per_frame as u64;
        self.frames_completed += 1;

        trace!(
            frame_index,
            time = self.elapsed_time(),
            "Frame advanced."
        );
        FrameStatus::Advanced
    }

    #[inline]
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn into_system(self) -> ParticleSystem {
        self.system
    }

    #[inline]
    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    #[inline]
    pub fn force_field(&self) -> &ForceField {
        &self.field
    }

    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    /// Simulated time elapsed since the session was created.
    pub fn elapsed_time(&self) -> f64 {
        self.steps_completed as f64 * self.params.dt
    }

    pub fn energy(&self) -> EnergyReport {
        energy_report(&self.system, &self.params)
    }
}
