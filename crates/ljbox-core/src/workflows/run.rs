use crate::core::diagnostics::EnergyReport;
use crate::core::io::traits::{FrameRecord, FrameSink};
use crate::core::models::system::ParticleSystem;
use crate::engine::config::{ConfigError, SimulationConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::simulation::{FrameStatus, Simulation, StopHandle};
use tracing::{debug, info, instrument, warn};

/// Controls the length of a run and how often frames are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Number of frames to advance after the initial state.
    pub frames: u64,
    /// Every `record_interval`-th frame is handed to the sinks. Must be at least 1.
    pub record_interval: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 2000,
            record_interval: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub frames_completed: u64,
    pub stopped_early: bool,
    pub initial_energy: EnergyReport,
    pub final_energy: EnergyReport,
    /// Largest absolute deviation of the total energy from its initial value.
    pub max_energy_drift: f64,
    pub simulated_time: f64,
    pub final_system: ParticleSystem,
}

/// Runs a simulation for `options.frames` frames, or until `stop` is triggered.
///
/// Frame 0 (the initial state) is always recorded. Afterwards every
/// `record_interval`-th frame is recorded, as is the last completed frame, whether
/// the run finished or was stopped. Sinks are finished exactly once at the end.
///
/// # Errors
///
/// Returns [`EngineError::Config`] for an invalid configuration or a zero record
/// interval, and [`EngineError::Output`] if any sink fails.
#[instrument(skip_all, name = "run_workflow")]
pub fn run(
    config: &SimulationConfig,
    options: &RunOptions,
    stop: StopHandle,
    reporter: &ProgressReporter,
    sinks: &mut [&mut dyn FrameSink],
) -> Result<RunSummary, EngineError> {
    if options.record_interval == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "record_interval",
            value: 0.0,
            reason: "must be at least 1",
        }
        .into());
    }

    // === Phase 1: Initialization ===
    reporter.report(Progress::PhaseStart {
        name: "Initialization",
    });
    info!(
        particles = config.particle_count,
        frames = options.frames,
        "Initializing particle system."
    );
    let mut sim = Simulation::new(config)?.with_stop_handle(stop);
    let initial_energy = sim.energy();
    debug!(
        kinetic = initial_energy.kinetic,
        potential = initial_energy.potential,
        "Initial energy evaluated."
    );
    record_frame(sinks, 0, &sim, initial_energy)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Dynamics ===
    reporter.report(Progress::PhaseStart { name: "Dynamics" });
    reporter.report(Progress::RunStart {
        total_frames: options.frames,
    });

    let mut final_energy = initial_energy;
    let mut max_energy_drift = 0.0_f64;
    let mut last_recorded = 0;
    let mut stopped_early = false;

    for frame_index in 1..=options.frames {
        if sim.advance_frame(frame_index) == FrameStatus::Stopped {
            stopped_early = true;
            reporter.report(Progress::Message(format!(
                "Stop requested, ending run after {} of {} frames.",
                sim.frames_completed(),
                options.frames
            )));
            break;
        }

        final_energy = sim.energy();
        let drift = (final_energy.total() - initial_energy.total()).abs();
        max_energy_drift = max_energy_drift.max(drift);
        reporter.report(Progress::FrameCompleted {
            frame_index,
            total_energy: final_energy.total(),
        });

        if frame_index % options.record_interval == 0 {
            record_frame(sinks, frame_index, &sim, final_energy)?;
            last_recorded = frame_index;
        }
    }

    let frames_completed = sim.frames_completed();
    if frames_completed != last_recorded {
        record_frame(sinks, frames_completed, &sim, final_energy)?;
    }
    for sink in sinks.iter_mut() {
        sink.finish()?;
    }

    reporter.report(Progress::RunFinish {
        frames_completed,
        stopped_early,
    });
    reporter.report(Progress::PhaseFinish);

    if stopped_early {
        warn!(
            frames_completed,
            requested = options.frames,
            "Run stopped before all frames were completed."
        );
    }
    if let Some(center) = sim.system().center_of_mass() {
        debug!(
            x = center.x,
            y = center.y,
            z = center.z,
            "Final center of mass."
        );
    }
    info!(
        frames_completed,
        final_energy = final_energy.total(),
        max_energy_drift,
        "Run complete."
    );

    Ok(RunSummary {
        frames_completed,
        stopped_early,
        initial_energy,
        final_energy,
        max_energy_drift,
        simulated_time: sim.elapsed_time(),
        final_system: sim.into_system(),
    })
}

fn record_frame(
    sinks: &mut [&mut dyn FrameSink],
    frame_index: u64,
    sim: &Simulation,
    energy: EnergyReport,
) -> Result<(), EngineError> {
    let record = FrameRecord {
        frame_index,
        time: sim.elapsed_time(),
        system: sim.system(),
        energy,
    };
    for sink in sinks.iter_mut() {
        sink.record(&record)?;
    }
    Ok(())
}
