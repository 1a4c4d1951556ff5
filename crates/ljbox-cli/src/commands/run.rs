use crate::cli::RunArgs;
use crate::config::builder::build_config;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ljbox::{
    core::io::{energy_log::EnergyLogWriter, traits::FrameSink, xyz::XyzTrajectoryWriter},
    engine::{
        error::EngineError,
        progress::{ProgressCallback, ProgressReporter},
        simulation::StopHandle,
    },
    workflows::{self, run::RunSummary},
};
use tracing::{info, warn};

pub async fn run(args: RunArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app_config = build_config(&args)?;

    let stop = StopHandle::new();
    let interrupt = stop.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received. Stopping after the current frame.");
            interrupt.request_stop();
        }
    });

    let progress_handler = CliProgressHandler::new();
    let callback = progress_handler.get_callback();

    println!(
        "Simulating {} particles for {} frames...",
        app_config.simulation.particle_count, app_config.run_options.frames
    );
    info!("Invoking the core run workflow...");

    let summary = tokio::task::spawn_blocking(move || execute(&app_config, stop, callback))
        .await
        .map_err(|e| CliError::Other(anyhow::anyhow!("Simulation task failed: {}", e)))??;
    signal_task.abort();

    print_summary(&summary);
    Ok(())
}

fn execute(
    config: &AppConfig,
    stop: StopHandle,
    callback: ProgressCallback<'static>,
) -> Result<RunSummary> {
    let reporter = ProgressReporter::with_callback(callback);

    let mut trajectory = config
        .trajectory_path
        .as_ref()
        .map(XyzTrajectoryWriter::create)
        .transpose()
        .map_err(EngineError::from)?;
    let mut energy_log = config
        .energy_log_path
        .as_ref()
        .map(EnergyLogWriter::create)
        .transpose()
        .map_err(EngineError::from)?;

    let mut sinks: Vec<&mut dyn FrameSink> = Vec::new();
    if let Some(writer) = trajectory.as_mut() {
        sinks.push(writer);
    }
    if let Some(writer) = energy_log.as_mut() {
        sinks.push(writer);
    }

    let summary = workflows::run::run(
        &config.simulation,
        &config.run_options,
        stop,
        &reporter,
        &mut sinks,
    )?;

    if let Some(path) = &config.trajectory_path {
        info!("Trajectory written to {:?}", path);
    }
    if let Some(path) = &config.energy_log_path {
        info!("Energy log written to {:?}", path);
    }
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    if summary.stopped_early {
        println!(
            "Run interrupted after {} frame(s) (t = {:.4}).",
            summary.frames_completed, summary.simulated_time
        );
    } else {
        println!(
            "Run complete: {} frame(s) (t = {:.4}).",
            summary.frames_completed, summary.simulated_time
        );
    }
    println!(
        "  Energy: initial {:.6}, final {:.6}, max drift {:.3e}",
        summary.initial_energy.total(),
        summary.final_energy.total(),
        summary.max_energy_drift
    );
}
