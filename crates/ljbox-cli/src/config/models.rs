use ljbox::engine::config::SimulationConfig;
use ljbox::workflows::run::RunOptions;
use std::path::PathBuf;

/// Fully resolved settings for one `run` invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub run_options: RunOptions,
    pub trajectory_path: Option<PathBuf>,
    pub energy_log_path: Option<PathBuf>,
}
