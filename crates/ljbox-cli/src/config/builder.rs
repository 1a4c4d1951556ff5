use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use ljbox::engine::config::SimulationConfigBuilder;
use ljbox::workflows::run::RunOptions;
use std::str::FromStr;

pub fn build_config(args: &RunArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_set_values(file_config, &args.set_values)?;

    let system = file_config.system.unwrap_or_default();
    let potential = file_config.potential.unwrap_or_default();
    let wall = file_config.wall.unwrap_or_default();
    let integration = file_config.integration.unwrap_or_default();
    let run = file_config.run.unwrap_or_default();

    let simulation = SimulationConfigBuilder::new()
        .particle_count(
            args.particles
                .or(system.particle_count)
                .unwrap_or(defaults.particle_count),
        )
        .box_size(system.box_size.unwrap_or(defaults.box_size))
        .mass(system.mass.unwrap_or(defaults.mass))
        .random_seed(args.seed.or(system.random_seed).or(defaults.random_seed))
        .initial_velocity_std(
            system
                .initial_velocity_std
                .unwrap_or(defaults.initial_velocity_std),
        )
        .epsilon(potential.epsilon.unwrap_or(defaults.epsilon))
        .sigma(potential.sigma.unwrap_or(defaults.sigma))
        .max_force(potential.max_force.unwrap_or(defaults.max_force))
        .wall_thickness(wall.thickness.unwrap_or(defaults.wall_thickness))
        .wall_stiffness(wall.stiffness.unwrap_or(defaults.wall_stiffness))
        .dt(args.dt.or(integration.dt).unwrap_or(defaults.dt))
        .steps_per_frame(
            args.steps_per_frame
                .or(integration.steps_per_frame)
                .unwrap_or(defaults.steps_per_frame),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let record_interval = args
        .record_every
        .or(run.record_every)
        .unwrap_or(defaults.record_every);
    if record_interval == 0 {
        return Err(CliError::Config(
            "`record-every` must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        simulation,
        run_options: RunOptions {
            frames: args.frames.or(run.frames).unwrap_or(defaults.frames),
            record_interval,
        },
        trajectory_path: args.trajectory.clone(),
        energy_log_path: args.energy_log.clone(),
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "system.particle-count" => {
                config.system.get_or_insert_with(Default::default).particle_count =
                    Some(parse_value(key, value)?);
            }
            "system.box-size" => {
                config.system.get_or_insert_with(Default::default).box_size =
                    Some(parse_value(key, value)?);
            }
            "system.mass" => {
                config.system.get_or_insert_with(Default::default).mass =
                    Some(parse_value(key, value)?);
            }
            "system.random-seed" => {
                config.system.get_or_insert_with(Default::default).random_seed =
                    Some(parse_value(key, value)?);
            }
            "system.initial-velocity-std" => {
                config
                    .system
                    .get_or_insert_with(Default::default)
                    .initial_velocity_std = Some(parse_value(key, value)?);
            }
            "potential.epsilon" => {
                config.potential.get_or_insert_with(Default::default).epsilon =
                    Some(parse_value(key, value)?);
            }
            "potential.sigma" => {
                config.potential.get_or_insert_with(Default::default).sigma =
                    Some(parse_value(key, value)?);
            }
            "potential.max-force" => {
                config.potential.get_or_insert_with(Default::default).max_force =
                    Some(parse_value(key, value)?);
            }
            "wall.thickness" => {
                config.wall.get_or_insert_with(Default::default).thickness =
                    Some(parse_value(key, value)?);
            }
            "wall.stiffness" => {
                config.wall.get_or_insert_with(Default::default).stiffness =
                    Some(parse_value(key, value)?);
            }
            "integration.dt" => {
                config.integration.get_or_insert_with(Default::default).dt =
                    Some(parse_value(key, value)?);
            }
            "integration.steps-per-frame" => {
                config
                    .integration
                    .get_or_insert_with(Default::default)
                    .steps_per_frame = Some(parse_value(key, value)?);
            }
            "run.frames" => {
                config.run.get_or_insert_with(Default::default).frames =
                    Some(parse_value(key, value)?);
            }
            "run.record-every" => {
                config.run.get_or_insert_with(Default::default).record_every =
                    Some(parse_value(key, value)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
