use super::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSystemConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_velocity_std: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilePotentialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_force: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileWallConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileIntegrationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_per_frame: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRunConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_every: Option<u64>,
}

/// The on-disk TOML configuration. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<FileSystemConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential: Option<FilePotentialConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall: Option<FileWallConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<FileIntegrationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<FileRunConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

impl From<&DefaultsConfig> for FileConfig {
    fn from(d: &DefaultsConfig) -> Self {
        Self {
            system: Some(FileSystemConfig {
                particle_count: Some(d.particle_count),
                box_size: Some(d.box_size),
                mass: Some(d.mass),
                random_seed: d.random_seed,
                initial_velocity_std: Some(d.initial_velocity_std),
            }),
            potential: Some(FilePotentialConfig {
                epsilon: Some(d.epsilon),
                sigma: Some(d.sigma),
                max_force: Some(d.max_force),
            }),
            wall: Some(FileWallConfig {
                thickness: Some(d.wall_thickness),
                stiffness: Some(d.wall_stiffness),
            }),
            integration: Some(FileIntegrationConfig {
                dt: Some(d.dt),
                steps_per_frame: Some(d.steps_per_frame),
            }),
            run: Some(FileRunConfig {
                frames: Some(d.frames),
                record_every: Some(d.record_every),
            }),
        }
    }
}
