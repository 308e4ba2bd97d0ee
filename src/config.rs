/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub elevator: ElevatorConfig,
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    pub n_floors: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DispatcherConfig {
    #[serde(default = "default_max_sweep_steps")]
    pub max_sweep_steps: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        DispatcherConfig {
            max_sweep_steps: default_max_sweep_steps(),
        }
    }
}

fn default_max_sweep_steps() -> usize {
    64
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("elevator.n_floors must be at least 1")]
    NoFloors,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    if config.elevator.n_floors == 0 {
        return Err(ConfigError::NoFloors);
    }
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
