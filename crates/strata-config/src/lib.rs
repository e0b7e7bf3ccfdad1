//! Configuration for the Strata simulation.
//!
//! Settings persist to disk as `config.ron`. Every section falls back to its
//! defaults when missing, so older files keep loading as fields are added.
//! Command-line flags override whatever the file says.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, CameraConfig, Config, DebugConfig, GridConfig, LightingConfig, SimulationConfig,
    default_config_dir,
};
pub use error::ConfigError;
