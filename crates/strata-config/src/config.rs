//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Frame pacing and demo population.
    pub simulation: SimulationConfig,
    /// Camera controller tuning.
    pub camera: CameraConfig,
    /// Day/night clock.
    pub lighting: LightingConfig,
    /// Demo grid layout and random seed.
    pub grid: GridConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds per simulated frame.
    pub frame_time: f64,
    /// Fixed integration rate in Hz.
    pub fixed_hz: f64,
    /// Frames to run before exiting.
    pub frames: u64,
    /// Number of wandering entities spawned in the demo scene.
    pub wanderers: u32,
    /// Top speed of a wanderer in units per second.
    pub wander_speed: f32,
}

/// Camera controller tuning. Mirrors the camera crate's settings resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub acceleration: f32,
    pub deceleration: f32,
    pub angular_acceleration: f32,
    pub angular_deceleration: f32,
    pub max_angular_speed: f32,
    pub gear_factor: f32,
    /// Gear the demo camera starts in.
    pub start_gear: f32,
    /// Keep the camera above `max_y`.
    pub limit_y: bool,
    pub max_y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Clock value at startup; `0.5` is noon.
    pub start_time: f32,
    /// Clock units per second. One full day is two units.
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Seed for tile jitter and template choice.
    pub seed: u64,
    /// Tiles along each horizontal axis of the demo grid.
    pub count: u32,
    pub spacing: f32,
    /// Jitter width applied to each tile on both horizontal axes.
    pub variation: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log cell directory statistics every N frames (0 = only at exit).
    pub report_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_time: 1.0 / 60.0,
            fixed_hz: 60.0,
            frames: 600,
            wanderers: 64,
            wander_speed: 40.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            acceleration: 40.0,
            deceleration: 0.3,
            angular_acceleration: 5.0,
            angular_deceleration: 2.0,
            max_angular_speed: 1.5,
            gear_factor: 5.0,
            start_gear: 1.0,
            limit_y: false,
            max_y: 0.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            start_time: 0.5,
            speed: 0.02,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            count: 8,
            spacing: 64.0,
            variation: 8.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_interval: 0,
        }
    }
}

/// `<platform config dir>/strata`, or `None` when the platform has no
/// config directory.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("strata"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Re-read the file. Returns `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
