//! Command-line argument parsing for the `strata` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata simulation command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Headless Strata world simulation")]
pub struct CliArgs {
    /// Frames to simulate before exiting.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Number of wandering entities in the demo scene.
    #[arg(long)]
    pub wanderers: Option<u32>,

    /// Seed for grid generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Day/night clock speed.
    #[arg(long)]
    pub time_speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(wanderers) = args.wanderers {
            self.simulation.wanderers = wanderers;
        }
        if let Some(seed) = args.seed {
            self.grid.seed = seed;
        }
        if let Some(speed) = args.time_speed {
            self.lighting.speed = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
