//! Command-line argument parsing.

use clap::Parser;
use log::{info, warn};

use crate::params::{CameraPreset, FixedCamera, GridConfig, OrbitCamera, SurfaceConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "gerstner-ocean")]
#[command(about = "Animated Gerstner wave ocean", long_about = None)]
pub struct Args {
    /// Surface parameters in TOML (missing keys fall back to defaults)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of waves kept alive at once
    #[arg(long, value_name = "COUNT")]
    pub waves: Option<usize>,

    /// Pop waves in and out instead of fading
    #[arg(long)]
    pub no_fading: bool,

    /// Randomize each wave's speed around the basis
    #[arg(long)]
    pub speed_variation: bool,

    /// Seed for reproducible wave populations
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Quads per side of the water plane
    #[arg(long, value_name = "QUADS", default_value = "128")]
    pub grid_size: usize,

    /// Camera preset: fixed (default), orbit
    #[arg(long, value_name = "PRESET", default_value = "fixed")]
    pub camera_preset: String,

    /// Run this many simulation frames without a window, then exit
    #[arg(long, value_name = "FRAMES")]
    pub frames: Option<usize>,
}

impl Args {
    /// Build surface parameters from the config file plus flag overrides
    pub fn surface_config(&self) -> Result<SurfaceConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading surface config from {}", path);
                SurfaceConfig::load_from_file(path)?
            }
            None => SurfaceConfig::default(),
        };

        if let Some(waves) = self.waves {
            config.target_count = waves;
        }
        if self.no_fading {
            config.fading_enabled = false;
        }
        if self.speed_variation {
            config.speed_variation_enabled = true;
        }

        Ok(config)
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            grid_size: self.grid_size,
            ..GridConfig::default()
        }
    }

    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "fixed" => CameraPreset::Fixed(FixedCamera::default()),
            "orbit" => CameraPreset::Orbit(OrbitCamera::default()),
            other => {
                warn!("Unknown camera preset '{}', using fixed", other);
                CameraPreset::Fixed(FixedCamera::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gerstner-ocean"]).unwrap();
        assert_eq!(args.surface_config().unwrap(), SurfaceConfig::default());
        assert_eq!(args.grid_config().grid_size, 128);
        assert!(args.frames.is_none());
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Fixed(_)));
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "gerstner-ocean",
            "--waves",
            "12",
            "--no-fading",
            "--speed-variation",
            "--seed",
            "42",
            "--grid-size",
            "32",
            "--camera-preset",
            "Orbit",
            "--frames",
            "10",
        ])
        .unwrap();

        let config = args.surface_config().unwrap();
        assert_eq!(config.target_count, 12);
        assert!(!config.fading_enabled);
        assert!(config.speed_variation_enabled);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.grid_config().grid_size, 32);
        assert_eq!(args.frames, Some(10));
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Orbit(_)));
    }

    #[test]
    fn test_unknown_camera_falls_back_to_fixed() {
        let args = Args::try_parse_from(["gerstner-ocean", "--camera-preset", "drone"]).unwrap();
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Fixed(_)));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args =
            Args::try_parse_from(["gerstner-ocean", "--config", "/nonexistent/ocean.toml"])
                .unwrap();
        assert!(args.surface_config().is_err());
    }
}
