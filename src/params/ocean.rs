//! Wave population parameters and demo grid layout.

use serde::{Deserialize, Serialize};

/// Basis values the lifecycle manager draws new waves from
///
/// Read on every spawn; changing a field never touches waves already alive.
/// Ranges are not validated here, callers are expected to keep counts and
/// durations non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Number of waves kept alive at once
    pub target_count: usize,

    /// Lifetime basis in seconds (actual lifetime drawn from 0.5x..2x)
    pub lifetime_s: f32,

    /// Steepness basis (0 = sinusoid, 1 = sharpest crest)
    pub steepness: f32,

    /// Phase speed basis (world units per second)
    pub speed: f32,

    /// Wavelength basis (world units, drawn from 0.5x..2x)
    pub length: f32,

    /// Amplitude basis; spawned waves keep `amplitude / length` of the basis
    pub amplitude: f32,

    /// Direction basis in the horizontal plane, need not be normalized
    pub direction: [f32; 2],

    /// Full width of the random direction jitter (degrees)
    pub angle_deg: f32,

    /// Ramp amplitude and steepness in and out instead of popping
    pub fading_enabled: bool,

    /// Draw speed from 0.7x..3x of the basis
    pub speed_variation_enabled: bool,

    /// Length of a fade ramp in seconds
    pub fade_duration_s: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            target_count: 6,
            lifetime_s: 30.0,
            steepness: 0.9,
            speed: 3.0,
            length: 35.0,
            amplitude: 1.0,
            direction: [1.0, 0.0],
            angle_deg: 180.0,
            fading_enabled: true,
            speed_variation_enabled: false,
            fade_duration_s: 5.0,
        }
    }
}

impl SurfaceConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: SurfaceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Flat water plane used by the demo
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Quads per side (e.g., 128 = 16,641 vertices)
    pub grid_size: usize,

    /// Spacing between grid vertices in world units (meters)
    pub grid_spacing_m: f32,

    /// Emit the plane as two halves sharing a duplicated middle column
    pub split_seams: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 128,
            grid_spacing_m: 1.0,
            split_seams: true,
        }
    }
}
