//! Camera placement for the demo viewer.

/// Stationary camera
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (meters)
    pub position: [f32; 3],

    /// Look-at target (meters)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 12.0, -60.0], // Low over the water, back from the plane center
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera circling the plane center at constant height
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal distance from the target (meters)
    pub radius_m: f32,

    /// Height above the rest water level (meters)
    pub height_m: f32,

    /// Angular speed (radians per second)
    pub angular_speed_rad_per_s: f32,

    /// Look-at target (meters)
    pub target: [f32; 3],
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius_m: 70.0,
            height_m: 20.0,
            angular_speed_rad_per_s: 0.05,
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: stationary view of the plane
    Fixed(FixedCamera),

    /// Orbit preset: slow circle around the plane center
    Orbit(OrbitCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Fixed(FixedCamera::default())
    }
}
