//! Gerstner wave superposition.
//!
//! Pure functions of (surface point, time, wave set). The solver works in an
//! XY-horizontal, Z-up frame; [`SurfaceSample::to_y_up`] converts a result to
//! the mesh convention (XZ horizontal, Y up).

use glam::{Vec2, Vec3};

use super::wave::WaveDescriptor;

/// Displaced position and (unnormalized) normal at one surface point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub position: Vec3,
    pub normal: Vec3,
}

impl SurfaceSample {
    /// Swap the vertical axis from Z to Y
    pub fn to_y_up(self) -> Self {
        Self {
            position: Vec3::new(self.position.x, self.position.z, self.position.y),
            normal: Vec3::new(self.normal.x, self.normal.z, self.normal.y),
        }
    }
}

/// Displacement contributed by one wave
///
/// # Arguments
/// * `p` - Surface point in the horizontal plane
/// * `t` - Elapsed time in seconds
/// * `q` - Normalized steepness
/// * `a` - Amplitude
/// * `dir` - Travel direction
/// * `w` - Angular wave number
/// * `phi` - Phase rate
pub fn wave_position(p: Vec2, t: f32, q: f32, a: f32, dir: Vec2, w: f32, phi: f32) -> Vec3 {
    let inner = w * dir.dot(p) + phi * t;
    let (sin, cos) = inner.sin_cos();

    Vec3::new(q * a * dir.x * cos, q * a * dir.y * cos, a * sin)
}

/// Normal term contributed by one wave (same arguments as [`wave_position`])
pub fn wave_normal(p: Vec2, t: f32, q: f32, a: f32, dir: Vec2, w: f32, phi: f32) -> Vec3 {
    let inner = w * dir.dot(p) + phi * t;
    let (sin, cos) = inner.sin_cos();
    let wa = w * a;

    Vec3::new(dir.x * wa * cos, dir.y * wa * cos, q * wa * sin)
}

/// Sum every wave at point `p` and time `t`
///
/// Steepness is divided by `w * a * wave_count` so the combined crest
/// sharpening stays bounded as waves are added. An empty set returns `p`
/// unchanged with the up normal `(0, 0, 1)`.
pub fn solve(p: Vec2, t: f32, waves: &[WaveDescriptor]) -> SurfaceSample {
    let count = waves.len() as f32;
    let mut displacement = Vec3::ZERO;
    let mut normal = Vec3::ZERO;

    for wave in waves {
        let w = wave.angular_frequency();

        let q = if w != 0.0 && wave.amplitude != 0.0 && count != 0.0 {
            wave.steepness / (w * wave.amplitude * count)
        } else {
            0.0
        };

        let phi = wave.phase_rate();
        displacement += wave_position(p, t, q, wave.amplitude, wave.direction, w, phi);
        normal += wave_normal(p, t, q, wave.amplitude, wave.direction, w, phi);
    }

    SurfaceSample {
        position: Vec3::new(p.x + displacement.x, p.y + displacement.y, displacement.z),
        normal: Vec3::new(-normal.x, -normal.y, 1.0 - normal.z),
    }
}
