//! Shape parameters of a single traveling Gerstner wave.

use glam::Vec2;

/// One wave of the superposition.
///
/// Amplitude and steepness are ramped in place by the lifecycle manager while
/// the wave fades in or out; the remaining fields are fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDescriptor {
    /// Crest sharpening in [0, 1] (0 = pure sinusoid)
    pub steepness: f32,

    /// Phase speed (world units per second)
    pub speed: f32,

    /// Wavelength (world units)
    pub length: f32,

    /// Crest height (world units)
    pub amplitude: f32,

    /// Travel direction in the horizontal plane (unit length)
    pub direction: Vec2,
}

impl WaveDescriptor {
    pub fn new(steepness: f32, speed: f32, length: f32, amplitude: f32, direction: Vec2) -> Self {
        Self {
            steepness,
            speed,
            length,
            amplitude,
            direction,
        }
    }

    /// Angular wave number `2π / length`, or 0 for a degenerate wavelength
    pub fn angular_frequency(&self) -> f32 {
        if self.length != 0.0 {
            std::f32::consts::TAU / self.length
        } else {
            0.0
        }
    }

    /// Phase rate `speed * w`
    pub fn phase_rate(&self) -> f32 {
        self.speed * self.angular_frequency()
    }
}
