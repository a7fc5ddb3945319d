//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (meters, seconds, degrees)
//! - Documented ranges and meanings

mod camera;
mod ocean;
mod render;

// Re-export all types
pub use camera::{CameraPreset, FixedCamera, OrbitCamera};
pub use ocean::{GridConfig, SurfaceConfig};
pub use render::RenderConfig;
