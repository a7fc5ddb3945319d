//! Gerstner ocean: wave population, surface solver, and mesh animation.

mod animator;
mod arena;
mod buffer;
mod lifecycle;
mod mesh;
mod solver;
mod system;
mod wave;

pub use animator::{
    extract_duplicates, extract_vertex_positions, SurfaceAnimator, DUPLICATE_EPSILON,
};
pub use arena::{WaveArena, WaveId};
pub use buffer::{
    read_vec3, write_vec3, SharedVertexBuffer, VertexBytesGuard, VertexLayout, VertexStore,
};
pub use lifecycle::{create_wave, random_between, ActiveWaveSlot, WaveLifecycleManager};
pub use mesh::{OceanGrid, Vertex};
pub use solver::{solve, wave_normal, wave_position, SurfaceSample};
pub use system::OceanSystem;
pub use wave::WaveDescriptor;
