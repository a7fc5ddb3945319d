//! Flat water plane mesh.

use bytemuck::{Pod, Zeroable};

use super::buffer::SharedVertexBuffer;
use crate::params::GridConfig;

/// Vertex data for the water plane (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const POSITION_OFFSET: usize = 0;
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();
    pub const UV_OFFSET: usize = 2 * std::mem::size_of::<[f32; 3]>();
}

/// Flat XZ grid at rest height 0
///
/// With `split_seams` the plane is emitted as two patches that each own a
/// copy of the middle column, the way exported models split vertices along
/// UV seams.
pub struct OceanGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl OceanGrid {
    /// Create a new grid with the specified layout
    pub fn new(config: &GridConfig) -> Self {
        let mut grid = Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        };

        let size = config.grid_size;
        if config.split_seams && size >= 2 {
            let mid = size / 2;
            grid.push_patch(config, 0, mid);
            grid.push_patch(config, mid, size);
        } else {
            grid.push_patch(config, 0, size);
        }

        grid
    }

    /// Append columns `x_start..=x_end` over the full Z extent
    fn push_patch(&mut self, config: &GridConfig, x_start: usize, x_end: usize) {
        let size = config.grid_size;
        let spacing = config.grid_spacing_m;
        let half_size = (size as f32 * spacing) / 2.0;
        let base = self.vertices.len() as u32;
        let columns = x_end - x_start + 1;

        for z in 0..=size {
            for x in x_start..=x_end {
                let x_pos = x as f32 * spacing - half_size;
                let z_pos = z as f32 * spacing - half_size;

                self.vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    normal: [0.0, 1.0, 0.0],
                    uv: [x as f32 / size.max(1) as f32, z as f32 / size.max(1) as f32],
                });
            }
        }

        // Counter-clockwise winding seen from +Y
        for z in 0..size {
            for cx in 0..columns - 1 {
                let top_left = base + (z * columns + cx) as u32;
                let top_right = top_left + 1;
                let bottom_left = base + ((z + 1) * columns + cx) as u32;
                let bottom_right = bottom_left + 1;

                self.indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }
    }

    /// Copy the vertices into a lockable buffer the animator can bind
    pub fn to_vertex_buffer(&self) -> Option<SharedVertexBuffer> {
        SharedVertexBuffer::from_vertices(
            &self.vertices,
            Vertex::POSITION_OFFSET,
            Some(Vertex::NORMAL_OFFSET),
        )
    }
}
