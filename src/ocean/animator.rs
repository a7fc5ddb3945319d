//! Per-frame vertex animation.
//!
//! Caches the rest positions of a bound mesh once, then rewrites positions
//! and normals from the Gerstner sum every tick.

use std::collections::HashMap;

use glam::{IVec3, Vec2, Vec3};
use log::{info, warn};

use super::buffer::{read_vec3, write_vec3, VertexLayout, VertexStore};
use super::solver::{solve, SurfaceSample};
use super::wave::WaveDescriptor;

/// Read every vertex position out of raw vertex bytes
///
/// Returns an empty list when the bytes are too short for the layout.
pub fn extract_vertex_positions(bytes: &[u8], layout: &VertexLayout) -> Vec<Vec3> {
    if bytes.len() < layout.byte_len() || !layout.is_valid() {
        return Vec::new();
    }

    (0..layout.vertex_count)
        .map(|i| {
            let offset = i * layout.vertex_size + layout.position_offset;
            Vec3::from_array(read_vec3(bytes, offset))
        })
        .collect()
}

/// Largest per-axis gap at which two vertices count as the same point
pub const DUPLICATE_EPSILON: f32 = 1e-6;

/// For each vertex, the index of the first vertex at the same position
///
/// Positions match when every axis differs by at most [`DUPLICATE_EPSILON`],
/// so seams that an exporter wrote with slightly different rounding still
/// pair up. A vertex with no earlier twin maps to itself.
pub fn extract_duplicates(positions: &[Vec3]) -> Vec<u32> {
    // Bucket by epsilon-sized cells; a match can sit in any neighboring cell
    let cell = |p: Vec3| (p / DUPLICATE_EPSILON).floor().as_ivec3();

    let mut canonical_by_cell: HashMap<IVec3, Vec<u32>> =
        HashMap::with_capacity(positions.len());
    let mut duplicates = Vec::with_capacity(positions.len());

    for (i, &p) in positions.iter().enumerate() {
        let home = cell(p);
        let mut found: Option<u32> = None;

        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let neighbor = home.wrapping_add(IVec3::new(dx, dy, dz));
                    let Some(candidates) = canonical_by_cell.get(&neighbor) else {
                        continue;
                    };
                    for &c in candidates {
                        if positions[c as usize].abs_diff_eq(p, DUPLICATE_EPSILON)
                            && found.map_or(true, |f| c < f)
                        {
                            found = Some(c);
                        }
                    }
                }
            }
        }

        match found {
            Some(c) => duplicates.push(c),
            None => {
                canonical_by_cell.entry(home).or_default().push(i as u32);
                duplicates.push(i as u32);
            }
        }
    }

    duplicates
}

/// Drives one mesh buffer from the active wave set
pub struct SurfaceAnimator<B: VertexStore> {
    buffer: Option<B>,
    base_positions: Vec<Vec3>,
    duplicates: Vec<u32>,
    time: f32,
    samples: Vec<SurfaceSample>,
}

impl<B: VertexStore> Default for SurfaceAnimator<B> {
    fn default() -> Self {
        Self {
            buffer: None,
            base_positions: Vec::new(),
            duplicates: Vec::new(),
            time: 0.0,
            samples: Vec::new(),
        }
    }
}

impl<B: VertexStore> SurfaceAnimator<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the mesh's primary vertex stream
    ///
    /// Without a buffer, or when its rest positions cannot be read, the
    /// animator stays unbound and later ticks only advance time.
    pub fn bind_model(&mut self, buffer: Option<B>) {
        self.buffer = None;
        self.base_positions.clear();
        self.duplicates.clear();

        let Some(buffer) = buffer else {
            warn!("Ocean model has no vertex buffer, surface will stay static");
            return;
        };

        let layout = buffer.layout();
        let positions = match buffer.lock() {
            Some(bytes) => extract_vertex_positions(&bytes, &layout),
            None => {
                warn!("Failed to lock the model vertex buffer to get original vertices");
                return;
            }
        };

        if positions.len() != layout.vertex_count {
            warn!(
                "Vertex buffer holds fewer bytes than its layout ({} vertices of {} bytes)",
                layout.vertex_count, layout.vertex_size
            );
            return;
        }

        self.duplicates = extract_duplicates(&positions);
        let seams = self
            .duplicates
            .iter()
            .enumerate()
            .filter(|&(i, &d)| d as usize != i)
            .count();
        info!(
            "Bound ocean mesh: {} vertices ({} seam duplicates)",
            positions.len(),
            seams
        );

        self.base_positions = positions;
        self.buffer = Some(buffer);
    }

    /// Advance time by `dt` and rewrite the bound buffer from `waves`
    ///
    /// Returns `true` when the buffer was written. An empty wave set leaves
    /// the buffer as it was last written.
    pub fn tick(&mut self, dt: f32, waves: &[WaveDescriptor]) -> bool {
        self.time += dt;

        let Some(buffer) = &self.buffer else {
            return false;
        };
        if waves.is_empty() {
            return false;
        }

        let layout = buffer.layout();
        let Some(mut bytes) = buffer.lock() else {
            warn!("Failed to lock the ocean vertex buffer, skipping this frame");
            return false;
        };
        if bytes.len() < layout.byte_len() {
            warn!("Ocean vertex buffer shrank since binding, skipping this frame");
            return false;
        }

        let count = self.base_positions.len().min(layout.vertex_count);
        self.samples.clear();
        self.samples.reserve(count);

        for i in 0..count {
            // Seam twins take the result already computed for their first copy
            let canonical = self.duplicates[i] as usize;
            let sample = if canonical < i {
                self.samples[canonical]
            } else {
                let src = self.base_positions[i];
                solve(Vec2::new(src.x, src.z), self.time, waves).to_y_up()
            };
            self.samples.push(sample);

            let offset = i * layout.vertex_size;
            write_vec3(
                &mut bytes,
                offset + layout.position_offset,
                sample.position.to_array(),
            );
            if let Some(normal_offset) = layout.normal_offset {
                write_vec3(&mut bytes, offset + normal_offset, sample.normal.to_array());
            }
        }

        true
    }

    /// Seconds accumulated over all ticks
    pub fn elapsed(&self) -> f32 {
        self.time
    }

    pub fn is_bound(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    pub fn duplicates(&self) -> &[u32] {
        &self.duplicates
    }
}
