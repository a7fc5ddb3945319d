//! Lockable vertex storage shared between the animator and the renderer.
//!
//! The animator only needs byte-level access plus the layout of a vertex
//! record, so any mesh resource can be animated by implementing
//! [`VertexStore`]. Access is scoped: the lock guard releases on drop, on
//! every exit path.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

use bytemuck::Pod;

/// Where positions and normals live inside one vertex record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub vertex_count: usize,

    /// Stride between consecutive vertices (bytes)
    pub vertex_size: usize,

    /// Byte offset of the `[f32; 3]` position
    pub position_offset: usize,

    /// Byte offset of the `[f32; 3]` normal, if the mesh carries one
    pub normal_offset: Option<usize>,
}

impl VertexLayout {
    /// Bytes needed to hold every vertex
    pub fn byte_len(&self) -> usize {
        self.vertex_count * self.vertex_size
    }

    /// A layout is usable when each attribute fits inside the stride
    pub fn is_valid(&self) -> bool {
        const VEC3: usize = std::mem::size_of::<[f32; 3]>();
        let fits = |offset: usize| offset + VEC3 <= self.vertex_size;
        fits(self.position_offset) && self.normal_offset.map_or(true, fits)
    }
}

/// Mesh vertex resource the animator can write into
pub trait VertexStore {
    /// Exclusive byte access, released when dropped
    type Lock<'a>: DerefMut<Target = [u8]>
    where
        Self: 'a;

    fn layout(&self) -> VertexLayout;

    /// `None` when the storage cannot be locked right now
    fn lock(&self) -> Option<Self::Lock<'_>>;
}

/// Reference-counted, mutex-guarded vertex bytes
///
/// Clones share the same storage: the animator writes through one handle
/// while the renderer uploads through another.
#[derive(Clone)]
pub struct SharedVertexBuffer {
    layout: VertexLayout,
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedVertexBuffer {
    /// Wrap raw vertex bytes; `None` if the byte count does not match the layout
    pub fn new(layout: VertexLayout, bytes: Vec<u8>) -> Option<Self> {
        if bytes.len() != layout.byte_len() || !layout.is_valid() {
            return None;
        }
        Some(Self {
            layout,
            bytes: Arc::new(Mutex::new(bytes)),
        })
    }

    /// Build from typed vertex records
    pub fn from_vertices<V: Pod>(
        vertices: &[V],
        position_offset: usize,
        normal_offset: Option<usize>,
    ) -> Option<Self> {
        let layout = VertexLayout {
            vertex_count: vertices.len(),
            vertex_size: std::mem::size_of::<V>(),
            position_offset,
            normal_offset,
        };
        Self::new(layout, bytemuck::cast_slice(vertices).to_vec())
    }

    /// Copy of the current contents (for tests and diagnostics)
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.lock().map(|bytes| bytes.to_vec())
    }
}

/// Guard returned by [`SharedVertexBuffer::lock`]
pub struct VertexBytesGuard<'a>(MutexGuard<'a, Vec<u8>>);

impl Deref for VertexBytesGuard<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl DerefMut for VertexBytesGuard<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.0.as_mut_slice()
    }
}

impl VertexStore for SharedVertexBuffer {
    type Lock<'a> = VertexBytesGuard<'a>;

    fn layout(&self) -> VertexLayout {
        self.layout
    }

    fn lock(&self) -> Option<VertexBytesGuard<'_>> {
        // A poisoned mutex means a writer panicked mid-pass; treat as unlockable
        self.bytes.lock().ok().map(VertexBytesGuard)
    }
}

/// Read the `[f32; 3]` at `offset`
pub fn read_vec3(bytes: &[u8], offset: usize) -> [f32; 3] {
    bytemuck::pod_read_unaligned(&bytes[offset..offset + 12])
}

/// Write `value` as `[f32; 3]` at `offset`
pub fn write_vec3(bytes: &mut [u8], offset: usize, value: [f32; 3]) {
    bytes[offset..offset + 12].copy_from_slice(bytemuck::bytes_of(&value));
}
