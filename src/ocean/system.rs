//! High-level ocean system: wave population plus mesh animation.

use log::info;

use super::animator::SurfaceAnimator;
use super::buffer::SharedVertexBuffer;
use super::lifecycle::WaveLifecycleManager;
use super::wave::WaveDescriptor;
use crate::params::SurfaceConfig;

/// Owns the wave population and the animator driving one mesh
pub struct OceanSystem {
    manager: WaveLifecycleManager,
    animator: SurfaceAnimator<SharedVertexBuffer>,
    /// Reused every frame to avoid reallocating the active wave list
    waves: Vec<WaveDescriptor>,
}

impl OceanSystem {
    /// Create new ocean system with the given surface parameters
    pub fn new(config: SurfaceConfig) -> Self {
        Self::from_manager(WaveLifecycleManager::new(config))
    }

    /// Deterministic variant for tests and reproducible runs
    pub fn with_seed(config: SurfaceConfig, seed: u64) -> Self {
        Self::from_manager(WaveLifecycleManager::with_seed(config, seed))
    }

    fn from_manager(manager: WaveLifecycleManager) -> Self {
        Self {
            manager,
            animator: SurfaceAnimator::new(),
            waves: Vec::new(),
        }
    }

    /// Attach the mesh to animate (`None` leaves the surface static)
    pub fn bind_model(&mut self, buffer: Option<SharedVertexBuffer>) {
        self.animator.bind_model(buffer);
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Population changes happen first so the mesh always reflects this
    /// frame's wave set. Returns `true` when the mesh was rewritten.
    pub fn update(&mut self, dt: f32) -> bool {
        self.manager.update(dt);
        self.manager.active_waves_into(&mut self.waves);
        self.animator.tick(dt, &self.waves)
    }

    /// Drop every wave; the next update respawns from the current config
    pub fn reset(&mut self) {
        info!("Resetting ocean surface");
        self.manager.reset();
    }

    pub fn manager(&self) -> &WaveLifecycleManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut WaveLifecycleManager {
        &mut self.manager
    }

    pub fn animator(&self) -> &SurfaceAnimator<SharedVertexBuffer> {
        &self.animator
    }

    /// Waves used for the most recent mesh update
    pub fn current_waves(&self) -> &[WaveDescriptor] {
        &self.waves
    }
}
