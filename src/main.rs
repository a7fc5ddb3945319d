//! Gerstner ocean viewer
//!
//! A flat water plane animated by a rolling population of Gerstner waves
//! that spawn, fade in, age, and fade out on their own.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use gerstner_ocean::camera::CameraSystem;
use gerstner_ocean::cli::Args;
use gerstner_ocean::ocean::{OceanGrid, OceanSystem, SharedVertexBuffer, VertexStore};
use gerstner_ocean::params::RenderConfig;
use gerstner_ocean::rendering::{RenderSystem, Uniforms};

/// Longest step fed to the simulation (seconds), so a stalled window does
/// not age every wave out at once
const MAX_FRAME_DT_S: f32 = 0.25;

/// Fixed step used when running without a window
const HEADLESS_DT_S: f32 = 1.0 / 60.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation systems
    ocean: OceanSystem,
    grid: OceanGrid,
    vertex_buffer: Option<SharedVertexBuffer>,
    camera: CameraSystem,

    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
    last_frame: Instant,
}

impl App {
    fn new(
        ocean: OceanSystem,
        grid: OceanGrid,
        vertex_buffer: Option<SharedVertexBuffer>,
        camera: CameraSystem,
    ) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            render_system: None,
            ocean,
            grid,
            vertex_buffer,
            camera,
            render_config: RenderConfig::default(),
            start_time: now,
            last_frame: now,
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyR => self.ocean.reset(),
            KeyCode::KeyF => {
                let manager = self.ocean.manager_mut();
                let enabled = !manager.fading_enabled();
                manager.enable_fading(enabled);
                info!("Fading {}", if enabled { "on" } else { "off" });
            }
            KeyCode::KeyV => {
                let manager = self.ocean.manager_mut();
                let enabled = !manager.speed_variation_enabled();
                manager.enable_speed_variation(enabled);
                info!("Speed variation {}", if enabled { "on" } else { "off" });
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Gerstner Ocean")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.grid,
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        info!("Ocean is running: R reset, F toggle fading, V toggle speed variation, ESC quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.render_config.window_width = size.width;
                    self.render_config.window_height = size.height;
                }
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Advance the ocean and render a single frame
    fn render_frame(&mut self) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_S);
        self.last_frame = now;
        let time_s = self.start_time.elapsed().as_secs_f32();

        if self.ocean.update(dt) {
            if let Some(bytes) = self.vertex_buffer.as_ref().and_then(|b| b.lock()) {
                render_system.update_vertices(&bytes);
            }
        }

        let (view_proj, _) = self
            .camera
            .create_view_proj_matrix(time_s, &self.render_config);
        let uniforms = Uniforms::new(view_proj, &self.render_config, time_s);
        render_system.update_uniforms(&uniforms);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.resize(
                    self.render_config.window_width,
                    self.render_config.window_height,
                );
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

/// Step the simulation without a window and log the wave population
fn run_headless(mut ocean: OceanSystem, frames: usize) {
    info!("Running {} frames headless", frames);

    for frame in 1..=frames {
        ocean.update(HEADLESS_DT_S);

        if frame % 60 == 0 || frame == frames {
            let manager = ocean.manager();
            let peak = ocean
                .current_waves()
                .iter()
                .map(|w| w.amplitude)
                .fold(0.0_f32, f32::max);
            info!(
                "frame {:>6}: {} waves ({} fading in, {} fading out), peak amplitude {:.3}",
                frame,
                manager.active_count(),
                manager.pending_fade_ins(),
                manager.pending_fade_outs(),
                peak
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let surface_config = args.surface_config()?;
    let mut ocean = match args.seed {
        Some(seed) => OceanSystem::with_seed(surface_config, seed),
        None => OceanSystem::new(surface_config),
    };

    let grid = OceanGrid::new(&args.grid_config());
    let vertex_buffer = grid.to_vertex_buffer();
    ocean.bind_model(vertex_buffer.clone());

    if let Some(frames) = args.frames {
        run_headless(ocean, frames);
        return Ok(());
    }

    let camera = CameraSystem::new(args.parse_camera_preset());
    let mut app = App::new(ocean, grid, vertex_buffer, camera);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
