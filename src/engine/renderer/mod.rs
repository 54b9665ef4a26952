// Rendering: sprites, tilesets and the wgpu presenter

mod camera;
mod sprite;
mod tileset;
mod vertex;

pub use camera::{Camera, CameraUniform};
pub use sprite::{Sprite, SpriteRenderer};
pub use tileset::Tileset;
pub use vertex::Vertex;

use anyhow::Result;
use glam::Vec2;
use log::info;
use std::sync::Arc;
use winit::window::Window;

/// Background behind the arena
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

/// Presents frames of sprites in a window through wgpu
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprite_renderer: SpriteRenderer,
    camera: Camera,
    /// World area (pixels) kept fully in view
    world_size: Vec2,
}

impl Renderer {
    /// Create a renderer for the window, framing a world area of `world_size` pixels
    pub async fn new(window: Arc<Window>, world_size: Vec2) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Surface supports no texture format"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Vsync also caps the main loop
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let sprite_renderer = SpriteRenderer::new(&device, &config)?;

        let mut camera = Camera::new(Vec2::ZERO, config.width as f32, config.height as f32);
        camera.fit(world_size);

        info!(
            "Renderer initialized with {}x{} resolution",
            config.width, config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprite_renderer,
            camera,
            world_size,
        })
    }

    /// Resize the surface, keeping the whole world area in view
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.camera
                .resize(new_size.width as f32, new_size.height as f32);
            self.camera.fit(self.world_size);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Present one frame of queued sprites
    pub fn render(&mut self, frame: &FrameQueue) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.sprite_renderer.prepare(&self.device, &frame.sprites());

        let camera_uniform = CameraUniform::new(&self.camera);
        self.queue.write_buffer(
            self.sprite_renderer.camera_buffer(),
            0,
            bytemuck::cast_slice(&[camera_uniform]),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer.render(&mut render_pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Anything sprites can be drawn onto
pub trait RenderTarget {
    fn draw(&mut self, sprite: &Sprite);
}

/// Render target collecting one frame of sprites for the `Renderer`
#[derive(Debug, Default)]
pub struct FrameQueue {
    sprites: Vec<Sprite>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything queued for the previous frame
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Queued sprites, back to front
    pub fn sprites(&self) -> Vec<&Sprite> {
        let mut sorted: Vec<&Sprite> = self.sprites.iter().collect();
        sorted.sort_by(|a, b| a.z_order.total_cmp(&b.z_order));
        sorted
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}

impl RenderTarget for FrameQueue {
    fn draw(&mut self, sprite: &Sprite) {
        self.sprites.push(sprite.clone());
    }
}
