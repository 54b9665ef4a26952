// Sprite data and the sprite quad renderer

use super::tileset::TileRegion;
use super::{CameraUniform, Vertex};
use anyhow::Result;
use glam::{Mat4, Vec2, Vec4};
use wgpu::util::DeviceExt;

/// A 2D sprite for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Top-left corner in world space (pixels)
    pub position: Vec2,
    /// Scale (1.0 = original size)
    pub scale: Vec2,
    /// Size in pixels (width, height)
    pub size: Vec2,
    /// Color tint (RGBA, 1.0 = full color)
    pub color: Vec4,
    /// Tileset region (None = flat colored quad)
    pub region: Option<TileRegion>,
    /// Z-order for layering (higher = drawn on top)
    pub z_order: f32,
}

impl Sprite {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            scale: Vec2::ONE,
            size,
            color: Vec4::ONE,
            region: None,
            z_order: 0.0,
        }
    }

    /// Create a sprite showing a tileset region at its native size
    pub fn from_region(region: TileRegion) -> Self {
        Self {
            region: Some(region),
            ..Self::new(Vec2::ZERO, region.size())
        }
    }

    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = z_order;
        self
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Opposite corner from `position` once scaled
    pub fn bottom_right(&self) -> Vec2 {
        self.position + self.size * self.scale
    }
}

/// Build one quad (four vertices, six indices) per sprite, in the given order
pub fn build_quads(sprites: &[&Sprite]) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(sprites.len() * 4);
    let mut indices = Vec::with_capacity(sprites.len() * 6);

    for sprite in sprites {
        let min = sprite.position;
        let max = sprite.bottom_right();
        let (uv_min, uv_max) = sprite
            .region
            .map_or((Vec2::ZERO, Vec2::ONE), |region| (region.uv_min, region.uv_max));
        let base = vertices.len() as u32;

        for (corner, uv) in [
            (Vec2::new(min.x, min.y), Vec2::new(uv_min.x, uv_min.y)),
            (Vec2::new(max.x, min.y), Vec2::new(uv_max.x, uv_min.y)),
            (Vec2::new(max.x, max.y), Vec2::new(uv_max.x, uv_max.y)),
            (Vec2::new(min.x, max.y), Vec2::new(uv_min.x, uv_max.y)),
        ] {
            vertices.push(Vertex::new(corner.extend(sprite.z_order), uv, sprite.color));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// GPU buffers for one frame of quads
struct QuadMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// Draws a frame of sprites as tinted quads
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    mesh: Option<QuadMesh>,
}

impl SpriteRenderer {
    pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The y-down camera flips winding
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            render_pipeline,
            camera_buffer,
            camera_bind_group,
            mesh: None,
        })
    }

    /// Upload this frame's sprites, back to front
    pub fn prepare(&mut self, device: &wgpu::Device, sprites: &[&Sprite]) {
        let (vertices, indices) = build_quads(sprites);
        if indices.is_empty() {
            self.mesh = None;
            return;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        self.mesh = Some(QuadMesh {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        });
    }

    /// Draw the prepared quads
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        let Some(mesh) = &self.mesh else {
            return;
        };

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    pub fn camera_buffer(&self) -> &wgpu::Buffer {
        &self.camera_buffer
    }
}
