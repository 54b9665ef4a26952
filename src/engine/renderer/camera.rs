// Camera for the 2D arena view

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Smallest zoom a camera accepts
const MIN_ZOOM: f32 = 0.1;

/// 2D camera looking at the arena, +y pointing down the screen like grid rows
#[derive(Debug, Clone)]
pub struct Camera {
    /// Point in world space at the center of the view
    pub position: Vec2,
    /// Camera zoom level (1.0 = one world pixel per screen pixel)
    pub zoom: f32,
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        let half_width = (self.viewport_width / 2.0) / self.zoom;
        let half_height = (self.viewport_height / 2.0) / self.zoom;

        // Bottom and top are swapped so row 0 sits at the top of the window
        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y + half_height,
            self.position.y - half_height,
            -100.0,
            100.0,
        );
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
        self.update_view_proj();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    /// Center on a world area of `size` pixels and zoom so all of it is visible
    pub fn fit(&mut self, size: Vec2) {
        self.position = size / 2.0;
        let zoom = (self.viewport_width / size.x).min(self.viewport_height / size.y);
        self.set_zoom(zoom);
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
