// Camera mapping the fixed logical screen onto the window

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// 2D camera that letterboxes a fixed logical screen into the window
///
/// The logical screen keeps its aspect ratio and is scaled uniformly to the
/// largest size that fits; the remaining window area becomes bars. Logical
/// coordinates have the origin in the top-left corner and y pointing down.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Logical screen size
    logical_size: Vec2,
    /// Viewport width
    viewport_width: f32,
    /// Viewport height
    viewport_height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera
    pub fn new(logical_size: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            logical_size,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        let scale = self.scale();
        let visible = Vec2::new(self.viewport_width, self.viewport_height) / scale;
        let pad = (visible - self.logical_size) / 2.0;

        // Bottom and top swapped so that y grows downwards
        self.view_proj = Mat4::orthographic_rh(
            -pad.x,
            self.logical_size.x + pad.x,
            self.logical_size.y + pad.y,
            -pad.y,
            -1.0,
            1.0,
        );
    }

    /// Window pixels per logical pixel
    pub fn scale(&self) -> f32 {
        let sx = self.viewport_width / self.logical_size.x;
        let sy = self.viewport_height / self.logical_size.y;
        sx.min(sy).max(f32::EPSILON)
    }

    /// Window position of the logical screen's top-left corner
    fn offset(&self) -> Vec2 {
        let viewport = Vec2::new(self.viewport_width, self.viewport_height);
        (viewport - self.logical_size * self.scale()) / 2.0
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Convert window coordinates to logical coordinates
    ///
    /// Returns `None` for points on the letterbox bars.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Option<Vec2> {
        let world = (screen_pos - self.offset()) / self.scale();
        let inside = world.x >= 0.0
            && world.y >= 0.0
            && world.x <= self.logical_size.x
            && world.y <= self.logical_size.y;
        inside.then_some(world)
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
