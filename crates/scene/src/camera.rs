use glam::{Mat4, Vec3};

/// Perspective camera that always looks at a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    world_matrix: Mat4,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(70.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov,
            aspect,
            near,
            far,
            world_matrix: Mat4::IDENTITY,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Recompute the camera-to-world matrix from position and target.
    pub fn update_world_matrix(&mut self) {
        self.world_matrix = self.view_matrix().inverse();
    }

    /// Camera-to-world matrix as of the last [`Self::update_world_matrix`].
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }

    /// Update the aspect ratio from a surface size. Zero heights are clamped.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
