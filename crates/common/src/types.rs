use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Placement of one instance: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for InstanceTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl InstanceTransform {
    /// Build a transform from XYZ-ordered Euler angles in radians.
    pub fn from_euler(position: Vec3, euler: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z),
            scale,
        }
    }

    /// Compose translation * rotation * scale.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Decompose an affine matrix produced by [`InstanceTransform::to_matrix`].
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            rotation,
            scale,
        }
    }
}

/// Linear RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Split a 24-bit `0xRRGGBB` value into normalized sRGB channels.
    /// Bits above the low 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Decode a 24-bit sRGB value straight into the linear working space.
    pub fn from_hex_linear(hex: u32) -> Self {
        Self::from_hex(hex).to_linear()
    }

    /// Convert sRGB-encoded channels to linear.
    pub fn to_linear(self) -> Self {
        Self {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = InstanceTransform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn zero_euler_is_identity_rotation() {
        let t = InstanceTransform::from_euler(Vec3::ONE, Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(t.rotation, Quat::IDENTITY);
        let m = t.to_matrix();
        assert_eq!(m.col(0).x, 2.0);
        assert_eq!(m.col(3).truncate(), Vec3::ONE);
    }

    #[test]
    fn matrix_decomposes_back() {
        let t = InstanceTransform::from_euler(
            Vec3::new(3.0, -4.0, 5.0),
            Vec3::new(0.3, 1.2, 2.5),
            Vec3::new(0.5, 1.0, 1.4),
        );
        let back = InstanceTransform::from_matrix(&t.to_matrix());
        assert!(back.position.abs_diff_eq(t.position, 1e-5));
        assert!(back.scale.abs_diff_eq(t.scale, 1e-5));
        // q and -q are the same rotation
        assert!(back.rotation.dot(t.rotation).abs() > 1.0 - 1e-5);
    }

    #[test]
    fn hex_channels() {
        let c = Rgb::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(Rgb::from_hex(0), Rgb::BLACK);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Rgb::from_hex_linear(0x000000), Rgb::BLACK);
        let white = Rgb::from_hex_linear(0xffffff);
        assert_eq!(white.to_array(), [1.0, 1.0, 1.0]);
        let mid = Rgb::from_hex_linear(0x808080);
        assert!(mid.r > 0.2 && mid.r < 0.23);
    }
}
