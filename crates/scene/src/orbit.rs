use crate::camera::PerspectiveCamera;
use glam::Vec3;

/// Angle accumulator that drives the camera around the origin.
///
/// The angle grows by a fixed number of degrees per frame and is never
/// wrapped. The x and y coordinates share the same sine term, so the camera
/// travels a tilted planar circle rather than a helix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    theta_degrees: f64,
    step_degrees: f64,
    radius: f64,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(10.0, 5.0)
    }
}

impl OrbitState {
    pub fn new(step_degrees: f64, radius: f64) -> Self {
        Self {
            theta_degrees: 0.0,
            step_degrees,
            radius,
        }
    }

    pub fn theta_degrees(&self) -> f64 {
        self.theta_degrees
    }

    pub fn step_degrees(&self) -> f64 {
        self.step_degrees
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn advance(&mut self) {
        self.theta_degrees += self.step_degrees;
    }

    /// Camera position for the current angle.
    pub fn eye(&self) -> Vec3 {
        let theta = self.theta_degrees.to_radians();
        let s = (self.radius * theta.sin()) as f32;
        let c = (self.radius * theta.cos()) as f32;
        Vec3::new(s, s, c)
    }

    /// Advance one step, move the camera onto the orbit and aim it at the origin.
    pub fn apply(&mut self, camera: &mut PerspectiveCamera) {
        self.advance();
        camera.position = self.eye();
        camera.look_at(Vec3::ZERO);
        camera.update_world_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_on_z_axis() {
        let orbit = OrbitState::default();
        assert_eq!(orbit.theta_degrees(), 0.0);
        assert_eq!(orbit.eye(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn first_update_moves_ten_degrees() {
        let mut orbit = OrbitState::default();
        let mut camera = PerspectiveCamera::default();
        orbit.apply(&mut camera);

        assert_eq!(orbit.theta_degrees(), 10.0);
        assert!(
            camera
                .position
                .abs_diff_eq(Vec3::new(0.868, 0.868, 4.924), 1e-3)
        );
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn angle_after_k_updates() {
        let mut orbit = OrbitState::default();
        let mut camera = PerspectiveCamera::default();
        for k in 1..=100u32 {
            orbit.apply(&mut camera);
            assert_eq!(orbit.theta_degrees(), 10.0 * k as f64);

            let rad = (10.0 * k as f64).to_radians();
            let expected = Vec3::new(
                (5.0 * rad.sin()) as f32,
                (5.0 * rad.sin()) as f32,
                (5.0 * rad.cos()) as f32,
            );
            assert!(camera.position.abs_diff_eq(expected, 1e-5));
        }
    }

    #[test]
    fn angle_is_never_wrapped() {
        let mut orbit = OrbitState::default();
        for _ in 0..72 {
            orbit.advance();
        }
        assert_eq!(orbit.theta_degrees(), 720.0);
        assert!(orbit.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn camera_stays_on_tilted_circle() {
        let mut orbit = OrbitState::new(7.0, 5.0);
        let mut camera = PerspectiveCamera::default();
        for _ in 0..50 {
            orbit.apply(&mut camera);
            let p = camera.position;
            assert_eq!(p.x, p.y);
            // |p|^2 = 2 r^2 sin^2 + r^2 cos^2 = r^2 (1 + sin^2)
            let s = (orbit.theta_degrees().to_radians().sin()) as f32;
            assert!((p.length_squared() - 25.0 * (1.0 + s * s)).abs() < 1e-3);
            assert!(
                camera
                    .world_matrix()
                    .transform_point3(Vec3::ZERO)
                    .abs_diff_eq(p, 1e-4)
            );
        }
    }
}
