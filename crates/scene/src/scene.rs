use crate::camera::PerspectiveCamera;
use crate::config::DemoConfig;
use crate::generator::{InstanceBuffers, generate_instances};
use crate::geometry::BoxGeometry;
use glam::Vec3;
use instancing_common::Rgb;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One draw batch: a shared geometry repeated once per instance row.
#[derive(Debug, Clone, PartialEq)]
pub struct InstancedBatch {
    pub buffers: InstanceBuffers,
}

impl InstancedBatch {
    pub fn new(buffers: InstanceBuffers) -> Self {
        Self { buffers }
    }

    pub fn instance_count(&self) -> u32 {
        self.buffers.len() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    /// Unit vector pointing from the scene toward the light.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex_linear(0xffffff),
            intensity: 3.0,
            direction: Vec3::ONE.normalize(),
        }
    }
}

/// Composition root: everything the renderer needs to draw a frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub geometry: BoxGeometry,
    pub batch: InstancedBatch,
    pub camera: PerspectiveCamera,
    pub light: DirectionalLight,
    /// Clear color, already in linear space.
    pub background: Rgb,
}

impl Scene {
    /// Assemble a scene around pre-generated instance buffers.
    pub fn new(config: &DemoConfig, buffers: InstanceBuffers) -> Self {
        Self {
            geometry: BoxGeometry::default(),
            batch: InstancedBatch::new(buffers),
            camera: PerspectiveCamera::new(
                config.fov_degrees.to_radians(),
                16.0 / 9.0,
                config.near,
                config.far,
            ),
            light: DirectionalLight::default(),
            background: Rgb::from_hex_linear(config.background),
        }
    }

    /// Generate the instances described by `config` and build the scene.
    /// A configured seed makes the layout reproducible.
    pub fn from_config(config: &DemoConfig) -> Self {
        let buffers = match config.seed {
            Some(seed) => {
                generate_instances(config.instance_count, &mut StdRng::seed_from_u64(seed))
            }
            None => generate_instances(config.instance_count, &mut rand::rng()),
        };
        tracing::info!(
            instances = buffers.len(),
            seed = ?config.seed,
            "scene instances generated"
        );
        Self::new(config, buffers)
    }

    pub fn instance_count(&self) -> u32 {
        self.batch.instance_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_from_default_config() {
        let config = DemoConfig {
            seed: Some(1),
            ..DemoConfig::default()
        };
        let scene = Scene::from_config(&config);
        assert_eq!(scene.instance_count(), 2000);
        assert_eq!(scene.batch.buffers.transforms.len(), 32000);
        assert_eq!(scene.geometry.index_count(), 36);
        assert!((scene.camera.fov - 70.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn seeded_scenes_match() {
        let config = DemoConfig {
            instance_count: 50,
            seed: Some(99),
            ..DemoConfig::default()
        };
        let a = Scene::from_config(&config);
        let b = Scene::from_config(&config);
        assert_eq!(a.batch, b.batch);
    }

    #[test]
    fn light_points_along_diagonal() {
        let light = DirectionalLight::default();
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(light.direction.x, light.direction.y);
        assert_eq!(light.intensity, 3.0);
    }

    #[test]
    fn background_is_light_gray() {
        let scene = Scene::new(&DemoConfig::default(), InstanceBuffers::default());
        let bg = scene.background;
        assert_eq!(bg.r, bg.g);
        assert!(bg.r > 0.8 && bg.r < 0.9);
        assert_eq!(scene.instance_count(), 0);
    }
}
