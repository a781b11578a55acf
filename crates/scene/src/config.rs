use crate::orbit::OrbitState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`DemoConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("instance count must be at least 1")]
    ZeroInstances,
    #[error("invalid clip range: near={near}, far={far}")]
    InvalidClipRange { near: f32, far: f32 },
    #[error("orbit radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("orbit step must be finite, got {0}")]
    InvalidStep(f64),
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("MSAA sample count must be 1 or 4, got {0}")]
    InvalidSampleCount(u32),
}

/// Tunables for the demo. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub instance_count: usize,
    /// Fixed seed for reproducible instance layouts; fresh entropy when absent.
    pub seed: Option<u64>,
    pub orbit_step_degrees: f64,
    pub orbit_radius: f64,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Clear color as `0xRRGGBB`.
    pub background: u32,
    /// Multisample count for the color and depth targets; 1 disables MSAA.
    pub msaa_samples: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            instance_count: 2000,
            seed: None,
            orbit_step_degrees: 10.0,
            orbit_radius: 5.0,
            fov_degrees: 70.0,
            near: 0.1,
            far: 100.0,
            background: 0xf0f0f0,
            msaa_samples: 4,
        }
    }
}

impl DemoConfig {
    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }

    /// Read `path` when given, otherwise start from the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instance_count == 0 {
            return Err(ConfigError::ZeroInstances);
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::InvalidClipRange {
                near: self.near,
                far: self.far,
            });
        }
        if !(self.orbit_radius.is_finite() && self.orbit_radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.orbit_radius));
        }
        if !self.orbit_step_degrees.is_finite() {
            return Err(ConfigError::InvalidStep(self.orbit_step_degrees));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov_degrees));
        }
        // wgpu only guarantees 1 and 4 samples on renderable formats
        if !matches!(self.msaa_samples, 1 | 4) {
            return Err(ConfigError::InvalidSampleCount(self.msaa_samples));
        }
        Ok(())
    }

    pub fn orbit(&self) -> OrbitState {
        OrbitState::new(self.orbit_step_degrees, self.orbit_radius)
    }
}
