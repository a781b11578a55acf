//! Scene setup for the instanced drawing demo.
//!
//! # Invariants
//! - Instance buffers are generated once, before the first frame, and never mutated.
//! - Record `i` lives at `transforms[i*16..i*16+16]` and `colors[i*3..i*3+3]`.
//! - Camera motion is driven only by [`OrbitState`].

mod camera;
mod config;
pub mod generator;
mod geometry;
mod orbit;
mod scene;

pub use camera::PerspectiveCamera;
pub use config::{ConfigError, DemoConfig};
pub use generator::{InstanceBuffers, InstanceRecord, generate_instances};
pub use geometry::{BoxGeometry, Vertex};
pub use orbit::OrbitState;
pub use scene::{DirectionalLight, InstancedBatch, Scene};

pub fn crate_info() -> &'static str {
    "instancing-scene v0.1.0"
}
