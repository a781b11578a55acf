//! wgpu render backend for the instanced drawing demo.
//!
//! Draws one shared cube repeated once per instance row, with the per-instance
//! matrix and color read from vertex buffers uploaded at startup.
//!
//! # Invariants
//! - Instance buffers are uploaded once and never written again.
//! - Each frame issues exactly one instanced draw call.
//! - Camera motion happens outside the backend.

mod context;
mod error;
mod gpu;
mod shaders;

pub use context::GpuContext;
pub use error::RenderError;
pub use gpu::{GpuFrame, WgpuRenderer};
