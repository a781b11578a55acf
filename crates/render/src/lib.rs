//! Rendering Adapter: renderer-agnostic interface and the per-frame driver.
//!
//! # Invariants
//! - Renderers read the scene; they never mutate it.
//! - Each call to [`DemoState::frame`] advances the orbit once and submits
//!   exactly one render.

mod demo;
mod renderer;

pub use demo::DemoState;
pub use renderer::{DebugTextRenderer, RenderInfo, Renderer};

pub fn crate_info() -> &'static str {
    "instancing-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
