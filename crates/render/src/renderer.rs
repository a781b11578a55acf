use instancing_scene::Scene;

/// Counters describing the most recent submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderInfo {
    /// Frames submitted so far.
    pub frame: u64,
    /// Draw calls issued by the last frame.
    pub draw_calls: u32,
    /// Triangles rasterized by the last frame, across all instances.
    pub triangles: u64,
}

impl RenderInfo {
    /// Record a finished frame.
    pub fn record(&mut self, draw_calls: u32, triangles: u64) {
        self.frame += 1;
        self.draw_calls = draw_calls;
        self.triangles = triangles;
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and produces output. It never mutates the
/// scene; camera motion belongs to the caller.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given scene.
    fn render(&mut self, scene: &Scene) -> Self::Output;

    /// Counters for the last frame rendered.
    fn info(&self) -> RenderInfo;
}

/// Headless renderer that describes each frame as text.
///
/// Counts draw calls the same way the GPU backend does: one per non-empty
/// instanced batch.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    info: RenderInfo,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene) -> String {
        let instances = scene.instance_count();
        let draw_calls = u32::from(instances > 0);
        let triangles = u64::from(scene.geometry.triangle_count()) * u64::from(instances);
        self.info.record(draw_calls, triangles);

        let eye = scene.camera.position;
        let target = scene.camera.target;
        format!(
            "frame={} eye=({:.3}, {:.3}, {:.3}) target=({:.1}, {:.1}, {:.1}) instances={} draw_calls={} triangles={}",
            self.info.frame,
            eye.x,
            eye.y,
            eye.z,
            target.x,
            target.y,
            target.z,
            instances,
            draw_calls,
            triangles
        )
    }

    fn info(&self) -> RenderInfo {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instancing_scene::{DemoConfig, InstanceBuffers};

    #[test]
    fn empty_scene_issues_no_draw() {
        let scene = Scene::new(&DemoConfig::default(), InstanceBuffers::default());
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&scene);

        assert!(output.contains("instances=0"));
        assert_eq!(renderer.info().draw_calls, 0);
        assert_eq!(renderer.info().frame, 1);
    }

    #[test]
    fn instanced_scene_is_one_draw_call() {
        let config = DemoConfig {
            instance_count: 10,
            seed: Some(3),
            ..DemoConfig::default()
        };
        let scene = Scene::from_config(&config);
        let mut renderer = DebugTextRenderer::new();
        renderer.render(&scene);
        renderer.render(&scene);

        let info = renderer.info();
        assert_eq!(info.frame, 2);
        assert_eq!(info.draw_calls, 1);
        assert_eq!(info.triangles, 120);
    }

    #[test]
    fn info_starts_zeroed() {
        assert_eq!(DebugTextRenderer::new().info(), RenderInfo::default());
    }
}
