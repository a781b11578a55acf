use crate::renderer::{RenderInfo, Renderer};
use instancing_scene::{DemoConfig, OrbitState, Scene};

/// Application state owned by the display loop.
///
/// The scene is built once, before the first frame; afterwards only the
/// camera changes, and only through [`DemoState::frame`].
#[derive(Debug, Clone)]
pub struct DemoState {
    pub scene: Scene,
    pub orbit: OrbitState,
    /// Counters reported after the most recent frame.
    pub last_report: RenderInfo,
}

impl DemoState {
    pub fn new(scene: Scene, orbit: OrbitState) -> Self {
        Self {
            scene,
            orbit,
            last_report: RenderInfo::default(),
        }
    }

    /// Generate instances and set up the orbit from `config`.
    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(Scene::from_config(config), config.orbit())
    }

    /// Advance the orbit, aim the camera at the origin, submit one frame and
    /// report its draw calls.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> R::Output {
        self.orbit.apply(&mut self.scene.camera);
        let output = renderer.render(&self.scene);

        let info = renderer.info();
        self.last_report = info;
        tracing::info!(
            frame = info.frame,
            draw_calls = info.draw_calls,
            theta = self.orbit.theta_degrees(),
            "draw calls: {}",
            info.draw_calls
        );
        output
    }

    /// Match the camera aspect ratio to a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.camera.set_aspect(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DebugTextRenderer;
    use glam::Vec3;
    use instancing_scene::InstanceBuffers;

    fn small_state() -> DemoState {
        DemoState::from_config(&DemoConfig {
            instance_count: 4,
            seed: Some(11),
            ..DemoConfig::default()
        })
    }

    /// Records the camera position seen by each render call.
    #[derive(Default)]
    struct RecordingRenderer {
        eyes: Vec<Vec3>,
        info: RenderInfo,
    }

    impl Renderer for RecordingRenderer {
        type Output = ();

        fn render(&mut self, scene: &Scene) -> Self::Output {
            self.eyes.push(scene.camera.position);
            self.info.record(1, 0);
        }

        fn info(&self) -> RenderInfo {
            self.info
        }
    }

    #[test]
    fn first_frame_moves_camera_ten_degrees() {
        let mut state = small_state();
        let mut renderer = DebugTextRenderer::new();
        let output = state.frame(&mut renderer);

        assert_eq!(state.orbit.theta_degrees(), 10.0);
        assert!(
            state
                .scene
                .camera
                .position
                .abs_diff_eq(Vec3::new(0.868, 0.868, 4.924), 1e-3)
        );
        assert!(output.contains("draw_calls=1"));
        assert!(output.contains("eye=(0.868, 0.868, 4.924)"));
    }

    #[test]
    fn each_frame_renders_once_after_orbit() {
        let mut state = small_state();
        let mut renderer = RecordingRenderer::default();
        for _ in 0..36 {
            state.frame(&mut renderer);
        }

        assert_eq!(renderer.eyes.len(), 36);
        assert_eq!(renderer.info().frame, 36);
        assert_eq!(state.orbit.theta_degrees(), 360.0);
        // The renderer sees the already-advanced camera
        assert!(renderer.eyes[0].abs_diff_eq(Vec3::new(0.868, 0.868, 4.924), 1e-3));
        assert!(renderer.eyes[35].abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-4));
    }

    #[test]
    fn frame_reports_draw_calls_of_that_frame() {
        let mut state = small_state();
        assert_eq!(state.last_report, RenderInfo::default());

        let mut renderer = DebugTextRenderer::new();
        state.frame(&mut renderer);
        assert_eq!(state.last_report.frame, 1);
        assert_eq!(state.last_report.draw_calls, 1);
        assert_eq!(state.last_report.triangles, 4 * 12);

        state.frame(&mut renderer);
        assert_eq!(state.last_report, renderer.info());
        assert_eq!(state.last_report.frame, 2);

        let mut empty = DemoState::new(
            Scene::new(&DemoConfig::default(), InstanceBuffers::default()),
            OrbitState::default(),
        );
        empty.frame(&mut DebugTextRenderer::new());
        assert_eq!(empty.last_report.draw_calls, 0);
    }

    #[test]
    fn frames_never_touch_instances() {
        let mut state = small_state();
        let before = state.scene.batch.clone();
        let mut renderer = DebugTextRenderer::new();
        for _ in 0..10 {
            state.frame(&mut renderer);
        }
        assert_eq!(state.scene.batch, before);
    }

    #[test]
    fn frame_works_through_trait_object() {
        let mut state = DemoState::new(
            Scene::new(&DemoConfig::default(), InstanceBuffers::default()),
            OrbitState::default(),
        );
        let mut renderer = DebugTextRenderer::new();
        let dynamic: &mut dyn Renderer<Output = String> = &mut renderer;
        let output = state.frame(dynamic);
        assert!(output.contains("frame=1"));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut state = small_state();
        state.resize(1000, 500);
        assert_eq!(state.scene.camera.aspect, 2.0);
    }
}
