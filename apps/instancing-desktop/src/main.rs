use anyhow::Result;
use clap::Parser;
use instancing_render::DemoState;
use instancing_render_wgpu::{GpuContext, WgpuRenderer};
use instancing_scene::DemoConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "instancing-desktop", about = "Instanced cube field with an orbiting camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cube instances
    #[arg(short = 'n', long)]
    instances: Option<usize>,

    /// RNG seed for a reproducible layout
    #[arg(short, long)]
    seed: Option<u64>,

    /// Orbit step in degrees per frame
    #[arg(long)]
    step: Option<f64>,
}

impl Cli {
    fn demo_config(&self) -> Result<DemoConfig> {
        let mut config = DemoConfig::load_or_default(self.config.as_deref())?;
        if let Some(instances) = self.instances {
            config.instance_count = instances;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(step) = self.step {
            config.orbit_step_degrees = step;
        }
        config.validate()?;
        Ok(config)
    }
}

struct GpuApp {
    state: DemoState,
    msaa_samples: u32,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<WgpuRenderer>,
}

impl GpuApp {
    fn new(state: DemoState, msaa_samples: u32) -> Self {
        Self {
            state,
            msaa_samples,
            window: None,
            gpu: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Instanced Drawing")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let gpu = match GpuContext::new(window.clone(), size.width, size.height) {
            Ok(gpu) => gpu,
            Err(e) => {
                tracing::error!("failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = gpu.size();
        self.state.resize(width, height);
        let renderer = WgpuRenderer::new(
            &gpu.device,
            gpu.format(),
            width,
            height,
            gpu.sample_count(self.msaa_samples),
            &self.state.scene,
        );

        tracing::info!(
            instances = self.state.scene.instance_count(),
            backend = gpu.backend_name(),
            msaa = renderer.sample_count(),
            "renderer ready"
        );

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) {
                    gpu.resize(new_size.width, new_size.height);
                    let (width, height) = gpu.size();
                    self.state.resize(width, height);
                    renderer.resize(&gpu.device, width, height);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) else {
                    return;
                };

                let output = match gpu.next_frame() {
                    Ok(Some(texture)) => texture,
                    Ok(None) => return,
                    Err(e) => {
                        tracing::error!("{e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                self.state
                    .frame(&mut renderer.frame(&gpu.device, &gpu.queue, &view));

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("instancing-desktop starting");

    let config = cli.demo_config()?;
    // Instances are generated before any GPU resource exists
    let state = DemoState::from_config(&config);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state, config.msaa_samples);
    event_loop.run_app(&mut app)?;

    Ok(())
}
