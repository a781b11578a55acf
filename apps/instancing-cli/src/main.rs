use anyhow::Context;
use clap::{Parser, Subcommand};
use instancing_render::{DebugTextRenderer, DemoState};
use instancing_scene::{DemoConfig, InstanceBuffers, Scene};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "instancing-cli", about = "CLI tool for the instanced drawing demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; subcommand flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Generate instance buffers and print a summary
    Generate {
        /// Number of instances
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// RNG seed for a reproducible layout
        #[arg(short, long)]
        seed: Option<u64>,
        /// Write the buffers as JSON to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Run the orbit headless and print each frame
    Orbit {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "36")]
        frames: u64,
        /// Orbit step in degrees per frame
        #[arg(long)]
        step: Option<f64>,
        /// Orbit radius
        #[arg(long)]
        radius: Option<f64>,
        /// Number of instances in the simulated scene
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Per-axis bounds across every instance.
struct Bounds {
    position_min: [f32; 3],
    position_max: [f32; 3],
    scale_min: [f32; 3],
    scale_max: [f32; 3],
}

fn bounds(buffers: &InstanceBuffers) -> Option<Bounds> {
    let mut out: Option<Bounds> = None;
    for i in 0..buffers.len() {
        let t = buffers.decompose(i)?;
        let (p, s) = (t.position.to_array(), t.scale.to_array());
        match &mut out {
            None => {
                out = Some(Bounds {
                    position_min: p,
                    position_max: p,
                    scale_min: s,
                    scale_max: s,
                });
            }
            Some(b) => {
                for axis in 0..3 {
                    b.position_min[axis] = b.position_min[axis].min(p[axis]);
                    b.position_max[axis] = b.position_max[axis].max(p[axis]);
                    b.scale_min[axis] = b.scale_min[axis].min(s[axis]);
                    b.scale_max[axis] = b.scale_max[axis].max(s[axis]);
                }
            }
        }
    }
    out
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The orbit command prints each frame's report itself
    let filter = if cli.verbose {
        "debug"
    } else {
        "info,instancing_render=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = DemoConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("instancing-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", instancing_common::crate_info());
            println!("scene: {}", instancing_scene::crate_info());
            println!("render: {}", instancing_render::crate_info());
        }
        Commands::Generate { count, seed, out } => {
            if let Some(count) = count {
                config.instance_count = count;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.validate()?;

            let scene = Scene::from_config(&config);
            let buffers = &scene.batch.buffers;
            println!(
                "Generated {} instances: transforms={} floats, colors={} floats",
                buffers.len(),
                buffers.transforms.len(),
                buffers.colors.len()
            );
            if let Some(b) = bounds(buffers) {
                println!(
                    "Position min={:.2?} max={:.2?}",
                    b.position_min, b.position_max
                );
                println!("Scale    min={:.3?} max={:.3?}", b.scale_min, b.scale_max);
            }

            if let Some(path) = out {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                serde_json::to_writer(std::io::BufWriter::new(file), buffers)?;
                println!("Wrote {}", path.display());
            }
            tracing::info!(instances = buffers.len(), seed = ?config.seed, "generate finished");
        }
        Commands::Orbit {
            frames,
            step,
            radius,
            count,
        } => {
            if let Some(step) = step {
                config.orbit_step_degrees = step;
            }
            if let Some(radius) = radius {
                config.orbit_radius = radius;
            }
            if let Some(count) = count {
                config.instance_count = count;
            }
            config.validate()?;

            let mut state = DemoState::from_config(&config);
            let mut renderer = DebugTextRenderer::new();
            for _ in 0..frames {
                let line = state.frame(&mut renderer);
                println!("theta={:>8.1} {line}", state.orbit.theta_degrees());
            }
            tracing::info!(
                frames,
                theta = state.orbit.theta_degrees(),
                "orbit simulation finished"
            );
        }
    }

    Ok(())
}
