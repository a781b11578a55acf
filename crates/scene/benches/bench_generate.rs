use std::hint::black_box;
use std::time::Instant;

use instancing_scene::{OrbitState, PerspectiveCamera, generate_instances};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_generate(count: usize, iterations: usize) {
    let mut rng = StdRng::seed_from_u64(42);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(generate_instances(black_box(count), &mut rng));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  generate ({count} instances, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_orbit(frames: usize) {
    let mut orbit = OrbitState::default();
    let mut camera = PerspectiveCamera::default();

    let start = Instant::now();
    for _ in 0..frames {
        orbit.apply(black_box(&mut camera));
    }
    let elapsed = start.elapsed();
    let per_frame = elapsed / frames as u32;
    println!("  orbit update ({frames} frames): {per_frame:?}/frame, total {elapsed:?}");
}

fn main() {
    println!("=== Instance Generation Benchmarks ===\n");

    println!("Generate:");
    bench_generate(100, 1000);
    bench_generate(2000, 100);
    bench_generate(20000, 10);

    println!("\nOrbit:");
    bench_orbit(100_000);

    println!("\n=== Done ===");
}
