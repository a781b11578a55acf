//! Per-instance attribute generation.
//!
//! Every instance consumes exactly ten uniform draws from the shared random
//! stream, in this order: position (3), rotation (3), scale (3), color (1).
//! Reproducing a seeded run depends on keeping that order.

use glam::{Mat4, Vec3};
use instancing_common::{InstanceTransform, Rgb};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

/// Floats per instance in the transform buffer (one column-major 4x4 matrix).
pub const MATRIX_STRIDE: usize = 16;
/// Floats per instance in the color buffer (RGB).
pub const COLOR_STRIDE: usize = 3;

/// Half extent of the cube positions are drawn from.
pub const POSITION_EXTENT: f64 = 20.0;
/// Smallest per-axis scale; the largest is `SCALE_MIN + 1` (exclusive).
pub const SCALE_MIN: f64 = 0.5;
/// Largest `f32` below `SCALE_MIN + 1`.
const SCALE_MAX_F32: f32 = f32::from_bits(0x3fbf_ffff);
const COLOR_RANGE: f64 = 0xff_ffff as f64;

/// Two parallel flat buffers holding one row per instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstanceBuffers {
    pub transforms: Vec<f32>,
    pub colors: Vec<f32>,
}

/// Borrowed view of a single instance row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceRecord<'a> {
    pub transform: &'a [f32],
    pub color: &'a [f32],
}

impl InstanceBuffers {
    /// Zero-filled buffers sized for `count` instances.
    pub fn with_count(count: usize) -> Self {
        Self {
            transforms: vec![0.0; count * MATRIX_STRIDE],
            colors: vec![0.0; count * COLOR_STRIDE],
        }
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.colors.len() / COLOR_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<InstanceRecord<'_>> {
        if index >= self.len() {
            return None;
        }
        let m = index * MATRIX_STRIDE;
        let c = index * COLOR_STRIDE;
        Some(InstanceRecord {
            transform: &self.transforms[m..m + MATRIX_STRIDE],
            color: &self.colors[c..c + COLOR_STRIDE],
        })
    }

    pub fn matrix(&self, index: usize) -> Option<Mat4> {
        self.record(index).map(|r| Mat4::from_cols_slice(r.transform))
    }

    /// Recover position, rotation and scale for one instance.
    pub fn decompose(&self, index: usize) -> Option<InstanceTransform> {
        self.matrix(index).map(|m| InstanceTransform::from_matrix(&m))
    }

    fn write(&mut self, index: usize, transform: &InstanceTransform, color: Rgb) {
        let m = index * MATRIX_STRIDE;
        let c = index * COLOR_STRIDE;
        self.transforms[m..m + MATRIX_STRIDE]
            .copy_from_slice(&transform.to_matrix().to_cols_array());
        self.colors[c..c + COLOR_STRIDE].copy_from_slice(&color.to_array());
    }
}

/// Generate `count` randomly placed, rotated, scaled and colored instances.
pub fn generate_instances<R: Rng + ?Sized>(count: usize, rng: &mut R) -> InstanceBuffers {
    let mut buffers = InstanceBuffers::with_count(count);
    for i in 0..count {
        let (transform, color) = sample_instance(rng);
        buffers.write(i, &transform, color);
    }
    tracing::debug!(count, "generated instance buffers");
    buffers
}

fn sample_instance<R: Rng + ?Sized>(rng: &mut R) -> (InstanceTransform, Rgb) {
    let mut unit = || rng.random::<f64>();

    let position = Vec3::new(
        (unit() * 2.0 * POSITION_EXTENT - POSITION_EXTENT) as f32,
        (unit() * 2.0 * POSITION_EXTENT - POSITION_EXTENT) as f32,
        (unit() * 2.0 * POSITION_EXTENT - POSITION_EXTENT) as f32,
    );
    let euler = Vec3::new(
        (unit() * TAU) as f32,
        (unit() * TAU) as f32,
        (unit() * TAU) as f32,
    );
    let scale = Vec3::new(
        scale_from_unit(unit()),
        scale_from_unit(unit()),
        scale_from_unit(unit()),
    );
    let hex = (unit() * COLOR_RANGE).floor() as u32;

    (
        InstanceTransform::from_euler(position, euler, scale),
        Rgb::from_hex_linear(hex),
    )
}

/// Map a draw in [0, 1) to a scale in [0.5, 1.5). Draws just below 1 would
/// otherwise round up to 1.5 when narrowed to `f32`.
fn scale_from_unit(u: f64) -> f32 {
    ((u + SCALE_MIN) as f32).min(SCALE_MAX_F32)
}
