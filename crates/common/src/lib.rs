//! Shared value types: instance transforms and 24-bit colors.

mod types;

pub use types::{InstanceTransform, Rgb};

pub fn crate_info() -> &'static str {
    "instancing-common v0.1.0"
}
