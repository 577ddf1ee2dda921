//! # framekit core
//!
//! Small building blocks shared by the framekit crates: f32 math aliases over
//! nalgebra, allocation pools for per-frame objects, and Tracy profiling hooks.

pub mod math;
pub mod pool;
pub mod profiling;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version. Call once at startup.
pub fn init() {
    log::info!("framekit core v{} initialized", VERSION);
}
