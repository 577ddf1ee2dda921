//! Common utilities for frame integration tests.
//!
//! Every test records against a [`DummyContext`] and inspects the executed
//! command log.

#![allow(dead_code)]

use framekit_core::math::{Vec3, look_at_rh, perspective_rh};
use framekit_graphics::{CameraState, Command, DummyContext, RenderTargetId, TextureFormat};

pub const GBUFFER0: RenderTargetId = RenderTargetId::new(100, TextureFormat::Rgba8UnormSrgb);
pub const GBUFFER1: RenderTargetId = RenderTargetId::new(101, TextureFormat::Rgb10a2Unorm);
pub const GBUFFER2: RenderTargetId = RenderTargetId::new(102, TextureFormat::Rgba16Float);
pub const DEPTH: RenderTargetId = RenderTargetId::new(103, TextureFormat::Depth24PlusStencil8);
pub const REFLECTION_PROBE: RenderTargetId = RenderTargetId::new(104, TextureFormat::Rgba16Float);

/// Install a test logger once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fresh recording context with logging installed.
pub fn context() -> DummyContext {
    init_logging();
    DummyContext::new()
}

/// Camera at `eye` looking at the origin, 1280x720.
pub fn camera_at(eye: Vec3) -> CameraState {
    let view = look_at_rh(&eye, &Vec3::zeros(), &Vec3::y());
    CameraState::new(view, perspective_rh(1.0, 16.0 / 9.0, 0.1, 500.0), 1280, 720)
}

/// Names written by `SetGlobal` / `SetComputeParam` commands, in order.
pub fn parameter_names(commands: &[Command]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::SetGlobal { name, .. } | Command::SetComputeParam { name, .. } => {
                Some(name.clone())
            }
            _ => None,
        })
        .collect()
}

/// Count commands matching `pred`.
pub fn count(commands: &[Command], pred: impl Fn(&Command) -> bool) -> usize {
    commands.iter().filter(|c| pred(c)).count()
}
