//! # framekit graphics
//!
//! Frame-rendering utilities between a renderer and a command-submission API.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`binder`] - bind render targets and clear them through a [`ClearFlag`]
//! - [`camera`] - broadcast [`CameraState`] to global state, a material or a compute shader
//! - [`fullscreen`] - full-screen passes drawn as a single procedural triangle
//! - [`flatten`] - column-major matrix flattening for compute parameters
//! - [`backend`] - the [`RenderContext`] seam, with a recording [`DummyContext`]
//!
//! ## Example
//!
//! ```
//! use framekit_core::math::{Vec3, look_at_rh, perspective_rh};
//! use framekit_graphics::{
//!     CameraState, CommandBuffer, DummyContext, FullScreenPass, Material, RenderContext,
//!     RenderTargetId, TextureFormat, setup_global_camera,
//! };
//!
//! let mut ctx = DummyContext::new();
//! let view = look_at_rh(&Vec3::new(0.0, 2.0, 5.0), &Vec3::zeros(), &Vec3::y());
//! let camera = CameraState::new(view, perspective_rh(1.0, 1.7, 0.1, 100.0), 1920, 1080);
//!
//! let tonemap = Material::new("Hidden/Tonemap");
//! let backbuffer = RenderTargetId::new(0, TextureFormat::Bgra8Unorm);
//!
//! ctx.submit(|cmd: &mut CommandBuffer| {
//!     setup_global_camera(&camera, cmd);
//!     FullScreenPass::new(&tonemap).draw_to_color(cmd, backbuffer);
//! });
//!
//! assert!(ctx.globals().matrix("_ViewMatrix").is_some());
//! ```

pub mod backend;
pub mod binder;
pub mod camera;
pub mod command;
pub mod error;
pub mod flatten;
pub mod fullscreen;
pub mod materials;
pub mod overlay;
pub mod profiling;
pub mod types;

pub use backend::{DummyContext, RenderContext};
pub use binder::{
    RenderTargetSet, RenderTargetSetup, clear_cubemap, record_bind, set_render_target,
};
pub use camera::{CameraState, override_global_camera, setup_compute_camera, setup_global_camera};
pub use command::{Command, CommandBuffer, CommandBufferPool, MeshTopology, ProceduralDraw};
pub use error::GraphicsError;
pub use flatten::{FlattenedMatrix, MatrixFlattener, flatten_matrix};
pub use fullscreen::FullScreenPass;
pub use materials::{ComputeShader, Material, MaterialPropertyBlock};
pub use overlay::OverlayCursor;
pub use profiling::ProfilingSample;
pub use types::{ClearFlag, Color, CubemapFace, RenderTargetId, TextureFormat};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// Logs the crate versions; call once at startup after installing a logger.
pub fn init() {
    framekit_core::init();
    log::info!("framekit graphics v{} initialized", VERSION);
}
