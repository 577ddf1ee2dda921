//! Camera state and its delivery to shaders.
//!
//! [`CameraState`] holds the per-frame transforms; the functions in
//! [`broadcast`] write them to global shader state, a single material, or a
//! compute shader.

pub mod broadcast;
mod state;

pub use broadcast::{
    CAMERA_PARAMETERS, CameraParameterSink, override_global_camera, setup_compute_camera,
    setup_global_camera, write_camera,
};
pub use state::CameraState;
