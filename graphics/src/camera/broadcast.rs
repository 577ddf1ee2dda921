//! Camera uniform broadcast.
//!
//! The same nine camera quantities can be delivered three ways:
//!
//! | function | sink | scope |
//! |----------|------|-------|
//! | [`setup_global_camera`] | global shader state via a command buffer | every later draw |
//! | [`override_global_camera`] | one material's parameter block | draws using that material |
//! | [`setup_compute_camera`] | compute parameters via a command buffer | one compute shader |
//!
//! Every sink receives the quantities in [`CAMERA_PARAMETERS`] order.

use framekit_core::math::{Mat4, Vec4};

use crate::command::CommandBuffer;
use crate::flatten::set_matrix_cs;
use crate::materials::{ComputeShader, Material};

use super::state::CameraState;

/// Shader parameter names of the camera quantities, in upload order.
pub const CAMERA_PARAMETERS: [&str; 9] = [
    VIEW_MATRIX,
    INV_VIEW_MATRIX,
    PROJ_MATRIX,
    INV_PROJ_MATRIX,
    VIEW_PROJ_MATRIX,
    INV_VIEW_PROJ_MATRIX,
    INV_PROJ_PARAM,
    SCREEN_SIZE,
    PREV_VIEW_PROJ_MATRIX,
];

pub const VIEW_MATRIX: &str = "_ViewMatrix";
pub const INV_VIEW_MATRIX: &str = "_InvViewMatrix";
pub const PROJ_MATRIX: &str = "_ProjMatrix";
pub const INV_PROJ_MATRIX: &str = "_InvProjMatrix";
pub const VIEW_PROJ_MATRIX: &str = "_ViewProjMatrix";
pub const INV_VIEW_PROJ_MATRIX: &str = "_InvViewProjMatrix";
pub const INV_PROJ_PARAM: &str = "_InvProjParam";
pub const SCREEN_SIZE: &str = "_ScreenSize";
pub const PREV_VIEW_PROJ_MATRIX: &str = "_PrevViewProjMatrix";

/// Destination for camera quantities.
pub trait CameraParameterSink {
    /// Write a matrix quantity.
    fn matrix(&mut self, name: &str, value: &Mat4);

    /// Write a vector quantity.
    fn vector(&mut self, name: &str, value: &Vec4);
}

/// Write all nine camera quantities to `sink` in [`CAMERA_PARAMETERS`] order.
pub fn write_camera(camera: &CameraState, sink: &mut impl CameraParameterSink) {
    sink.matrix(VIEW_MATRIX, camera.view());
    sink.matrix(INV_VIEW_MATRIX, camera.inv_view());
    sink.matrix(PROJ_MATRIX, camera.proj());
    sink.matrix(INV_PROJ_MATRIX, camera.inv_proj());
    sink.matrix(VIEW_PROJ_MATRIX, camera.view_proj());
    sink.matrix(INV_VIEW_PROJ_MATRIX, camera.inv_view_proj());
    sink.vector(INV_PROJ_PARAM, camera.inv_proj_param());
    sink.vector(SCREEN_SIZE, camera.screen_size());
    sink.matrix(PREV_VIEW_PROJ_MATRIX, camera.prev_view_proj());
}

struct GlobalSink<'a>(&'a mut CommandBuffer);

impl CameraParameterSink for GlobalSink<'_> {
    fn matrix(&mut self, name: &str, value: &Mat4) {
        self.0.set_global_matrix(name, value);
    }

    fn vector(&mut self, name: &str, value: &Vec4) {
        self.0.set_global_vector(name, value);
    }
}

impl CameraParameterSink for Material {
    fn matrix(&mut self, name: &str, value: &Mat4) {
        self.set_matrix(name, value);
    }

    fn vector(&mut self, name: &str, value: &Vec4) {
        self.set_vector(name, value);
    }
}

struct ComputeSink<'a> {
    cmd: &'a mut CommandBuffer,
    shader: &'a ComputeShader,
}

impl CameraParameterSink for ComputeSink<'_> {
    fn matrix(&mut self, name: &str, value: &Mat4) {
        set_matrix_cs(self.cmd, self.shader, name, value);
    }

    fn vector(&mut self, name: &str, value: &Vec4) {
        self.cmd.set_compute_vector_param(self.shader, name, value);
    }
}

/// Record the camera quantities as global shader state.
///
/// All nine writes land in `cmd`, so they become visible together when the
/// buffer is executed. Record this before any draw that reads camera state.
pub fn setup_global_camera(camera: &CameraState, cmd: &mut CommandBuffer) {
    write_camera(camera, &mut GlobalSink(cmd));
}

/// Write the camera quantities onto one material only.
///
/// Used by passes that render from a different camera than the frame's (shadow
/// maps, reduced-resolution passes). Global state is left untouched, so other
/// draws keep seeing the global camera.
pub fn override_global_camera(camera: &CameraState, material: &mut Material) {
    write_camera(camera, material);
}

/// Record the camera quantities as parameters of a compute shader.
///
/// Matrices are uploaded as flat column-major float arrays; the two vectors
/// are set directly.
pub fn setup_compute_camera(camera: &CameraState, shader: &ComputeShader, cmd: &mut CommandBuffer) {
    write_camera(camera, &mut ComputeSink { cmd, shader });
}
