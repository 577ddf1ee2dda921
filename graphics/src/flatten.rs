//! Matrix flattening for compute parameter uploads.
//!
//! Compute parameter channels accept only flat float arrays. Matrices are
//! written column by column: all four rows of column 0, then column 1, and so
//! on, so `out[4 * c + r] == m[(r, c)]`. Shaders read the array back as four
//! consecutive column vectors. Both sides must agree on this layout.

use std::cell::RefCell;

use framekit_core::math::{Mat4, Vec4};

use crate::command::CommandBuffer;
use crate::materials::ComputeShader;

/// A 4x4 matrix flattened column by column.
pub type FlattenedMatrix = [f32; 16];

/// Flatten one matrix in column-major order.
pub fn flatten_matrix(m: &Mat4) -> FlattenedMatrix {
    let mut out = [0.0; 16];
    for c in 0..4 {
        for r in 0..4 {
            out[4 * c + r] = m[(r, c)];
        }
    }
    out
}

/// Reusable scratch buffer for flattening.
///
/// Each call overwrites the whole buffer and returns exactly the elements it
/// wrote, so a short upload never carries the tail of a longer earlier one.
#[derive(Debug, Default)]
pub struct MatrixFlattener {
    scratch: Vec<f32>,
}

impl MatrixFlattener {
    /// Create an empty flattener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten one matrix (16 floats).
    pub fn flatten(&mut self, m: &Mat4) -> &[f32] {
        self.flatten_array(std::slice::from_ref(m))
    }

    /// Flatten `matrices` back to back (16 floats each, input order).
    pub fn flatten_array(&mut self, matrices: &[Mat4]) -> &[f32] {
        self.scratch.clear();
        self.scratch.reserve(matrices.len() * 16);
        for m in matrices {
            self.scratch.extend_from_slice(&flatten_matrix(m));
        }
        &self.scratch
    }

    /// Flatten `vectors` back to back (4 floats each, `x y z w`).
    pub fn flatten_vectors(&mut self, vectors: &[Vec4]) -> &[f32] {
        self.scratch.clear();
        self.scratch.reserve(vectors.len() * 4);
        for v in vectors {
            self.scratch.extend_from_slice(&[v.x, v.y, v.z, v.w]);
        }
        &self.scratch
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

thread_local! {
    static SCRATCH: RefCell<MatrixFlattener> = RefCell::new(MatrixFlattener::new());
}

fn with_scratch<R>(f: impl FnOnce(&mut MatrixFlattener) -> R) -> R {
    SCRATCH.with(|scratch| f(&mut scratch.borrow_mut()))
}

/// Set a matrix parameter on a compute shader.
pub fn set_matrix_cs(cmd: &mut CommandBuffer, shader: &ComputeShader, name: &str, m: &Mat4) {
    with_scratch(|scratch| cmd.set_compute_float_params(shader, name, scratch.flatten(m)));
}

/// Set a matrix array parameter on a compute shader (e.g. one matrix per light).
pub fn set_matrix_array_cs(
    cmd: &mut CommandBuffer,
    shader: &ComputeShader,
    name: &str,
    matrices: &[Mat4],
) {
    with_scratch(|scratch| {
        cmd.set_compute_float_params(shader, name, scratch.flatten_array(matrices))
    });
}

/// Set a vector array parameter on a compute shader.
pub fn set_vector_array_cs(
    cmd: &mut CommandBuffer,
    shader: &ComputeShader,
    name: &str,
    vectors: &[Vec4],
) {
    with_scratch(|scratch| {
        cmd.set_compute_float_params(shader, name, scratch.flatten_vectors(vectors))
    });
}
