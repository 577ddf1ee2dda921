//! Math type aliases and helper functions.
//!
//! All camera and shader-parameter math is `f32`, matching what the GPU
//! consumes. Matrices are nalgebra column vectors, indexed `m[(row, col)]`.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Build a right-handed perspective projection with depth range [0, 1].
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Right-handed orthographic projection for a view-space box, depth range [0, 1].
///
/// `near` may be zero (shadow cameras often start at the light). View-space
/// z maps linearly: `-near` to depth 0 and `-far` to depth 1.
pub fn orthographic_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let mut m = Mat4::identity();
    m[(0, 0)] = 2.0 / (right - left);
    m[(1, 1)] = 2.0 / (top - bottom);
    m[(2, 2)] = 1.0 / (near - far);
    m[(0, 3)] = (left + right) / (left - right);
    m[(1, 3)] = (bottom + top) / (bottom - top);
    m[(2, 3)] = near / (near - far);
    m
}

/// Right-handed look-at view matrix (world to view).
pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let eye_point = nalgebra::Point3::from(*eye);
    let target_point = nalgebra::Point3::from(*target);
    nalgebra::Isometry3::look_at_rh(&eye_point, &target_point, up).to_homogeneous()
}

/// Invert `m`, falling back to identity when it is singular.
///
/// Camera matrices are always invertible in practice; a singular one means the
/// caller fed a degenerate projection, which is logged rather than propagated.
pub fn inverse_or_identity(m: &Mat4) -> Mat4 {
    m.try_inverse().unwrap_or_else(|| {
        log::warn!("Singular matrix in inverse_or_identity, using identity");
        Mat4::identity()
    })
}
