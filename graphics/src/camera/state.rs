//! Per-frame camera snapshot.

use framekit_core::math::{Mat4, Vec4, inverse_or_identity};

/// Camera transforms for one frame, as consumed by shaders.
///
/// Built once per frame by the camera owner. The broadcaster only reads it.
/// Call [`update`](Self::update) at the start of each new frame to keep
/// `prev_view_proj` pointing at the previous frame's view-projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    view: Mat4,
    inv_view: Mat4,
    proj: Mat4,
    inv_proj: Mat4,
    view_proj: Mat4,
    inv_view_proj: Mat4,
    inv_proj_param: Vec4,
    screen_size: Vec4,
    prev_view_proj: Mat4,
}

impl CameraState {
    /// Build a snapshot from a world-to-view matrix, a GPU-ready projection
    /// matrix and the target size in pixels.
    ///
    /// On the first frame there is no history, so the previous
    /// view-projection equals the current one.
    pub fn new(view: Mat4, proj: Mat4, width: u32, height: u32) -> Self {
        let view_proj = proj * view;
        Self {
            inv_view: inverse_or_identity(&view),
            inv_proj: inverse_or_identity(&proj),
            inv_view_proj: inverse_or_identity(&view_proj),
            inv_proj_param: inverse_projection_params(&proj),
            screen_size: screen_size(width, height),
            prev_view_proj: view_proj,
            view,
            proj,
            view_proj,
        }
    }

    /// Advance to a new frame, keeping the current view-projection as history.
    pub fn update(&mut self, view: Mat4, proj: Mat4, width: u32, height: u32) {
        let prev_view_proj = self.view_proj;
        *self = Self::new(view, proj, width, height);
        self.prev_view_proj = prev_view_proj;
    }

    /// World-to-view matrix.
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// View-to-world matrix.
    pub fn inv_view(&self) -> &Mat4 {
        &self.inv_view
    }

    /// Projection matrix.
    pub fn proj(&self) -> &Mat4 {
        &self.proj
    }

    /// Inverse projection matrix.
    pub fn inv_proj(&self) -> &Mat4 {
        &self.inv_proj
    }

    /// `proj * view`.
    pub fn view_proj(&self) -> &Mat4 {
        &self.view_proj
    }

    /// Inverse of `proj * view`.
    pub fn inv_view_proj(&self) -> &Mat4 {
        &self.inv_view_proj
    }

    /// Depth-linearization parameters derived from the projection.
    ///
    /// For a perspective projection `1 / (z * depth + w)` gives view-space z.
    /// For an orthographic one (see [`is_orthographic`](Self::is_orthographic))
    /// the mapping is linear: `z * depth + w`. A degenerate projection, such
    /// as a perspective near plane of zero, yields all zeros.
    pub fn inv_proj_param(&self) -> &Vec4 {
        &self.inv_proj_param
    }

    /// Returns true if the projection is orthographic.
    pub fn is_orthographic(&self) -> bool {
        is_orthographic(&self.proj)
    }

    /// `(width, height, 1 / width, 1 / height)`.
    pub fn screen_size(&self) -> &Vec4 {
        &self.screen_size
    }

    /// Previous frame's view-projection.
    pub fn prev_view_proj(&self) -> &Mat4 {
        &self.prev_view_proj
    }
}

// Perspective: view_z = 1 / (z * depth + w); x and y correct oblique frusta.
// Orthographic: view_z = z * depth + w, with x and y zero.
fn inverse_projection_params(p: &Mat4) -> Vec4 {
    let params = if is_orthographic(p) {
        let p22 = p[(2, 2)];
        Vec4::new(0.0, 0.0, 1.0 / p22, -p[(2, 3)] / p22)
    } else {
        let p23 = p[(2, 3)];
        Vec4::new(
            p[(2, 0)] / (p[(0, 0)] * p23),
            p[(2, 1)] / (p[(1, 1)] * p23),
            -1.0 / p23,
            (-p[(2, 2)] + p[(2, 0)] * p[(0, 2)] / p[(0, 0)] + p[(2, 1)] * p[(1, 2)] / p[(1, 1)]) / p23,
        )
    };
    if params.iter().all(|v| v.is_finite()) {
        params
    } else {
        log::warn!("Degenerate projection in inverse_projection_params, using zeros");
        Vec4::zeros()
    }
}

fn is_orthographic(p: &Mat4) -> bool {
    p[(3, 2)] == 0.0 && p[(3, 3)] == 1.0
}

fn screen_size(width: u32, height: u32) -> Vec4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec4::new(w, h, 1.0 / w, 1.0 / h)
}

static_assertions::assert_impl_all!(CameraState: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use framekit_core::math::{Vec3, look_at_rh, orthographic_rh, perspective_rh};

    fn view() -> Mat4 {
        look_at_rh(&Vec3::new(0.0, 1.0, 4.0), &Vec3::zeros(), &Vec3::y())
    }

    fn proj() -> Mat4 {
        perspective_rh(1.0, 2.0, 0.1, 100.0)
    }

    #[test]
    fn test_derived_quantities() {
        let camera = CameraState::new(view(), proj(), 1920, 1080);

        assert_eq!(*camera.view_proj(), proj() * view());
        assert!((camera.view() * camera.inv_view() - Mat4::identity()).norm() < 1e-4);
        assert!((camera.proj() * camera.inv_proj() - Mat4::identity()).norm() < 1e-4);
        assert!((camera.view_proj() * camera.inv_view_proj() - Mat4::identity()).norm() < 1e-3);
        assert_eq!(camera.prev_view_proj(), camera.view_proj());
    }

    #[test]
    fn test_screen_size() {
        let camera = CameraState::new(view(), proj(), 800, 400);
        assert_eq!(*camera.screen_size(), Vec4::new(800.0, 400.0, 1.0 / 800.0, 1.0 / 400.0));
    }

    #[test]
    fn test_zero_size_does_not_divide_by_zero() {
        let camera = CameraState::new(view(), proj(), 0, 0);
        assert!(camera.screen_size().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_inv_proj_param_linearizes_depth() {
        // 1 / (param.z * device_depth + param.w) recovers view-space z.
        let p = proj();
        let camera = CameraState::new(view(), p, 16, 16);
        assert!(!camera.is_orthographic());
        let param = *camera.inv_proj_param();
        assert_eq!(param.x, 0.0);
        assert_eq!(param.y, 0.0);

        for z_view in [-0.1_f32, -5.0] {
            let clip = p * Vec4::new(0.0, 0.0, z_view, 1.0);
            let device_depth = clip.z / clip.w;
            let linear = 1.0 / (param.z * device_depth + param.w);
            assert!((linear - z_view).abs() < 1e-2 * z_view.abs(), "{linear} vs {z_view}");
        }
    }

    #[test]
    fn test_orthographic_inv_proj_param_linearizes_depth() {
        // param.z * device_depth + param.w recovers view-space z.
        for near in [0.0_f32, 0.5] {
            let p = orthographic_rh(-5.0, 5.0, -5.0, 5.0, near, 50.0);
            let camera = CameraState::new(view(), p, 1024, 1024);
            assert!(camera.is_orthographic());

            let param = *camera.inv_proj_param();
            assert!(param.iter().all(|v| v.is_finite()), "{param:?}");
            assert_eq!((param.x, param.y), (0.0, 0.0));

            for z_view in [-near - 0.25, -10.0, -49.0] {
                let clip = p * Vec4::new(0.0, 0.0, z_view, 1.0);
                let device_depth = clip.z / clip.w;
                let linear = param.z * device_depth + param.w;
                assert!((linear - z_view).abs() < 1e-3, "{linear} vs {z_view}");
            }
        }
    }

    #[test]
    fn test_degenerate_projection_gives_finite_params() {
        let camera = CameraState::new(view(), perspective_rh(1.0, 1.0, 0.0, 100.0), 64, 64);
        assert!(!camera.is_orthographic());
        assert_eq!(*camera.inv_proj_param(), Vec4::zeros());
    }

    #[test]
    fn test_update_rolls_history() {
        let mut camera = CameraState::new(view(), proj(), 64, 64);
        let first = *camera.view_proj();

        let moved = look_at_rh(&Vec3::new(2.0, 1.0, 4.0), &Vec3::zeros(), &Vec3::y());
        camera.update(moved, proj(), 64, 64);

        assert_eq!(*camera.prev_view_proj(), first);
        assert_eq!(*camera.view_proj(), proj() * moved);
    }
}
