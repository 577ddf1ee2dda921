//! Render target binding and clearing.
//!
//! A [`RenderTargetSet`] describes what to bind; a [`RenderTargetSetup`] adds
//! the clear to perform right after binding. [`set_render_target`] records
//! both into one pooled command buffer and submits it, so no other command
//! can observe a bound but not yet cleared target.
//!
//! # Example
//!
//! ```
//! use framekit_graphics::backend::DummyContext;
//! use framekit_graphics::binder::{RenderTargetSet, RenderTargetSetup, set_render_target};
//! use framekit_graphics::types::{ClearFlag, RenderTargetId, TextureFormat};
//!
//! let mut ctx = DummyContext::new();
//! let hdr = RenderTargetId::new(1, TextureFormat::Rgba16Float);
//!
//! let setup = RenderTargetSetup::new(RenderTargetSet::color(hdr)).with_clear(ClearFlag::COLOR);
//! set_render_target(&mut ctx, &setup);
//!
//! assert_eq!(ctx.submission_count(), 1);
//! assert_eq!(ctx.executed().len(), 2);
//! ```

use crate::backend::RenderContext;
use crate::command::CommandBuffer;
use crate::types::{ClearFlag, Color, CubemapFace, RenderTargetId};

/// Color targets plus an optional depth target, at one mip level and face.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTargetSet {
    colors: Vec<RenderTargetId>,
    depth: Option<RenderTargetId>,
    mip_level: u32,
    face: CubemapFace,
}

impl RenderTargetSet {
    /// A single color target using its own default depth.
    pub fn color(color: RenderTargetId) -> Self {
        Self::multiple(&[color], None)
    }

    /// A single color target with an explicit depth target.
    pub fn color_depth(color: RenderTargetId, depth: RenderTargetId) -> Self {
        Self::multiple(&[color], Some(depth))
    }

    /// Several color targets (MRT).
    ///
    /// Multiple-target binds always need a depth target. When `depth` is
    /// `None` and more than one color target is given, the first color target
    /// is bound again as the depth target; it must then have no depth bits.
    pub fn multiple(colors: &[RenderTargetId], depth: Option<RenderTargetId>) -> Self {
        Self {
            colors: colors.to_vec(),
            depth,
            mip_level: 0,
            face: CubemapFace::Unknown,
        }
    }

    /// Render into mip level `mip_level` (default 0).
    pub fn with_mip_level(mut self, mip_level: u32) -> Self {
        self.mip_level = mip_level;
        self
    }

    /// Render into one cubemap face (default [`CubemapFace::Unknown`]).
    pub fn with_cubemap_face(mut self, face: CubemapFace) -> Self {
        self.face = face;
        self
    }

    /// Color targets in attachment order.
    pub fn colors(&self) -> &[RenderTargetId] {
        &self.colors
    }

    /// Explicitly requested depth target.
    pub fn depth(&self) -> Option<RenderTargetId> {
        self.depth
    }

    /// Depth target actually bound, including the MRT substitution.
    pub fn bound_depth(&self) -> Option<RenderTargetId> {
        match (self.depth, self.colors.as_slice()) {
            (Some(depth), _) => Some(depth),
            (None, [first, _, ..]) => Some(*first),
            (None, _) => None,
        }
    }

    /// Mip level.
    pub fn mip_level(&self) -> u32 {
        self.mip_level
    }

    /// Cubemap face.
    pub fn face(&self) -> CubemapFace {
        self.face
    }
}

/// A target set together with the clear performed after binding it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTargetSetup {
    /// Targets to bind.
    pub targets: RenderTargetSet,
    /// What to clear. [`ClearFlag::NONE`] records no clear at all.
    pub clear: ClearFlag,
    /// Color written by a color clear.
    pub clear_color: Color,
}

impl RenderTargetSetup {
    /// Bind `targets` without clearing; clear color defaults to opaque black.
    pub fn new(targets: RenderTargetSet) -> Self {
        Self {
            targets,
            clear: ClearFlag::NONE,
            clear_color: Color::BLACK,
        }
    }

    /// Set the clear flag.
    pub fn with_clear(mut self, clear: ClearFlag) -> Self {
        self.clear = clear;
        self
    }

    /// Set the clear color.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}

impl From<RenderTargetSet> for RenderTargetSetup {
    fn from(targets: RenderTargetSet) -> Self {
        Self::new(targets)
    }
}

/// Record a bind of `targets` into `cmd`. Never clears.
pub fn record_bind(cmd: &mut CommandBuffer, targets: &RenderTargetSet) {
    cmd.set_render_target(
        targets.colors(),
        targets.bound_depth(),
        targets.mip_level(),
        targets.face(),
    );
}

/// Record a bind followed by the clear requested in `setup`.
pub fn record_setup(cmd: &mut CommandBuffer, setup: &RenderTargetSetup) {
    record_bind(cmd, &setup.targets);
    if setup.clear != ClearFlag::NONE {
        cmd.clear_render_target(
            setup.clear.has_depth(),
            setup.clear.has_color(),
            setup.clear_color,
        );
    }
}

/// Bind and clear as one submission on `ctx`.
pub fn set_render_target<C: RenderContext>(ctx: &mut C, setup: &RenderTargetSetup) {
    log::trace!(
        "set_render_target: {} color target(s), clear {:?}",
        setup.targets.colors().len(),
        setup.clear
    );
    ctx.submit(|cmd| record_setup(cmd, setup));
}

/// Clear all six faces of a cubemap target to `color`.
///
/// Faces are bound and cleared in index order at mip 0, and the twelve
/// commands go out in a single submission.
pub fn clear_cubemap<C: RenderContext>(ctx: &mut C, target: RenderTargetId, color: Color) {
    ctx.submit(|cmd| {
        cmd.set_name("ClearCubemap");
        for face in CubemapFace::ALL {
            let setup = RenderTargetSetup::new(RenderTargetSet::color(target).with_cubemap_face(face))
                .with_clear(ClearFlag::COLOR)
                .with_clear_color(color);
            record_setup(cmd, &setup);
        }
    });
}
