//! Full-screen passes.
//!
//! A full-screen pass draws one procedural triangle of three vertices. The
//! vertex shader places it so that it over-covers the viewport, which avoids
//! the diagonal seam and the overdraw along it that a two-triangle quad has.
//!
//! Binding always goes through [`record_bind`], so drawing never clears.
//!
//! # Depth substitution
//!
//! Binding several color targets requires a depth target. When a pass writes
//! several colors and needs no depth, the first color target is bound again as
//! the depth target. This only works if that target has no depth bits; the
//! unchecked [`FullScreenPass::draw_to_targets_without_depth`] trusts the
//! caller, [`FullScreenPass::try_draw_to_targets_without_depth`] verifies it.

use framekit_core::math::Mat4;

use crate::binder::{RenderTargetSet, record_bind};
use crate::command::{CommandBuffer, MeshTopology, ProceduralDraw};
use crate::error::GraphicsError;
use crate::materials::{Material, MaterialId, MaterialPropertyBlock};
use crate::types::RenderTargetId;

/// Vertices of the covering triangle.
pub const FULL_SCREEN_VERTEX_COUNT: u32 = 3;

/// A material draw covering the whole bound target.
#[derive(Debug, Clone)]
pub struct FullScreenPass {
    material: MaterialId,
    shader_pass: u32,
    properties: Option<MaterialPropertyBlock>,
}

impl FullScreenPass {
    /// Full-screen pass using pass 0 of `material`, with no per-draw parameters.
    pub fn new(material: &Material) -> Self {
        Self {
            material: material.id(),
            shader_pass: 0,
            properties: None,
        }
    }

    /// Attach per-draw parameters.
    pub fn with_properties(mut self, properties: &MaterialPropertyBlock) -> Self {
        self.properties = Some(properties.clone());
        self
    }

    /// Select the shader pass within the material.
    pub fn with_shader_pass(mut self, shader_pass: u32) -> Self {
        self.shader_pass = shader_pass;
        self
    }

    /// Shader pass index.
    pub fn shader_pass(&self) -> u32 {
        self.shader_pass
    }

    /// Bind `targets` and draw the covering triangle.
    pub fn draw(&self, cmd: &mut CommandBuffer, targets: &RenderTargetSet) {
        record_bind(cmd, targets);
        log::trace!(
            "full-screen draw: material {:?}, pass {}",
            self.material,
            self.shader_pass
        );
        cmd.draw_procedural(ProceduralDraw {
            transform: Mat4::identity(),
            material: self.material,
            shader_pass: self.shader_pass,
            topology: MeshTopology::Triangles,
            vertex_count: FULL_SCREEN_VERTEX_COUNT,
            instance_count: 1,
            properties: self.properties.clone(),
        });
    }

    /// Draw into one color target using its default depth.
    pub fn draw_to_color(&self, cmd: &mut CommandBuffer, color: RenderTargetId) {
        self.draw(cmd, &RenderTargetSet::color(color));
    }

    /// Draw into one color target with an explicit depth target.
    pub fn draw_to_color_depth(
        &self,
        cmd: &mut CommandBuffer,
        color: RenderTargetId,
        depth: RenderTargetId,
    ) {
        self.draw(cmd, &RenderTargetSet::color_depth(color, depth));
    }

    /// Draw into several color targets with an explicit depth target.
    pub fn draw_to_targets(
        &self,
        cmd: &mut CommandBuffer,
        colors: &[RenderTargetId],
        depth: RenderTargetId,
    ) {
        self.draw(cmd, &RenderTargetSet::multiple(colors, Some(depth)));
    }

    /// Draw into several color targets without depth.
    ///
    /// `colors[0]` is bound as the depth target as well and must have no
    /// depth bits; this is not checked. An empty list records nothing.
    pub fn draw_to_targets_without_depth(&self, cmd: &mut CommandBuffer, colors: &[RenderTargetId]) {
        let Some(&first) = colors.first() else {
            log::warn!("full-screen draw skipped: no color targets");
            return;
        };
        self.draw(cmd, &RenderTargetSet::multiple(colors, Some(first)));
    }

    /// Checked form of [`draw_to_targets_without_depth`](Self::draw_to_targets_without_depth).
    ///
    /// Records nothing and returns [`GraphicsError::InvalidParameter`] if
    /// `colors` is empty or `colors[0]` has depth bits.
    pub fn try_draw_to_targets_without_depth(
        &self,
        cmd: &mut CommandBuffer,
        colors: &[RenderTargetId],
    ) -> Result<(), GraphicsError> {
        let first = colors.first().ok_or_else(|| {
            GraphicsError::InvalidParameter("no color targets for full-screen draw".to_string())
        })?;
        let depth_bits = first.format().depth_bits();
        if depth_bits > 0 {
            return Err(GraphicsError::InvalidParameter(format!(
                "first color target {} has {depth_bits} depth bits and cannot stand in for depth",
                first.handle()
            )));
        }
        self.draw_to_targets_without_depth(cmd, colors);
        Ok(())
    }
}
