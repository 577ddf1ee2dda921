//! Command recording.
//!
//! A [`CommandBuffer`] is an ordered list of [`Command`]s. Nothing is sent to
//! the GPU while recording; a [`RenderContext`](crate::backend::RenderContext)
//! executes the whole buffer at once, in recording order.

use framekit_core::math::{Mat4, Vec4};
use framekit_core::pool::{Pool, Poolable};

use crate::materials::{ComputeShader, ComputeShaderId, MaterialId, MaterialPropertyBlock, ShaderValue};
use crate::types::{Color, CubemapFace, RenderTargetId};

/// Primitive topology of a procedural draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeshTopology {
    /// Every three vertices form a triangle.
    #[default]
    Triangles,
    /// Every two vertices form a line.
    Lines,
    /// Each vertex is a point.
    Points,
}

/// A draw with no vertex buffer; the vertex shader generates positions from
/// the vertex index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProceduralDraw {
    /// Object-to-world transform.
    pub transform: Mat4,
    /// Material instance to draw with.
    pub material: MaterialId,
    /// Shader pass index within the material.
    pub shader_pass: u32,
    /// Primitive topology.
    pub topology: MeshTopology,
    /// Number of vertices.
    pub vertex_count: u32,
    /// Number of instances.
    pub instance_count: u32,
    /// Optional per-draw parameters.
    pub properties: Option<MaterialPropertyBlock>,
}

/// A single recorded command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Bind color targets and an optional depth target.
    SetRenderTarget {
        /// Color targets, in attachment order.
        colors: Vec<RenderTargetId>,
        /// Depth target. `None` binds the color target's own depth (if any).
        depth: Option<RenderTargetId>,
        /// Mip level to render into.
        mip_level: u32,
        /// Cubemap face to render into.
        face: CubemapFace,
    },
    /// Clear the currently bound targets.
    ClearRenderTarget {
        /// Clear the depth attachment.
        depth: bool,
        /// Clear the color attachments.
        color: bool,
        /// Value written to color attachments.
        value: Color,
    },
    /// Set a global shader parameter visible to all later draws.
    SetGlobal {
        /// Parameter name.
        name: String,
        /// Parameter value.
        value: ShaderValue,
    },
    /// Set a parameter on one compute shader.
    SetComputeParam {
        /// Target compute shader.
        shader: ComputeShaderId,
        /// Parameter name.
        name: String,
        /// Parameter value (float arrays or vectors).
        value: ShaderValue,
    },
    /// Procedural draw.
    DrawProcedural(ProceduralDraw),
    /// Open a named profiling sample.
    BeginSample(String),
    /// Close a named profiling sample.
    EndSample(String),
}

/// An ordered list of commands executed together.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    name: String,
    commands: Vec<Command>,
}

impl CommandBuffer {
    /// Create an empty, unnamed command buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Debug name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the debug name.
    pub fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
    }

    /// Recorded commands in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Bind render targets.
    pub fn set_render_target(
        &mut self,
        colors: &[RenderTargetId],
        depth: Option<RenderTargetId>,
        mip_level: u32,
        face: CubemapFace,
    ) {
        self.commands.push(Command::SetRenderTarget {
            colors: colors.to_vec(),
            depth,
            mip_level,
            face,
        });
    }

    /// Clear the bound targets.
    pub fn clear_render_target(&mut self, clear_depth: bool, clear_color: bool, value: Color) {
        self.commands.push(Command::ClearRenderTarget {
            depth: clear_depth,
            color: clear_color,
            value,
        });
    }

    /// Set a global matrix.
    pub fn set_global_matrix(&mut self, name: &str, value: &Mat4) {
        self.set_global(name, ShaderValue::Matrix(*value));
    }

    /// Set a global vector.
    pub fn set_global_vector(&mut self, name: &str, value: &Vec4) {
        self.set_global(name, ShaderValue::Vector(*value));
    }

    /// Set a global float.
    pub fn set_global_float(&mut self, name: &str, value: f32) {
        self.set_global(name, ShaderValue::Float(value));
    }

    fn set_global(&mut self, name: &str, value: ShaderValue) {
        self.commands.push(Command::SetGlobal {
            name: name.to_owned(),
            value,
        });
    }

    /// Set a flat float array on a compute shader.
    pub fn set_compute_float_params(&mut self, shader: &ComputeShader, name: &str, values: &[f32]) {
        self.commands.push(Command::SetComputeParam {
            shader: shader.id(),
            name: name.to_owned(),
            value: ShaderValue::FloatArray(values.to_vec()),
        });
    }

    /// Set a vector on a compute shader.
    pub fn set_compute_vector_param(&mut self, shader: &ComputeShader, name: &str, value: &Vec4) {
        self.commands.push(Command::SetComputeParam {
            shader: shader.id(),
            name: name.to_owned(),
            value: ShaderValue::Vector(*value),
        });
    }

    /// Record a procedural draw.
    pub fn draw_procedural(&mut self, draw: ProceduralDraw) {
        self.commands.push(Command::DrawProcedural(draw));
    }

    /// Open a profiling sample.
    pub fn begin_sample(&mut self, name: &str) {
        self.commands.push(Command::BeginSample(name.to_owned()));
    }

    /// Close a profiling sample.
    pub fn end_sample(&mut self, name: &str) {
        self.commands.push(Command::EndSample(name.to_owned()));
    }
}

impl Poolable for CommandBuffer {
    fn new_empty() -> Self {
        Self::new()
    }

    fn reset(&mut self) {
        self.name.clear();
        self.commands.clear();
    }
}

/// Pool of reusable command buffers.
pub type CommandBufferPool = Pool<CommandBuffer>;

static_assertions::assert_impl_all!(CommandBuffer: Send, Sync);
