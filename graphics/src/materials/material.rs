//! Material instances and compute shader handles.
//!
//! A [`Material`] here is the per-instance parameter block a draw reads from:
//! named matrices, vectors and floats plus a set of enabled shader keywords.
//! The shader program itself is owned elsewhere and referenced by name.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use framekit_core::math::{Mat4, Vec4};

use super::properties::ShaderProperties;

static NEXT_MATERIAL_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_COMPUTE_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier recorded in draw commands in place of the material itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(u64);

/// Identifier of a compute shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputeShaderId(u64);

/// A material instance with its own parameter block.
///
/// Parameters written here are visible only to draws using this instance.
/// Global shader state set on a command buffer is unaffected.
#[derive(Debug)]
pub struct Material {
    id: MaterialId,
    shader: String,
    properties: ShaderProperties,
    keywords: BTreeSet<String>,
}

impl Material {
    /// Create a material instance for the named shader.
    pub fn new(shader: impl Into<String>) -> Self {
        Self {
            id: MaterialId(NEXT_MATERIAL_ID.fetch_add(1, Ordering::Relaxed)),
            shader: shader.into(),
            properties: ShaderProperties::new(),
            keywords: BTreeSet::new(),
        }
    }

    /// Unique id of this instance.
    pub fn id(&self) -> MaterialId {
        self.id
    }

    /// Name of the shader this material renders with.
    pub fn shader(&self) -> &str {
        &self.shader
    }

    /// Set a matrix parameter on this instance.
    pub fn set_matrix(&mut self, name: &str, value: &Mat4) {
        self.properties.set_matrix(name, value);
    }

    /// Set a vector parameter on this instance.
    pub fn set_vector(&mut self, name: &str, value: &Vec4) {
        self.properties.set_vector(name, value);
    }

    /// Set a float parameter on this instance.
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.properties.set_float(name, value);
    }

    /// The instance's parameter block.
    pub fn properties(&self) -> &ShaderProperties {
        &self.properties
    }

    /// Enable a shader keyword.
    pub fn enable_keyword(&mut self, keyword: &str) {
        if !self.keywords.contains(keyword) {
            self.keywords.insert(keyword.to_owned());
        }
    }

    /// Disable a shader keyword. Disabling an absent keyword is a no-op.
    pub fn disable_keyword(&mut self, keyword: &str) {
        self.keywords.remove(keyword);
    }

    /// Returns true if the keyword is enabled.
    pub fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    /// Enabled keywords in sorted order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

/// Handle to a compute shader whose parameters are set through a command buffer.
#[derive(Debug, Clone)]
pub struct ComputeShader {
    id: ComputeShaderId,
    name: String,
}

impl ComputeShader {
    /// Create a handle for the named compute shader.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComputeShaderId(NEXT_COMPUTE_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
        }
    }

    /// Unique id of this shader.
    pub fn id(&self) -> ComputeShaderId {
        self.id
    }

    /// Shader name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

static_assertions::assert_impl_all!(Material: Send, Sync);
static_assertions::assert_impl_all!(ComputeShader: Send, Sync);
