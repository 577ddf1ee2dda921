//! Materials, compute shader handles and shader parameter blocks.
//!
//! - [`Material`] - a material instance with its own named parameters and keywords
//! - [`MaterialPropertyBlock`] - per-draw parameters passed alongside a material
//! - [`ComputeShader`] - a compute kernel whose parameters go through a command buffer
//! - [`MaterialRegistry`] - explicit list of render-pipeline material kinds

pub mod keywords;
mod material;
mod properties;
mod registry;

pub use material::{ComputeShader, ComputeShaderId, Material, MaterialId};
pub use properties::{MaterialPropertyBlock, ShaderProperties, ShaderValue};
pub use registry::{MaterialFactory, MaterialRegistry, RenderPipelineMaterial};
