//! Explicit registry of render-pipeline material kinds.
//!
//! The pipeline needs one instance of every material implementation (lit,
//! unlit, ...) to collect their shared resources. Implementations are listed
//! explicitly at startup instead of being discovered at runtime:
//!
//! ```
//! use framekit_graphics::materials::{MaterialRegistry, RenderPipelineMaterial};
//!
//! struct Unlit;
//!
//! impl RenderPipelineMaterial for Unlit {
//!     fn name(&self) -> &str {
//!         "Unlit"
//!     }
//! }
//!
//! fn unlit() -> Box<dyn RenderPipelineMaterial> {
//!     Box::new(Unlit)
//! }
//!
//! let mut registry = MaterialRegistry::new();
//! registry.register("Unlit", unlit).unwrap();
//!
//! let materials = registry.instantiate();
//! assert_eq!(materials[0].name(), "Unlit");
//! ```

use crate::error::GraphicsError;

/// A material implementation known to the render pipeline.
pub trait RenderPipelineMaterial: Send {
    /// Display name of the implementation.
    fn name(&self) -> &str;

    /// One-time initialization, run right after instantiation.
    fn build(&mut self) {}
}

/// Constructor stored in the registry.
pub type MaterialFactory = fn() -> Box<dyn RenderPipelineMaterial>;

/// Ordered list of material factories.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    entries: Vec<(&'static str, MaterialFactory)>,
}

impl MaterialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a fixed list.
    pub fn from_factories(
        factories: &[(&'static str, MaterialFactory)],
    ) -> Result<Self, GraphicsError> {
        let mut registry = Self::new();
        for &(name, factory) in factories {
            registry.register(name, factory)?;
        }
        Ok(registry)
    }

    /// Register a material factory under a unique name.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: MaterialFactory,
    ) -> Result<(), GraphicsError> {
        if self.entries.iter().any(|(n, _)| *n == name) {
            return Err(GraphicsError::InvalidParameter(format!(
                "material '{name}' is already registered"
            )));
        }
        log::debug!("MaterialRegistry: registered '{}'", name);
        self.entries.push((name, factory));
        Ok(())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create and build one instance of every registered material, in
    /// registration order.
    pub fn instantiate(&self) -> Vec<Box<dyn RenderPipelineMaterial>> {
        self.entries
            .iter()
            .map(|(name, factory)| {
                let mut material = factory();
                material.build();
                log::trace!("MaterialRegistry: instantiated '{}'", name);
                material
            })
            .collect()
    }
}
