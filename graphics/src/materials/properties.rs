//! Named shader parameter storage.
//!
//! [`ShaderProperties`] is the parameter block shared by materials, per-draw
//! property blocks and the global shader state of a render context. Entries
//! keep the order in which each name was first written, which makes upload
//! order deterministic.

use framekit_core::math::{Mat4, Vec4};

/// A value that can be bound to a named shader parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderValue {
    /// Single float.
    Float(f32),
    /// Four-component vector.
    Vector(Vec4),
    /// Native 4x4 matrix.
    Matrix(Mat4),
    /// Flat float array, as consumed by compute parameter channels.
    FloatArray(Vec<f32>),
}

impl ShaderValue {
    /// Get the matrix, if this is a matrix value.
    pub fn as_matrix(&self) -> Option<&Mat4> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Get the vector, if this is a vector value.
    pub fn as_vector(&self) -> Option<&Vec4> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Get the float array, if this is an array value.
    pub fn as_float_array(&self) -> Option<&[f32]> {
        match self {
            Self::FloatArray(values) => Some(values),
            _ => None,
        }
    }
}

/// Ordered set of named shader parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderProperties {
    entries: Vec<(String, ShaderValue)>,
}

/// Per-draw parameter block passed alongside a material.
pub type MaterialPropertyBlock = ShaderProperties;

impl ShaderProperties {
    /// Create an empty parameter block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value with the same name.
    pub fn set(&mut self, name: &str, value: ShaderValue) {
        if let Some(existing) = self.entries.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value;
        } else {
            self.entries.push((name.to_owned(), value));
        }
    }

    /// Set a matrix parameter.
    pub fn set_matrix(&mut self, name: &str, value: &Mat4) {
        self.set(name, ShaderValue::Matrix(*value));
    }

    /// Set a vector parameter.
    pub fn set_vector(&mut self, name: &str, value: &Vec4) {
        self.set(name, ShaderValue::Vector(*value));
    }

    /// Set a float parameter.
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.set(name, ShaderValue::Float(value));
    }

    /// Builder form of [`set_matrix`](Self::set_matrix).
    pub fn with_matrix(mut self, name: &str, value: &Mat4) -> Self {
        self.set_matrix(name, value);
        self
    }

    /// Builder form of [`set_vector`](Self::set_vector).
    pub fn with_vector(mut self, name: &str, value: &Vec4) -> Self {
        self.set_vector(name, value);
        self
    }

    /// Builder form of [`set_float`](Self::set_float).
    pub fn with_float(mut self, name: &str, value: f32) -> Self {
        self.set_float(name, value);
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ShaderValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Look up a matrix parameter.
    pub fn matrix(&self, name: &str) -> Option<&Mat4> {
        self.get(name).and_then(ShaderValue::as_matrix)
    }

    /// Look up a vector parameter.
    pub fn vector(&self, name: &str) -> Option<&Vec4> {
        self.get(name).and_then(ShaderValue::as_vector)
    }

    /// Look up a float parameter.
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(ShaderValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Parameter names in first-write order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, value)` pairs in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShaderValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all parameters.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
