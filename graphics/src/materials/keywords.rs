//! Shader keyword toggling helpers.

use super::material::Material;
use crate::error::GraphicsError;

/// Enable or disable a single keyword.
pub fn set_keyword(material: &mut Material, keyword: &str, state: bool) {
    if state {
        material.enable_keyword(keyword);
    } else {
        material.disable_keyword(keyword);
    }
}

/// Enable one of two mutually exclusive keywords and disable the other.
pub fn select_keyword(material: &mut Material, first: &str, second: &str, enable_first: bool) {
    let (on, off) = if enable_first {
        (first, second)
    } else {
        (second, first)
    };
    material.enable_keyword(on);
    material.disable_keyword(off);
}

/// Enable `keywords[enabled]` and disable every other keyword in the list.
///
/// Returns [`GraphicsError::InvalidParameter`] and leaves the material
/// untouched if `enabled` is out of bounds.
pub fn select_keyword_indexed(
    material: &mut Material,
    keywords: &[&str],
    enabled: usize,
) -> Result<(), GraphicsError> {
    let Some(&on) = keywords.get(enabled) else {
        return Err(GraphicsError::InvalidParameter(format!(
            "keyword index {enabled} out of range for {} keywords",
            keywords.len()
        )));
    };
    material.enable_keyword(on);
    for (i, keyword) in keywords.iter().enumerate() {
        if i != enabled {
            material.disable_keyword(keyword);
        }
    }
    Ok(())
}
