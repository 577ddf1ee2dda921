//! Plain value types shared by the binder, broadcaster and full-screen pass.

mod clear;
mod texture;

pub use clear::{ClearFlag, Color};
pub use texture::{CubemapFace, RenderTargetId, TextureFormat};
