// src/gfx/resources/mod.rs
//! Render resources
//!
//! Handles the color palette and procedural texture images the renderer samples.

pub mod palette;
pub mod texture_resource;

// Re-export main types
pub use palette::Palette;
pub use texture_resource::TextureImage;
