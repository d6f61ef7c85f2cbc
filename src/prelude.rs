//! # cadscene Prelude
//!
//! Commonly used types in one import.
//!
//! ## Usage
//!
//! ```rust
//! use cadscene::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut app = cadscene::default()?;
//!
//!     let scene = app.scene_mut();
//!     let index = scene.add_object();
//!     scene.set_object_shape(index, Shape::Cylinder)?;
//!     scene.object_mut(index)?.set_rotation(Vector3::new(0.0, 45.0, 0.0));
//!
//!     assert_eq!(scene.draw_list().len(), 4);
//!     Ok(())
//! }
//! ```

// Re-export core application types
pub use crate::app::CadApp;
pub use crate::default;
pub use crate::error::{GeometryError, SceneError};

// Re-export graphics and scene types
pub use crate::gfx::camera::{Camera, CameraUniform, OrbitCamera, RotationWrap};
pub use crate::gfx::geometry::{
    generate_cone, generate_cylinder, generate_grid, generate_sphere, generate_tex_coords,
    GeometryConfig, Shape, Solid, SolidLibrary, SolidParams, SphereBase, TextureMapping,
};
pub use crate::gfx::rendering::{BufferId, DrawCall, FrameRenderer, Primitive};
pub use crate::gfx::resources::{Palette, TextureImage};
pub use crate::gfx::scene::{Light, LightUniform, Scene, SceneConfig, SceneObject, Transform};

// Re-export common external dependencies
pub use cgmath::{Deg, Matrix4, Vector3, Vector4};
