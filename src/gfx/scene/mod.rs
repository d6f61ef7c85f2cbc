//! # Scene Management Module
//!
//! This module owns everything that is placed in the world: transformable
//! objects bound to shared solids, Phong lights, and the orbit camera.
//!
//! ## Key Components
//!
//! - [`Scene`] - The scene context holding objects, lights, camera and solids
//! - [`SceneObject`] - A placed solid with its own color and T/R/S transform
//! - [`Transform`] - Translate / rotate / scale parameters and their composition
//! - [`Light`] - Light source with a marker placement matrix
//!
//! ## Usage
//!
//! ```no_run
//! use cadscene::gfx::scene::{Scene, SceneConfig};
//! use cadscene::gfx::geometry::Shape;
//! use cgmath::Vector3;
//!
//! let mut scene = Scene::new(SceneConfig::default())?;
//! let index = scene.add_object();
//! scene.set_object_shape(index, Shape::Cone)?;
//! scene.object_mut(index)?.set_translation(Vector3::new(2.0, 0.0, 0.0));
//! # Ok::<(), cadscene::error::SceneError>(())
//! ```
//!
//! ## Object Management
//!
//! Objects in the scene support:
//! - Rebinding to another solid without copying vertex data
//! - Palette-indexed colors
//! - Transform edits that always refresh the model matrix

pub mod light;
pub mod object;
pub mod scene;

// Re-export main types
pub use light::{Light, LightUniform};
pub use object::{SceneObject, Transform};
pub use scene::{Scene, SceneConfig, SceneStatistics};
