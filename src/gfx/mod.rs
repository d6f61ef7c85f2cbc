//! # Graphics Module
//!
//! This module contains the scene-side half of the CAD editor: procedural
//! solids, texture mapping, the object and light model, and the orbit camera.
//! Issuing GPU work is left to a [`FrameRenderer`] supplied by the host.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Sphere, cone, cylinder and grid generators plus UVs
//! - **Camera System** ([`camera`]) - Orbit camera with auto-rotation
//! - **Scene Management** ([`scene`]) - Objects, lights and the scene context
//! - **Resources** ([`resources`]) - Color palette and texture images
//! - **Rendering boundary** ([`rendering`]) - Draw calls handed to the host
//!
//! ## Usage
//!
//! ```no_run
//! use cadscene::gfx::scene::{Scene, SceneConfig};
//!
//! let mut scene = Scene::new(SceneConfig::default()).unwrap();
//! scene.update();
//! for call in scene.draw_list() {
//!     println!("{:?}: {} vertices", call.buffer, call.vertex_count());
//! }
//! ```
//!
//! [`FrameRenderer`]: rendering::FrameRenderer

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::FrameRenderer;
