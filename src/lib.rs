// src/lib.rs
//! cadscene
//!
//! Scene core of a small 3D CAD editor: procedural solids with spherical
//! texture coordinates, independently transformable objects, Phong lights and
//! an auto-rotating orbit camera. Drawing is delegated to a host renderer.

pub mod app;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use app::CadApp;
pub use error::{GeometryError, SceneError};

/// Creates a default application instance
pub fn default() -> Result<CadApp, SceneError> {
    CadApp::new()
}
