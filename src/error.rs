//! Error types shared across the crate.

use thiserror::Error;

/// Invalid parameters or malformed buffers handed to the geometry generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("division count must be at least 1")]
    ZeroDivisions,

    #[error("radius must be a non-negative finite number, got {0}")]
    NegativeRadius(f32),

    #[error("height must be a non-negative finite number, got {0}")]
    NegativeHeight(f32),

    /// A flat triangle list whose length is not a multiple of three.
    #[error("vertex buffer of length {0} is not a multiple of 3")]
    MisalignedTriangleList(usize),
}

/// Errors raised while building or editing a [`Scene`](crate::gfx::scene::Scene).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("no object at index {0}")]
    ObjectOutOfRange(usize),

    #[error("no light at index {0}")]
    LightOutOfRange(usize),

    #[error("color index {index} is outside the palette of {len} colors")]
    UnknownColor { index: usize, len: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
