//! # Procedural Geometry Generation
//!
//! This module generates the solids a scene can place, as flat non-indexed
//! triangle lists, together with their spherical texture coordinates.
//!
//! ## Supported Primitives
//!
//! - **Sphere**: recursive subdivision of an octahedron or tetrahedron
//! - **Cone**: base fan plus a lateral surface split into height bands
//! - **Cylinder**: two cap fans plus a banded lateral surface
//! - **Grid**: ground-plane line list, drawn as a visual aid
//!
//! ## Usage
//!
//! ```rust
//! use cadscene::gfx::geometry::{GeometryConfig, Shape, SolidLibrary};
//!
//! let library = SolidLibrary::new(&GeometryConfig::default()).unwrap();
//! let sphere = library.solid(Shape::Sphere);
//! assert_eq!(sphere.vertex_count(), sphere.tex_coords.len());
//! ```

pub mod primitives;
pub mod texture_coords;

pub use primitives::*;
pub use texture_coords::{generate_tex_coords, spherical_uv, TextureMapping};

use std::sync::Arc;

use crate::error::GeometryError;

/// The solids a scene object can be bound to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Sphere,
    Cone,
    Cylinder,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Sphere, Shape::Cone, Shape::Cylinder];
}

/// A generated triangle list paired with its per-vertex texture coordinates.
///
/// Both buffers always have the same length, so the vertex count a renderer
/// draws with can never disagree with either of them.
#[derive(Debug, Clone)]
pub struct Solid {
    pub shape: Shape,
    /// Vertex positions (x, y, z), three consecutive entries per triangle
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), parallel to `vertices`
    pub tex_coords: Vec<[f32; 2]>,
}

impl Solid {
    /// Pairs a triangle list with freshly generated texture coordinates.
    pub fn new(
        shape: Shape,
        vertices: Vec<[f32; 3]>,
        mapping: &TextureMapping,
    ) -> Result<Self, GeometryError> {
        let tex_coords = generate_tex_coords(&vertices, mapping)?;
        Ok(Self {
            shape,
            vertices,
            tex_coords,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes of the position buffer, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the texture coordinate buffer, ready for upload.
    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }
}

/// Parameters shared by the cone and cylinder generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidParams {
    pub divisions: u32,
    pub radius: f32,
    pub height: f32,
}

impl Default for SolidParams {
    /// Unit sizing: radius 0.5 and height 1, centered on the local origin.
    fn default() -> Self {
        Self {
            divisions: 50,
            radius: 0.5,
            height: 1.0,
        }
    }
}

/// Everything the [`SolidLibrary`] needs to build its buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    pub sphere_base: SphereBase,
    pub sphere_depth: u32,
    pub cone: SolidParams,
    pub cylinder: SolidParams,
    pub grid_half_extent: u32,
    pub texture: TextureMapping,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            sphere_base: SphereBase::Octahedron,
            sphere_depth: 5,
            cone: SolidParams::default(),
            cylinder: SolidParams::default(),
            grid_half_extent: 10,
            texture: TextureMapping::default(),
        }
    }
}

/// Immutable solids built once at startup and shared by every scene object.
#[derive(Debug, Clone)]
pub struct SolidLibrary {
    sphere: Arc<Solid>,
    cone: Arc<Solid>,
    cylinder: Arc<Solid>,
    grid: Arc<Vec<[f32; 3]>>,
}

impl SolidLibrary {
    pub fn new(config: &GeometryConfig) -> Result<Self, GeometryError> {
        let sphere = generate_sphere(config.sphere_base, config.sphere_depth);
        let cone = generate_cone(
            config.cone.divisions,
            config.cone.radius,
            config.cone.height,
        )?;
        let cylinder = generate_cylinder(
            config.cylinder.divisions,
            config.cylinder.radius,
            config.cylinder.height,
        )?;
        let grid = generate_grid(config.grid_half_extent);

        let library = Self {
            sphere: Arc::new(Solid::new(Shape::Sphere, sphere, &config.texture)?),
            cone: Arc::new(Solid::new(Shape::Cone, cone, &config.texture)?),
            cylinder: Arc::new(Solid::new(Shape::Cylinder, cylinder, &config.texture)?),
            grid: Arc::new(grid),
        };

        log::debug!(
            "solid library ready: sphere {} / cone {} / cylinder {} vertices, grid {} vertices",
            library.sphere.vertex_count(),
            library.cone.vertex_count(),
            library.cylinder.vertex_count(),
            library.grid.len()
        );

        Ok(library)
    }

    /// Shared handle to the solid backing `shape`.
    pub fn solid(&self, shape: Shape) -> Arc<Solid> {
        match shape {
            Shape::Sphere => Arc::clone(&self.sphere),
            Shape::Cone => Arc::clone(&self.cone),
            Shape::Cylinder => Arc::clone(&self.cylinder),
        }
    }

    /// Borrowed view of the solid backing `shape`.
    pub fn solid_ref(&self, shape: Shape) -> &Solid {
        match shape {
            Shape::Sphere => &self.sphere,
            Shape::Cone => &self.cone,
            Shape::Cylinder => &self.cylinder,
        }
    }

    /// Ground grid line list (two vertices per segment).
    pub fn grid(&self) -> &[[f32; 3]] {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_buffers_are_parallel() {
        let library = SolidLibrary::new(&GeometryConfig::default()).unwrap();
        for shape in Shape::ALL {
            let solid = library.solid(shape);
            assert_eq!(solid.shape, shape);
            assert_eq!(solid.vertices.len() % 3, 0);
            assert_eq!(solid.vertices.len(), solid.tex_coords.len());
            assert_eq!(solid.vertex_bytes().len(), solid.vertex_count() * 12);
            assert_eq!(solid.tex_coord_bytes().len(), solid.vertex_count() * 8);
        }
        assert_eq!(library.grid().len(), 2 * 21 * 2);
    }

    #[test]
    fn test_default_shape_is_sphere() {
        assert_eq!(Shape::default(), Shape::Sphere);
        assert_eq!(Shape::ALL[0], Shape::default());
    }

    #[test]
    fn test_library_shares_buffers() {
        let library = SolidLibrary::new(&GeometryConfig::default()).unwrap();
        let a = library.solid(Shape::Cone);
        let b = library.solid(Shape::Cone);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_library_rejects_bad_params() {
        let mut config = GeometryConfig::default();
        config.cylinder.divisions = 0;
        assert_eq!(
            SolidLibrary::new(&config).unwrap_err(),
            GeometryError::ZeroDivisions
        );
    }
}
