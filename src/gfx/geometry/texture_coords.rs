//! Spherical texture coordinates for flat triangle lists.
//!
//! Every vertex is treated as a direction from the origin and mapped to
//! `(u, v)` by its longitude and latitude. This is exact for the unit sphere
//! and only an approximation for cones and cylinders, which are textured as
//! if they had been projected onto a sphere.
//!
//! The longitude wraps on the half-plane `x < 0, z = 0`, where `u` jumps from
//! 1 back to 0. Because triangles are not indexed, a triangle straddling that
//! seam would otherwise receive coordinates such as `{0.01, 0.99, 0.5}` and
//! stretch across the whole image.

use std::f32::consts::PI;

use crate::error::GeometryError;

/// Tunables for [`generate_tex_coords`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureMapping {
    /// On seam-crossing triangles, any `u` below this is snapped to `1.0`.
    ///
    /// A heuristic rather than real seam welding: it can misfire on triangles
    /// near a pole that legitimately have a small `u`. Dense meshes may want a
    /// smaller value.
    pub seam_threshold: f32,
}

impl Default for TextureMapping {
    fn default() -> Self {
        Self {
            seam_threshold: 0.1,
        }
    }
}

/// Longitude/latitude mapping of a point to `u, v ∈ [0, 1]`.
pub fn spherical_uv(point: [f32; 3]) -> [f32; 2] {
    let [x, y, z] = point;
    let theta = (-z).atan2(x);
    // Clamped so points a hair off the unit sphere stay out of NaN territory
    let phi = (-y).clamp(-1.0, 1.0).acos();
    [(theta + PI) / (2.0 * PI), phi / PI]
}

/// True when some vertices lie behind the `z = 0` plane and some do not.
fn crosses_seam(triangle: &[[f32; 3]]) -> bool {
    let behind = triangle.iter().any(|p| p[2] < 0.0);
    let in_front = triangle.iter().any(|p| p[2] >= 0.0);
    behind && in_front
}

/// Texture coordinates for every vertex of a flat triangle list.
///
/// Fails if `vertices.len()` is not a multiple of three; the buffer is never
/// truncated.
pub fn generate_tex_coords(
    vertices: &[[f32; 3]],
    mapping: &TextureMapping,
) -> Result<Vec<[f32; 2]>, GeometryError> {
    if vertices.len() % 3 != 0 {
        return Err(GeometryError::MisalignedTriangleList(vertices.len()));
    }

    let mut coordinates = Vec::with_capacity(vertices.len());
    let mut corrected = 0usize;

    for triangle in vertices.chunks_exact(3) {
        let prevent_wrap = crosses_seam(triangle);
        if prevent_wrap {
            corrected += 1;
        }

        for &point in triangle {
            let mut uv = spherical_uv(point);
            if prevent_wrap && uv[0] < mapping.seam_threshold {
                uv[0] = 1.0;
            }
            coordinates.push(uv);
        }
    }

    log::debug!(
        "generated {} texture coordinates, {} triangles flagged at the seam",
        coordinates.len(),
        corrected
    );
    Ok(coordinates)
}
