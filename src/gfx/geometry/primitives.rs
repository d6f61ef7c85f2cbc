//! # Primitive Shape Generation
//!
//! Every generator returns a flat triangle list (three consecutive entries per
//! triangle, no index buffer). Shared edges are repeated, never deduplicated.
//! The grid is the exception: it is a line list.

use cgmath::{InnerSpace, Vector3, VectorSpace};
use std::f32::consts::PI;

use crate::error::GeometryError;

/// Depths beyond this produce very large buffers and are logged.
const SPHERE_DEPTH_WARN: u32 = 8;

/// The unit polyhedron a sphere is refined from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SphereBase {
    /// Six axis-aligned vertices, four "north" and four "south" triangles.
    Octahedron,
    /// Regular tetrahedron; gives a valid but less uniform triangulation.
    Tetrahedron,
}

impl SphereBase {
    /// Base triangles in winding order. All vertices are unit length.
    pub fn triangles(self) -> Vec<[Vector3<f32>; 3]> {
        match self {
            SphereBase::Octahedron => {
                let p0 = Vector3::new(0.0, 1.0, 0.0);
                let p1 = Vector3::new(0.0, 0.0, 1.0);
                let p2 = Vector3::new(1.0, 0.0, 0.0);
                let p3 = Vector3::new(0.0, 0.0, -1.0);
                let p4 = Vector3::new(-1.0, 0.0, 0.0);
                let p5 = Vector3::new(0.0, -1.0, 0.0);
                vec![
                    [p0, p1, p2],
                    [p0, p1, p4],
                    [p0, p3, p2],
                    [p0, p3, p4],
                    [p5, p1, p2],
                    [p5, p1, p4],
                    [p5, p3, p2],
                    [p5, p3, p4],
                ]
            }
            SphereBase::Tetrahedron => {
                let a = Vector3::new(0.0, 0.0, -1.0);
                let b = Vector3::new(0.0, 0.942809, 0.333333);
                let c = Vector3::new(-0.816497, -0.471405, 0.333333);
                let d = Vector3::new(0.816497, -0.471405, 0.333333);
                vec![[a, b, c], [d, c, b], [a, d, b], [a, c, d]]
            }
        }
    }

    /// Number of triangles before any subdivision.
    pub fn triangle_count(self) -> usize {
        match self {
            SphereBase::Octahedron => 8,
            SphereBase::Tetrahedron => 4,
        }
    }
}

/// Generate a unit sphere by recursively subdividing `base` `depth` times.
///
/// Produces `base.triangle_count() * 4^depth * 3` vertices, all of unit length.
pub fn generate_sphere(base: SphereBase, depth: u32) -> Vec<[f32; 3]> {
    if depth > SPHERE_DEPTH_WARN {
        log::warn!(
            "sphere depth {} will emit {} triangles per base face",
            depth,
            4u64.saturating_pow(depth)
        );
    }

    let capacity = base.triangle_count() * 4usize.pow(depth.min(SPHERE_DEPTH_WARN)) * 3;
    let mut points = Vec::with_capacity(capacity);
    for [a, b, c] in base.triangles() {
        divide_triangle(&mut points, a, b, c, depth);
    }
    points
}

fn divide_triangle(
    points: &mut Vec<[f32; 3]>,
    a: Vector3<f32>,
    b: Vector3<f32>,
    c: Vector3<f32>,
    depth: u32,
) {
    if depth == 0 {
        points.push(a.into());
        points.push(b.into());
        points.push(c.into());
        return;
    }

    // Midpoints pushed back onto the unit sphere
    let ab = a.lerp(b, 0.5).normalize();
    let ac = a.lerp(c, 0.5).normalize();
    let bc = b.lerp(c, 0.5).normalize();

    divide_triangle(points, a, ab, ac, depth - 1);
    divide_triangle(points, ab, b, bc, depth - 1);
    divide_triangle(points, bc, c, ac, depth - 1);
    divide_triangle(points, ab, bc, ac, depth - 1);
}

fn validate(divisions: u32, radius: f32, height: f32) -> Result<(), GeometryError> {
    if divisions == 0 {
        return Err(GeometryError::ZeroDivisions);
    }
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(GeometryError::NegativeRadius(radius));
    }
    if !(height.is_finite() && height >= 0.0) {
        return Err(GeometryError::NegativeHeight(height));
    }
    Ok(())
}

/// Point on a horizontal circle of radius `r` at angle `theta`, height `y`.
fn rim(r: f32, theta: f32, y: f32) -> [f32; 3] {
    [r * theta.cos(), y, r * theta.sin()]
}

/// Generate a cone centered on the local origin, apex at `+height/2`.
///
/// The base is a fan of `divisions` triangles. Each lateral slice is split into
/// `divisions` height bands whose radius shrinks linearly to zero at the apex,
/// emitting two triangles per band.
///
/// Produces `divisions * (3 + 6 * divisions)` vertices.
pub fn generate_cone(
    divisions: u32,
    radius: f32,
    height: f32,
) -> Result<Vec<[f32; 3]>, GeometryError> {
    validate(divisions, radius, height)?;

    let n = divisions as f32;
    let half = height * 0.5;
    let mut cone = Vec::with_capacity(divisions as usize * (3 + 6 * divisions as usize));

    for i in 0..divisions {
        let theta = i as f32 / n * 2.0 * PI;
        let ntheta = (i + 1) as f32 / n * 2.0 * PI;

        // Base, center to edge
        cone.push([0.0, -half, 0.0]);
        cone.push(rim(radius, theta, -half));
        cone.push(rim(radius, ntheta, -half));

        // Base edge up to the apex
        for j in 0..divisions {
            let p1 = (divisions - j) as f32 / n;
            let p2 = (divisions - (j + 1)) as f32 / n;
            let r1 = radius * p1;
            let r2 = radius * p2;
            let y1 = half - height * p1;
            let y2 = half - height * p2;

            cone.push(rim(r1, theta, y1));
            cone.push(rim(r1, ntheta, y1));
            cone.push(rim(r2, theta, y2));

            cone.push(rim(r1, ntheta, y1));
            cone.push(rim(r2, ntheta, y2));
            cone.push(rim(r2, theta, y2));
        }
    }

    log::debug!("cone: {} divisions, {} vertices", divisions, cone.len());
    Ok(cone)
}

/// Generate a cylinder centered on the local origin, caps at `±height/2`.
///
/// Produces `divisions * (6 + 6 * divisions)` vertices.
pub fn generate_cylinder(
    divisions: u32,
    radius: f32,
    height: f32,
) -> Result<Vec<[f32; 3]>, GeometryError> {
    validate(divisions, radius, height)?;

    let n = divisions as f32;
    let half = height * 0.5;
    let mut cylinder = Vec::with_capacity(divisions as usize * (6 + 6 * divisions as usize));

    for i in 0..divisions {
        let theta = i as f32 / n * 2.0 * PI;
        let ntheta = (i + 1) as f32 / n * 2.0 * PI;

        // Bottom cap
        cylinder.push([0.0, -half, 0.0]);
        cylinder.push(rim(radius, theta, -half));
        cylinder.push(rim(radius, ntheta, -half));

        // Top cap
        cylinder.push([0.0, half, 0.0]);
        cylinder.push(rim(radius, theta, half));
        cylinder.push(rim(radius, ntheta, half));

        // Sides
        for j in 0..divisions {
            let p1 = (divisions - j) as f32 / n;
            let p2 = (divisions - (j + 1)) as f32 / n;
            let y1 = half - height * p1;
            let y2 = half - height * p2;

            cylinder.push(rim(radius, theta, y1));
            cylinder.push(rim(radius, ntheta, y1));
            cylinder.push(rim(radius, theta, y2));

            cylinder.push(rim(radius, theta, y2));
            cylinder.push(rim(radius, ntheta, y2));
            cylinder.push(rim(radius, ntheta, y1));
        }
    }

    log::debug!("cylinder: {} divisions, {} vertices", divisions, cylinder.len());
    Ok(cylinder)
}

/// Generate the ground grid on the `y = 0` plane as a line list.
///
/// One segment along Z for every integer X in `[-half_extent, half_extent]`,
/// then one segment along X for every integer Z.
pub fn generate_grid(half_extent: u32) -> Vec<[f32; 3]> {
    let size = half_extent as i64;
    let extent = half_extent as f32;
    let mut grid = Vec::with_capacity((2 * half_extent as usize + 1) * 4);

    for x in -size..=size {
        grid.push([x as f32, 0.0, -extent]);
        grid.push([x as f32, 0.0, extent]);
    }
    for z in -size..=size {
        grid.push([-extent, 0.0, z as f32]);
        grid.push([extent, 0.0, z as f32]);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(p: &[f32; 3]) -> f32 {
        Vector3::from(*p).magnitude()
    }

    #[test]
    fn test_sphere_vertex_count() {
        for depth in 0..5 {
            let octa = generate_sphere(SphereBase::Octahedron, depth);
            assert_eq!(octa.len(), 8 * 4usize.pow(depth) * 3);

            let tetra = generate_sphere(SphereBase::Tetrahedron, depth);
            assert_eq!(tetra.len(), 4 * 4usize.pow(depth) * 3);
        }
    }

    #[test]
    fn test_sphere_vertices_are_unit_length() {
        for base in [SphereBase::Octahedron, SphereBase::Tetrahedron] {
            for p in generate_sphere(base, 4) {
                assert!((length(&p) - 1.0).abs() < 1e-4, "{:?} has length {}", p, length(&p));
            }
        }
    }

    #[test]
    fn test_sphere_depth_zero_is_base() {
        let sphere = generate_sphere(SphereBase::Octahedron, 0);
        assert_eq!(sphere[0], [0.0, 1.0, 0.0]);
        assert_eq!(sphere[1], [0.0, 0.0, 1.0]);
        assert_eq!(sphere[2], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sphere_subdivision_keeps_winding() {
        // Every octahedron face of the depth-0 sphere winds the same way as
        // its four children after one subdivision step.
        let coarse = generate_sphere(SphereBase::Octahedron, 0);
        let fine = generate_sphere(SphereBase::Octahedron, 1);
        let normal = |t: &[[f32; 3]]| {
            let a = Vector3::from(t[0]);
            let b = Vector3::from(t[1]);
            let c = Vector3::from(t[2]);
            (b - a).cross(c - a)
        };
        for (face, parent) in coarse.chunks(3).enumerate() {
            let parent_normal = normal(parent);
            for child in fine[face * 12..(face + 1) * 12].chunks(3) {
                assert!(normal(child).dot(parent_normal) > 0.0);
            }
        }
    }

    #[test]
    fn test_cone_generation() {
        let cone = generate_cone(10, 0.5, 1.0).unwrap();
        assert_eq!(cone.len(), 10 * (3 + 60));
        assert_eq!(cone.len() % 3, 0);
        for p in &cone {
            assert!(p[1] >= -0.5 - 1e-6 && p[1] <= 0.5 + 1e-6);
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!(r <= 0.5 + 1e-6);
        }
        // The last band of every slice closes on the apex
        let apex = cone[10 * 6 + 3 - 1];
        assert!(apex[0].abs() < 1e-6 && apex[2].abs() < 1e-6);
        assert!((apex[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cylinder_generation() {
        let cylinder = generate_cylinder(8, 0.5, 1.0).unwrap();
        assert_eq!(cylinder.len(), 8 * (6 + 48));
        assert_eq!(cylinder.len() % 3, 0);
        // Lateral vertices all sit on the rim
        for p in cylinder.chunks(6 + 48).flat_map(|slice| slice[6..].iter()) {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert_eq!(generate_cone(0, 0.5, 1.0), Err(GeometryError::ZeroDivisions));
        assert_eq!(
            generate_cylinder(4, -1.0, 1.0),
            Err(GeometryError::NegativeRadius(-1.0))
        );
        assert_eq!(
            generate_cone(4, 0.5, -2.0),
            Err(GeometryError::NegativeHeight(-2.0))
        );
        assert!(generate_cylinder(4, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_grid_generation() {
        let grid = generate_grid(10);
        assert_eq!(grid.len(), 21 * 2 * 2);
        assert_eq!(grid[0], [-10.0, 0.0, -10.0]);
        assert_eq!(grid[1], [-10.0, 0.0, 10.0]);
        assert_eq!(grid[42], [-10.0, 0.0, -10.0]);
        assert_eq!(grid[43], [10.0, 0.0, -10.0]);
        assert!(grid.iter().all(|p| p[1] == 0.0));

        assert_eq!(generate_grid(0).len(), 4);
    }
}
