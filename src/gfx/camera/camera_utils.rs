use cgmath::{Matrix4, SquareMatrix};

pub trait Camera: Sized {
    fn build_view_matrix(&self) -> Matrix4<f32>;
    fn build_projection_matrix(&self) -> Matrix4<f32>;

    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.build_projection_matrix() * self.build_view_matrix()
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// World to camera transform (`lookAt(eye, at, up)`).
    pub view: [[f32; 4]; 4],

    /// Camera to clip transform.
    pub projection: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view: convert_matrix4_to_array(Matrix4::identity()),
            projection: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

/// Column-major copy of a matrix, the layout shaders expect.
pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_matrix_conversion_is_column_major() {
        let m = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let array = convert_matrix4_to_array(m);
        assert_eq!(array[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(array[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_uniform_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 4 * 4 + 2 * 64);
        let uniform = CameraUniform::default();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 144);
    }
}
