use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

/// How the azimuth is brought back into range once it passes 180°.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RotationWrap {
    /// Anything above 180° jumps straight to -180°, so 200° becomes -180°.
    #[default]
    ResetToMin,
    /// Reduce modulo 360° into (-180°, 180°], so 200° becomes -160°.
    Modular,
}

impl RotationWrap {
    pub fn apply(self, degrees: f32) -> f32 {
        match self {
            RotationWrap::ResetToMin => {
                if degrees > 180.0 {
                    -180.0
                } else {
                    degrees
                }
            }
            RotationWrap::Modular => {
                let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
                if wrapped <= -180.0 {
                    180.0
                } else {
                    wrapped
                }
            }
        }
    }
}

/// Camera orbiting the origin on a sphere of `radius`.
///
/// `angle` is the polar angle measured from +Y and `rotation` the azimuth
/// around Y, both in degrees. The eye position is kept in sync by every setter.
///
/// Auto-rotation advances a fixed step per [`tick`](OrbitCamera::tick), so the
/// orbit speed depends on the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub auto_rotate: bool,
    pub auto_rotate_step: f32,
    pub wrap: RotationWrap,
    rotation: f32,
    angle: f32,
    radius: f32,
    pub eye: Vector3<f32>,
    pub at: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for OrbitCamera {
    fn build_view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.at),
            self.up,
        )
    }

    fn build_projection_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(30.0, 67.0, 0.0)
    }
}

impl OrbitCamera {
    pub fn new(radius: f32, angle: f32, rotation: f32) -> Self {
        let mut camera = Self {
            auto_rotate: true,
            auto_rotate_step: 0.25,
            wrap: RotationWrap::default(),
            rotation,
            angle,
            radius,
            eye: Vector3::zero(), // Will be auto-calculted in `update_position()` nevertheless.
            at: Vector3::zero(),
            up: Vector3::unit_y(),
            aspect: 1.0,
            fovy: Deg(45.0),
            znear: 0.1,
            zfar: 100.0,
            uniform: CameraUniform::default(),
        };
        camera.update_position();
        camera
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.update_position();
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.update_position();
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.update_position();
    }

    pub fn set_auto_rotate(&mut self, auto_rotate: bool) {
        self.auto_rotate = auto_rotate;
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Advances auto-rotation by one frame. Returns true if the eye moved.
    pub fn tick(&mut self) -> bool {
        if !self.auto_rotate {
            return false;
        }
        self.rotation += self.auto_rotate_step;
        self.update_position();
        true
    }

    /// Wraps the azimuth and recomputes the eye from `(radius, angle, rotation)`.
    pub fn update_position(&mut self) {
        self.rotation = self.wrap.apply(self.rotation);
        self.eye = calculate_cartesian_eye_position(self.angle, self.rotation, self.radius);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view = convert_matrix4_to_array(self.build_view_matrix());
        self.uniform.projection = convert_matrix4_to_array(self.build_projection_matrix());
    }
}

fn calculate_cartesian_eye_position(angle: f32, rotation: f32, radius: f32) -> Vector3<f32> {
    let angle = Rad::from(Deg(angle)).0;
    let rotation = Rad::from(Deg(rotation)).0;
    Vector3::new(
        radius * angle.sin() * rotation.sin(),
        radius * angle.cos(),
        radius * angle.sin() * rotation.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_camera() {
        let camera = OrbitCamera::default();
        assert!(camera.auto_rotate);
        assert_eq!(camera.radius(), 30.0);
        assert_eq!(camera.angle(), 67.0);
        assert_eq!(camera.rotation(), 0.0);
        assert_eq!(camera.wrap, RotationWrap::ResetToMin);
        assert_eq!(RotationWrap::default(), RotationWrap::ResetToMin);
        assert_eq!(camera.at, Vector3::zero());
        assert_eq!(camera.up, Vector3::unit_y());
        assert!((camera.eye.magnitude() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_pole_ignores_rotation() {
        for rotation in [-170.0, -45.0, 0.0, 90.0, 135.0] {
            let camera = OrbitCamera::new(30.0, 0.0, rotation);
            assert_close(camera.eye, Vector3::new(0.0, 30.0, 0.0));
        }
    }

    #[test]
    fn test_eye_on_axes() {
        let camera = OrbitCamera::new(10.0, 90.0, 0.0);
        assert_close(camera.eye, Vector3::new(0.0, 0.0, 10.0));

        let camera = OrbitCamera::new(10.0, 90.0, 90.0);
        assert_close(camera.eye, Vector3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_reset_wrap() {
        let mut camera = OrbitCamera::default();
        camera.set_rotation(200.0);
        assert_eq!(camera.rotation(), -180.0);

        camera.set_rotation(180.0);
        assert_eq!(camera.rotation(), 180.0);
    }

    #[test]
    fn test_modular_wrap() {
        let mut camera = OrbitCamera::default();
        camera.wrap = RotationWrap::Modular;
        camera.set_rotation(200.0);
        assert!((camera.rotation() + 160.0).abs() < 1e-4);

        camera.set_rotation(540.0);
        assert!((camera.rotation() - 180.0).abs() < 1e-4);

        camera.set_rotation(-180.0);
        assert!((camera.rotation() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_tick_wraps_past_half_turn() {
        let mut camera = OrbitCamera::new(30.0, 67.0, 179.9);
        assert!(camera.tick());
        assert_eq!(camera.rotation(), -180.0);

        camera.set_auto_rotate(false);
        let eye = camera.eye;
        assert!(!camera.tick());
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn test_tick_step() {
        let mut camera = OrbitCamera::default();
        for _ in 0..4 {
            camera.tick();
        }
        assert!((camera.rotation() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_maps_origin_in_front() {
        let mut camera = OrbitCamera::default();
        camera.update_view_proj();
        let view = camera.build_view_matrix();
        let origin = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.z + 30.0).abs() < 1e-3);
        assert_eq!(camera.uniform.view_position[3], 1.0);
    }
}
