use cgmath::{Matrix4, SquareMatrix};

use crate::error::SceneError;
use crate::gfx::{
    camera::OrbitCamera,
    geometry::{GeometryConfig, Shape, SolidLibrary},
    rendering::{BufferId, DrawCall, FrameRenderer, Primitive},
    resources::palette::{Palette, GRID_COLOR},
};

use super::{
    light::{Light, LightUniform},
    object::SceneObject,
};

/// Color used when a light's marker index falls outside the palette.
const FALLBACK_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Settings a [`Scene`] is built from.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub geometry: GeometryConfig,
    pub palette: Palette,
    /// Number of lights; only the first starts enabled
    pub light_count: usize,
    /// Default objects placed at startup
    pub initial_objects: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            palette: Palette::default(),
            light_count: 2,
            initial_objects: 1,
        }
    }
}

/// Main scene containing objects, lights, camera and the shared solids
pub struct Scene {
    pub camera: OrbitCamera,
    library: SolidLibrary,
    palette: Palette,
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    /// Generates every solid and places the initial objects and lights.
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let library = SolidLibrary::new(&config.geometry)?;

        let lights = (0..config.light_count)
            .map(|i| {
                let mut light = Light::default();
                light.set_enabled(i == 0);
                light
            })
            .collect();

        let mut scene = Self {
            camera: OrbitCamera::default(),
            library,
            palette: config.palette,
            objects: Vec::new(),
            lights,
        };

        for _ in 0..config.initial_objects {
            scene.add_object();
        }

        log::info!(
            "scene ready with {} objects and {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Advances per-frame state (camera auto-rotation).
    pub fn update(&mut self) {
        if self.camera.tick() {
            log::trace!("camera rotation {:.2}", self.camera.rotation());
        }
    }

    /// Places a default object and returns its index.
    pub fn add_object(&mut self) -> usize {
        let index = self.objects.len();
        let mut object = SceneObject::new(&self.library);
        object.set_name(self.ensure_unique_name(&format!("Object {}", index + 1)));
        self.objects.push(object);
        index
    }

    pub fn library(&self) -> &SolidLibrary {
        &self.library
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Result<&SceneObject, SceneError> {
        self.objects
            .get(index)
            .ok_or(SceneError::ObjectOutOfRange(index))
    }

    pub fn object_mut(&mut self, index: usize) -> Result<&mut SceneObject, SceneError> {
        self.objects
            .get_mut(index)
            .ok_or(SceneError::ObjectOutOfRange(index))
    }

    pub fn set_object_shape(&mut self, index: usize, shape: Shape) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(index)
            .ok_or(SceneError::ObjectOutOfRange(index))?;
        object.set_shape(shape, &self.library);
        Ok(())
    }

    pub fn set_object_color(&mut self, index: usize, color: usize) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(index)
            .ok_or(SceneError::ObjectOutOfRange(index))?;
        object.set_color(color, &self.palette)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light(&self, index: usize) -> Result<&Light, SceneError> {
        self.lights
            .get(index)
            .ok_or(SceneError::LightOutOfRange(index))
    }

    pub fn light_mut(&mut self, index: usize) -> Result<&mut Light, SceneError> {
        self.lights
            .get_mut(index)
            .ok_or(SceneError::LightOutOfRange(index))
    }

    fn color(&self, index: usize) -> [f32; 4] {
        self.palette.get(index).unwrap_or_else(|| {
            log::warn!("color index {} outside palette, using fallback", index);
            FALLBACK_COLOR
        })
    }

    /// Draws for one frame: grid, enabled light markers, then every object.
    pub fn draw_list(&self) -> Vec<DrawCall<'_>> {
        let mut calls = Vec::with_capacity(1 + self.lights.len() + self.objects.len());

        calls.push(DrawCall {
            buffer: BufferId::Grid,
            primitive: Primitive::Lines,
            vertices: self.library.grid(),
            tex_coords: None,
            model: Matrix4::identity(),
            color: self.color(GRID_COLOR),
        });

        let marker = self.library.solid_ref(Shape::Sphere);
        for light in self.lights.iter().filter(|light| light.enabled) {
            calls.push(DrawCall {
                buffer: BufferId::Solid(Shape::Sphere),
                primitive: Primitive::Triangles,
                vertices: &marker.vertices,
                tex_coords: None,
                model: light.placement_matrix(),
                color: self.color(light.marker_color),
            });
        }

        for object in &self.objects {
            let solid = object.solid();
            calls.push(DrawCall {
                buffer: BufferId::Solid(solid.shape),
                primitive: Primitive::Triangles,
                vertices: &solid.vertices,
                tex_coords: Some(solid.tex_coords.as_slice()),
                model: object.model_matrix(),
                color: self.color(object.color()),
            });
        }

        calls
    }

    /// Uploads camera and lights, then hands every draw to `renderer`.
    pub fn render<R: FrameRenderer>(&mut self, renderer: &mut R) {
        self.camera.update_view_proj();
        let camera = self.camera.uniform;
        let lights: Vec<LightUniform> = self.lights.iter().map(Light::to_uniform).collect();

        renderer.begin_frame(&camera, &lights);
        for call in self.draw_list() {
            renderer.draw(&call);
        }
        renderer.end_frame();
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let total_vertices: usize = self.objects.iter().map(SceneObject::vertex_count).sum();

        SceneStatistics {
            object_count: self.objects.len(),
            light_count: self.lights.len(),
            enabled_lights: self.lights.iter().filter(|l| l.enabled).count(),
            total_triangles: total_vertices / 3,
            total_vertices,
        }
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub light_count: usize,
    pub enabled_lights: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::CameraUniform;
    use cgmath::Vector3;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.geometry.sphere_depth = 2;
        config.geometry.cone.divisions = 6;
        config.geometry.cylinder.divisions = 6;
        config
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: usize,
        lights: usize,
        draws: Vec<(BufferId, Primitive, usize, bool)>,
    }

    impl FrameRenderer for RecordingRenderer {
        fn begin_frame(&mut self, _camera: &CameraUniform, lights: &[LightUniform]) {
            self.frames += 1;
            self.lights = lights.len();
            self.draws.clear();
        }

        fn draw(&mut self, call: &DrawCall<'_>) {
            self.draws.push((
                call.buffer,
                call.primitive,
                call.vertex_count(),
                call.tex_coords.is_some(),
            ));
        }
    }

    #[test]
    fn test_default_scene() {
        let scene = Scene::new(small_config()).unwrap();
        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.objects()[0].name, "Object 1");
        assert_eq!(scene.lights().len(), 2);
        assert!(scene.light(0).unwrap().enabled);
        assert!(!scene.light(1).unwrap().enabled);
        assert!(scene.camera.auto_rotate);
    }

    #[test]
    fn test_object_editing() {
        let mut scene = Scene::new(small_config()).unwrap();
        let index = scene.add_object();
        assert_eq!(index, 1);

        scene.set_object_shape(index, Shape::Cone).unwrap();
        scene.set_object_color(index, 2).unwrap();
        scene
            .object_mut(index)
            .unwrap()
            .set_translation(Vector3::new(1.0, 2.0, 3.0));

        let object = scene.object(index).unwrap();
        assert_eq!(object.shape(), Shape::Cone);
        assert_eq!(object.color(), 2);
        assert_eq!(
            object.model_matrix(),
            Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0))
        );

        assert_eq!(
            scene.set_object_shape(7, Shape::Sphere),
            Err(SceneError::ObjectOutOfRange(7))
        );
        assert!(matches!(
            scene.set_object_color(0, 99),
            Err(SceneError::UnknownColor { index: 99, .. })
        ));
        assert!(matches!(scene.light_mut(5), Err(SceneError::LightOutOfRange(5))));
    }

    #[test]
    fn test_draw_order() {
        let mut scene = Scene::new(small_config()).unwrap();
        scene.add_object();
        scene.set_object_shape(1, Shape::Cylinder).unwrap();
        scene.light_mut(1).unwrap().set_enabled(true);

        let calls = scene.draw_list();
        assert_eq!(calls.len(), 1 + 2 + 2);

        assert_eq!(calls[0].buffer, BufferId::Grid);
        assert_eq!(calls[0].primitive, Primitive::Lines);
        assert_eq!(calls[0].color, [0.1, 0.1, 0.1, 1.0]);
        assert!(calls[0].tex_coords.is_none());

        for marker in &calls[1..3] {
            assert_eq!(marker.buffer, BufferId::Solid(Shape::Sphere));
            assert!(marker.tex_coords.is_none());
            assert_eq!(marker.model, scene.light(0).unwrap().placement_matrix());
        }

        assert_eq!(calls[4].buffer, BufferId::Solid(Shape::Cylinder));
        assert_eq!(
            calls[4].tex_coords.map(|t| t.len()),
            Some(calls[4].vertex_count())
        );
    }

    #[test]
    fn test_render_and_update() {
        let mut scene = Scene::new(small_config()).unwrap();
        let mut renderer = RecordingRenderer::default();

        scene.update();
        assert_eq!(scene.camera.rotation(), 0.25);
        scene.render(&mut renderer);

        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.lights, 2);
        // grid, one enabled light, one object
        assert_eq!(renderer.draws.len(), 3);
        assert_eq!(renderer.draws[2].0, BufferId::Solid(Shape::Sphere));
        assert!(renderer.draws[2].3);
        assert_eq!(scene.camera.uniform.view_position[3], 1.0);
    }

    #[test]
    fn test_statistics() {
        let mut scene = Scene::new(small_config()).unwrap();
        scene.add_object();
        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, 2);
        assert_eq!(stats.enabled_lights, 1);
        assert_eq!(stats.total_vertices, 2 * 8 * 16 * 3);
        assert_eq!(stats.total_triangles, 2 * 8 * 16);
    }

    #[test]
    fn test_unique_names() {
        let mut scene = Scene::new(small_config()).unwrap();
        scene.object_mut(0).unwrap().set_name("Object 2");
        let index = scene.add_object();
        assert_eq!(scene.object(index).unwrap().name, "Object 2 (1)");
    }
}
