//! Headless walk through the editor: builds the default scene, places a few
//! objects the way the editor controls would, and logs what a renderer would
//! receive each frame.
//!
//! Run with `RUST_LOG=debug cargo run --example orbit_scene`.

use std::collections::HashMap;

use anyhow::{Context, Result};
use cadscene::prelude::*;

/// Stands in for a GPU backend: uploads each shared buffer once and tallies draws.
#[derive(Default)]
struct LoggingRenderer {
    uploaded: HashMap<BufferId, usize>,
    frame_vertices: usize,
    frame_draws: usize,
}

impl FrameRenderer for LoggingRenderer {
    fn begin_frame(&mut self, camera: &CameraUniform, lights: &[LightUniform]) {
        self.frame_vertices = 0;
        self.frame_draws = 0;
        log::debug!(
            "eye {:?}, {} lights enabled",
            &camera.view_position[..3],
            lights.iter().filter(|l| l.enabled == 1).count()
        );
    }

    fn draw(&mut self, call: &DrawCall<'_>) {
        let vertices = call.vertices;
        self.uploaded.entry(call.buffer).or_insert_with(|| {
            let bytes = bytemuck::cast_slice::<[f32; 3], u8>(vertices).len();
            log::info!("uploading {:?}: {} bytes", call.buffer, bytes);
            bytes
        });
        self.frame_vertices += call.vertex_count();
        self.frame_draws += 1;
    }

    fn end_frame(&mut self) {
        log::debug!(
            "{} draws, {} vertices",
            self.frame_draws,
            self.frame_vertices
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut app = cadscene::default().context("failed to build the default scene")?;

    {
        let scene = app.scene_mut();

        let cone = scene.add_object();
        scene.set_object_shape(cone, Shape::Cone)?;
        scene.set_object_color(cone, 1)?;
        scene.object_mut(cone)?.update_transform(|t| {
            t.translation = Vector3::new(3.0, 1.0, 0.0);
            t.rotation = Vector3::new(0.0, 0.0, 30.0);
            t.scale = Vector3::new(2.0, 2.0, 2.0);
        });

        let cylinder = scene.add_object();
        scene.set_object_shape(cylinder, Shape::Cylinder)?;
        scene.set_object_color(cylinder, 4)?;
        scene
            .object_mut(cylinder)?
            .set_translation(Vector3::new(-3.0, 0.5, -2.0));

        let second_light = scene.light_mut(1)?;
        second_light.set_position(-20.0, 10.0, 5.0);
        second_light.set_enabled(true);
    }

    app.set_frame_callback(|scene, frame| {
        // Spin the first object a little every frame
        if let Ok(object) = scene.object_mut(0) {
            object.set_rotation(Vector3::new(0.0, frame as f32, 0.0));
        }
    });

    let mut renderer = LoggingRenderer::default();
    app.run_frames(&mut renderer, 1440);

    let stats = app.scene().get_statistics();
    log::info!(
        "{} frames, camera at {:.2} deg, {:?}",
        app.frame_count(),
        app.scene().camera.rotation(),
        stats
    );

    let checker = TextureImage::checkerboard(128);
    log::info!(
        "checkerboard {}x{} ready ({} bytes)",
        checker.width,
        checker.height,
        checker.pixels.len()
    );

    Ok(())
}
