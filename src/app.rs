use crate::error::SceneError;
use crate::gfx::{
    rendering::FrameRenderer,
    scene::{Scene, SceneConfig},
};

/// Per-frame hook standing in for the editor controls: it may edit the scene
/// before the frame is drawn. Receives the index of the frame being produced.
pub type FrameCallback = Box<dyn FnMut(&mut Scene, u64)>;

/// Frame driver around a [`Scene`].
///
/// Each [`frame`](CadApp::frame) runs the edit hook, advances the camera, then
/// hands the draw list to the renderer. Everything happens on the caller's
/// thread, so edits and drawing never overlap.
pub struct CadApp {
    scene: Scene,
    frame_callback: Option<FrameCallback>,
    frame_count: u64,
}

impl CadApp {
    /// Create a new application with the default scene
    pub fn new() -> Result<Self, SceneError> {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Result<Self, SceneError> {
        Ok(Self {
            scene: Scene::new(config)?,
            frame_callback: None,
            frame_count: 0,
        })
    }

    /// Set the per-frame edit hook
    pub fn set_frame_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Scene, u64) + 'static,
    {
        self.frame_callback = Some(Box::new(callback));
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.camera.resize_projection(width, height);
    }

    /// Produces one frame.
    pub fn frame<R: FrameRenderer>(&mut self, renderer: &mut R) {
        if let Some(callback) = self.frame_callback.as_mut() {
            callback(&mut self.scene, self.frame_count);
        }

        self.scene.update();
        self.scene.render(renderer);

        self.frame_count += 1;
        log::trace!("frame {} done", self.frame_count);
    }

    /// Produces `count` frames back to back.
    pub fn run_frames<R: FrameRenderer>(&mut self, renderer: &mut R, count: u64) {
        for _ in 0..count {
            self.frame(renderer);
        }
    }
}
