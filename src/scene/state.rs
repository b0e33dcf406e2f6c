use crate::error::InvalidImage;
use crate::image_source::SourceImage;
use crate::renderer::{BatchId, DrawCall, Frame, GraphicsBackend, Shading, TextureId, TextureSampling};
use crate::scene::camera::{DepthOscillator, Projection};
use crate::scene::gem::gem_vertices;
use crate::scene::lighting::{Lighting, CLEAR_COLOR};
use crate::scene::quad::{quad_vertices, QUAD_INDICES};

/// Keys the scene distinguishes. Everything but Escape is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneKey {
    Escape,
    Character(String),
    Other,
}

/// Host callbacks, registered with whatever event loop drives the window.
pub trait SceneCallbacks {
    type Error;

    fn on_resize(&mut self, width: u32, height: u32);

    fn on_key(&mut self, key: SceneKey);

    fn on_frame(&mut self) -> Result<(), Self::Error>;
}

/// All state of the running scene: GPU handles plus the bouncing camera.
pub struct SceneState<B: GraphicsBackend> {
    backend: B,
    texture: TextureId,
    texture_size: (u32, u32),
    gem: BatchId,
    backdrop: BatchId,
    camera: DepthOscillator,
    projection: Option<Projection>,
    should_quit: bool,
    frames: u64,
}

impl<B: GraphicsBackend> SceneState<B> {
    /// Create the texture, lighting and both batches. An invalid image is
    /// rejected before the backend is touched.
    pub fn initialize(
        mut backend: B,
        image: &SourceImage,
        camera: DepthOscillator,
    ) -> Result<Self, InvalidImage> {
        image.validate()?;

        let texture = backend.create_texture(image, TextureSampling::CLAMPED_NEAREST);
        backend.configure_lighting(&Lighting::GEM);

        let gem = backend.create_lit_batch("GemBatch", &gem_vertices());
        let backdrop =
            backend.create_textured_batch("BackdropBatch", &quad_vertices(), &QUAD_INDICES);

        log::info!(
            "Scene initialized: {}x{} texture, gem and backdrop batches ready",
            image.width(),
            image.height()
        );

        Ok(Self {
            backend,
            texture,
            texture_size: (image.width(), image.height()),
            gem,
            backdrop,
            camera,
            projection: None,
            should_quit: false,
            frames: 0,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn camera(&self) -> &DepthOscillator {
        &self.camera
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn texture_size(&self) -> (u32, u32) {
        self.texture_size
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame for the current camera position. Does not advance the camera.
    pub fn frame(&self) -> Frame {
        Frame {
            clear_color: CLEAR_COLOR,
            view: self.camera.view_matrix(),
            draws: vec![
                DrawCall {
                    batch: self.backdrop,
                    shading: Shading::Textured(self.texture),
                },
                DrawCall {
                    batch: self.gem,
                    shading: Shading::Lit,
                },
            ],
        }
    }
}

impl<B: GraphicsBackend> SceneCallbacks for SceneState<B> {
    type Error = B::Error;

    fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring zero-sized resize {}x{}", width, height);
            return;
        }
        let projection = Projection::new(width, height);
        log::debug!("Resize to {}x{} (aspect {})", width, height, projection.aspect);
        self.backend.resize(width, height, projection.matrix());
        self.projection = Some(projection);
    }

    fn on_key(&mut self, key: SceneKey) {
        if key == SceneKey::Escape {
            log::info!("Escape pressed, quitting");
            self.should_quit = true;
        }
    }

    fn on_frame(&mut self) -> Result<(), B::Error> {
        let frame = self.frame();
        self.camera.advance();
        self.frames += 1;
        self.backend.render(&frame)
    }
}
