// app.rs
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::image_source::SourceImage;
use crate::renderer::Renderer;
use crate::scene::{DepthOscillator, SceneCallbacks, SceneKey, SceneState};
use crate::settings::RenderSettings;

pub struct App {
    settings: RenderSettings,
    image: Option<SourceImage>,
    window: Option<Arc<Window>>,
    window_id: Option<WindowId>,
    scene: Option<SceneState<Renderer>>,
    failure: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: RenderSettings, image: SourceImage) -> Self {
        Self {
            settings,
            image: Some(image),
            window: None,
            window_id: None,
            scene: None,
            failure: None,
        }
    }

    /// Error that stopped the event loop, if any.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let ws = &self.settings.window;
        let attributes = Window::default_attributes()
            .with_title(ws.title.clone())
            .with_inner_size(PhysicalSize::new(ws.width, ws.height))
            .with_position(PhysicalPosition::new(ws.x, ws.y));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), &self.settings))?;
        let size = renderer.size();

        // The CPU copy is not needed once the texture is uploaded.
        let image = self
            .image
            .take()
            .ok_or_else(|| anyhow!("scene already initialized"))?;
        let camera = DepthOscillator::from_sweep(&self.settings.camera);
        let mut scene = SceneState::initialize(renderer, &image, camera)
            .context("failed to initialize scene")?;
        drop(image);

        scene.on_resize(size.width, size.height);

        self.window_id = Some(window.id());
        window.request_redraw();
        self.window = Some(window);
        self.scene = Some(scene);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{:#}", err);
        self.failure = Some(err);
        event_loop.exit();
    }
}

fn scene_key(key: &Key) -> SceneKey {
    match key {
        Key::Named(NamedKey::Escape) => SceneKey::Escape,
        Key::Character(text) => SceneKey::Character(text.to_string()),
        _ => SceneKey::Other,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }

        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                scene.on_resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = scene.on_frame() {
                    let err = anyhow::Error::new(err).context("rendering failed");
                    self.fail(event_loop, err);
                    return;
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                scene.on_key(scene_key(&logical_key));
                if scene.should_quit() {
                    log::info!("Shutting down after {} frames", scene.frames());
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
