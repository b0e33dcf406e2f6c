pub mod app;
pub mod cli;
pub mod error;
pub mod image_source;
pub mod renderer;
pub mod scene;
pub mod settings;

use anyhow::{Context, Result};
use app::App;
use image_source::SourceImage;
use settings::RenderSettings;
use winit::event_loop::EventLoop;

pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}

/// Open the window and drive the scene until Escape or window close.
pub fn run(settings: RenderSettings, image: SourceImage) -> Result<()> {
    log::info!("Starting gem overlay ({}x{} image)", image.width(), image.height());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(settings, image);

    let result = event_loop.run_app(&mut app);

    if let Some(err) = app.take_failure() {
        return Err(err);
    }
    result.context("event loop terminated with error")?;

    log::info!("Application shutdown complete");
    Ok(())
}
