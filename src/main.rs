use std::process::ExitCode;

use gem_overlay::cli::image_path_from_args;
use gem_overlay::error::FAILURE_EXIT_CODE;
use gem_overlay::image_source::SourceImage;
use gem_overlay::settings::RenderSettings;

fn main() -> ExitCode {
    gem_overlay::init_logging();

    let path = match image_path_from_args(std::env::args()) {
        Ok(path) => path,
        Err(err) => {
            println!("{err}");
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    let image = match SourceImage::load(&path) {
        Ok(image) => image,
        Err(err) => {
            println!("{err}");
            log::error!("{err:?}");
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    let settings = RenderSettings::load();

    if let Err(err) = gem_overlay::run(settings, image) {
        eprintln!("Application error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
