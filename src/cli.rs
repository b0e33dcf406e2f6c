use std::path::PathBuf;

use crate::error::StartupError;

/// Pull the image path from the process arguments (program name first).
/// Anything after the first positional argument is ignored.
pub fn image_path_from_args<I>(args: I) -> Result<PathBuf, StartupError>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(StartupError::MissingArgument)
}
