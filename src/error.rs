use std::fmt;
use std::path::PathBuf;

/// Exit status used for every startup failure (`-1` as a process byte).
pub const FAILURE_EXIT_CODE: u8 = 255;

/// Failures that end the program before a window or GPU resource exists.
#[derive(Debug)]
pub enum StartupError {
    MissingArgument,
    ImageDecode { path: PathBuf, reason: String },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::MissingArgument => {
                write!(f, "Please specify the image file name as the first program argument")
            }
            StartupError::ImageDecode { path, .. } => {
                write!(f, "Unable to read image: {}", path.display())
            }
        }
    }
}

impl std::error::Error for StartupError {}

/// A decoded buffer that cannot back a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidImage {
    pub width: u32,
    pub height: u32,
    pub len: usize,
}

impl fmt::Display for InvalidImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 || self.height == 0 {
            write!(f, "image is empty ({}x{})", self.width, self.height)
        } else {
            write!(
                f,
                "image buffer holds {} bytes, expected {} for {}x{} RGB",
                self.len,
                self.width as usize * self.height as usize * 3,
                self.width,
                self.height
            )
        }
    }
}

impl std::error::Error for InvalidImage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_names_the_path() {
        let err = StartupError::ImageDecode {
            path: PathBuf::from("photos/missing.png"),
            reason: "No such file or directory".into(),
        };
        assert_eq!(err.to_string(), "Unable to read image: photos/missing.png");
    }

    #[test]
    fn invalid_image_reports_size_mismatch() {
        let err = InvalidImage {
            width: 2,
            height: 2,
            len: 5,
        };
        assert!(err.to_string().contains("expected 12"));
    }
}
