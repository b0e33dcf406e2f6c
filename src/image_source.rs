use std::path::Path;

use crate::error::{InvalidImage, StartupError};

/// Decoded RGB8 pixels, row-major with no row padding.
#[derive(Clone, Debug)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Wraps raw RGB8 data. Use [`SourceImage::validate`] before handing it to a backend.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode an image file and convert it to RGB8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let path = path.as_ref();
        log::info!("Loading image: {:?}", path);

        let decoded = image::open(path).map_err(|err| StartupError::ImageDecode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        let image = Self::new(width, height, rgb.into_raw());

        image.validate().map_err(|err| StartupError::ImageDecode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        log::info!("Decoded {}x{} image from {:?}", width, height, path);
        Ok(image)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    pub fn validate(&self) -> Result<(), InvalidImage> {
        let expected = self.width as usize * self.height as usize * 3;
        if self.is_empty() || self.pixels.len() != expected {
            return Err(InvalidImage {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Expand to RGBA8 with opaque alpha; GPUs have no 3-channel 8-bit format.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for rgb in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(rgb);
            rgba.push(u8::MAX);
        }
        rgba
    }
}
