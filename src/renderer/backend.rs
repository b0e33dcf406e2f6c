use glam::Mat4;

use crate::image_source::SourceImage;
use crate::renderer::{LitVertex, TexturedVertex};
use crate::scene::Lighting;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BatchId(pub u32);

/// Sampler state for an uploaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureSampling {
    pub address_mode: wgpu::AddressMode,
    pub filter: wgpu::FilterMode,
    pub mipmaps: bool,
}

impl TextureSampling {
    pub const CLAMPED_NEAREST: TextureSampling = TextureSampling {
        address_mode: wgpu::AddressMode::ClampToEdge,
        filter: wgpu::FilterMode::Nearest,
        mipmaps: false,
    };
}

/// How a batch is shaded for one draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Texture color replaces the fragment color; lighting is off.
    Textured(TextureId),
    /// Fixed material lit by the scene light; texturing is off.
    Lit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub batch: BatchId,
    pub shading: Shading,
}

/// Everything a backend needs to produce one frame, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub clear_color: [f64; 4],
    pub view: Mat4,
    pub draws: Vec<DrawCall>,
}

/// GPU side of the scene. Resources are created once during scene
/// initialization and live as long as the backend.
pub trait GraphicsBackend {
    type Error: std::error::Error + 'static;

    fn create_texture(&mut self, image: &SourceImage, sampling: TextureSampling) -> TextureId;

    fn configure_lighting(&mut self, lighting: &Lighting);

    fn create_lit_batch(&mut self, label: &str, vertices: &[LitVertex]) -> BatchId;

    fn create_textured_batch(
        &mut self,
        label: &str,
        vertices: &[TexturedVertex],
        indices: &[u16],
    ) -> BatchId;

    fn resize(&mut self, width: u32, height: u32, projection: Mat4);

    fn render(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
