pub mod backend;
pub mod context;
pub mod depth;
pub mod mesh;
pub mod pipeline_builder;
pub mod renderer;
pub mod texture;
pub mod uniforms;
pub mod vertex;

pub use backend::{
    BatchId, DrawCall, Frame, GraphicsBackend, Shading, TextureId, TextureSampling,
};
pub use context::SurfaceErrorAction;
pub use depth::Depth;
pub use mesh::Batch;
pub use pipeline_builder::PipelineBuilder;
pub use renderer::Renderer;
pub use texture::Texture;
pub use uniforms::{CameraUniform, LightingUniform};
pub use vertex::{LitVertex, TexturedVertex};
