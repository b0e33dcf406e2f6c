use bytemuck::{Pod, Zeroable};
use std::mem;

/// Gem vertex: position and flat facet normal.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct LitVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

impl LitVertex {
    pub const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3
    ];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<LitVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Backdrop vertex: position and texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct TexturedVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    pub const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x2
    ];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TexturedVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_strides_match_struct_size() {
        assert_eq!(
            LitVertex::layout().array_stride,
            std::mem::size_of::<LitVertex>() as wgpu::BufferAddress
        );
        assert_eq!(
            TexturedVertex::layout().array_stride,
            std::mem::size_of::<TexturedVertex>() as wgpu::BufferAddress
        );
    }

    #[test]
    fn uv_follows_position() {
        assert_eq!(TexturedVertex::ATTRS[1].offset, 12);
        assert_eq!(LitVertex::ATTRS[1].offset, 12);
    }
}
