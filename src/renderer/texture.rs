// renderer/texture.rs

use crate::image_source::SourceImage;
use crate::renderer::TextureSampling;

pub const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

#[derive(Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Texture size for an image; always the image's native dimensions.
pub fn texture_extent(image: &SourceImage) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: image.width(),
        height: image.height(),
        depth_or_array_layers: 1,
    }
}

fn sampler_descriptor(sampling: TextureSampling) -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("ImageSampler"),
        address_mode_u: sampling.address_mode,
        address_mode_v: sampling.address_mode,
        address_mode_w: sampling.address_mode,
        mag_filter: sampling.filter,
        min_filter: sampling.filter,
        ..Default::default()
    }
}

impl Texture {
    /// Upload a single-level RGBA copy of `image`.
    pub fn from_source_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &SourceImage,
        sampling: TextureSampling,
        label: Option<&str>,
    ) -> Self {
        if sampling.mipmaps {
            log::warn!("Mipmapped sampling requested; uploading base level only");
        }

        let size = texture_extent(image);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let rgba = image.to_rgba8();
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.width),
                rows_per_image: Some(size.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&sampler_descriptor(sampling));

        log::info!(
            "Uploaded {}x{} texture {:?}",
            size.width,
            size.height,
            label.unwrap_or("<unnamed>")
        );

        Self {
            texture,
            view,
            sampler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_matches_image_exactly() {
        let image = SourceImage::new(640, 359, vec![0; 640 * 359 * 3]);
        let extent = texture_extent(&image);
        assert_eq!(extent.width, 640);
        assert_eq!(extent.height, 359);
        assert_eq!(extent.depth_or_array_layers, 1);
    }

    #[test]
    fn clamped_nearest_sampler() {
        let desc = sampler_descriptor(TextureSampling::CLAMPED_NEAREST);
        assert_eq!(desc.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(desc.address_mode_v, wgpu::AddressMode::ClampToEdge);
        assert_eq!(desc.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(desc.min_filter, wgpu::FilterMode::Nearest);
    }
}
