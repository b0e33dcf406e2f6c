// renderer/renderer.rs
use std::sync::Arc;

use anyhow::Result;
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, window::Window};

use crate::image_source::SourceImage;
use crate::renderer::context::{RenderContext, SurfaceErrorAction};
use crate::renderer::{
    Batch, BatchId, CameraUniform, Frame, GraphicsBackend, LightingUniform, LitVertex,
    PipelineBuilder, Shading, Texture, TextureId, TextureSampling, TexturedVertex,
};
use crate::scene::Lighting;
use crate::settings::RenderSettings;

struct BoundTexture {
    _texture: Texture,
    bind_group: wgpu::BindGroup,
}

/// wgpu implementation of [`GraphicsBackend`].
pub struct Renderer {
    context: RenderContext,
    lit_pipeline: wgpu::RenderPipeline,
    textured_pipeline: wgpu::RenderPipeline,
    camera_buf: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    lighting_buf: wgpu::Buffer,
    lighting_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    textures: Vec<BoundTexture>,
    batches: Vec<Batch>,
    projection: Mat4,
}

fn uniform_layout_entry(visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

impl Renderer {
    pub async fn new(window: Arc<Window>, settings: &RenderSettings) -> Result<Self> {
        let context = RenderContext::new(window, settings).await?;
        let device = &context.device;

        let camera_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("CameraBuffer"),
            contents: bytemuck::bytes_of(&CameraUniform::new()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("CameraLayout"),
            entries: &[uniform_layout_entry(wgpu::ShaderStages::VERTEX)],
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("CameraBindGroup"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buf.as_entire_binding(),
            }],
        });

        let lighting_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("LightingBuffer"),
            contents: bytemuck::bytes_of(&LightingUniform::from(&Lighting::default())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lighting_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("LightingLayout"),
            entries: &[uniform_layout_entry(wgpu::ShaderStages::FRAGMENT)],
        });
        let lighting_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("LightingBindGroup"),
            layout: &lighting_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: lighting_buf.as_entire_binding(),
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("TextureLayout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let format = context.config.format;
        let depth_format = context.depth.format;

        let gem_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("GemShader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/gem.wgsl").into()),
        });
        let lit_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("LitPipelineLayout"),
            bind_group_layouts: &[&camera_layout, &lighting_layout],
            push_constant_ranges: &[],
        });
        let lit_pipeline = PipelineBuilder::new(device, &lit_layout, &gem_shader)
            .with_label("LitPipeline")
            .with_vertex_buffer(LitVertex::layout())
            .with_color_target(format, Some(wgpu::BlendState::REPLACE))
            .with_depth_stencil(depth_format, true, wgpu::CompareFunction::Less)
            .with_no_culling()
            .build();

        let backdrop_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("BackdropShader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/backdrop.wgsl").into()),
        });
        let textured_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("TexturedPipelineLayout"),
            bind_group_layouts: &[&camera_layout, &texture_layout],
            push_constant_ranges: &[],
        });
        let textured_pipeline = PipelineBuilder::new(device, &textured_layout, &backdrop_shader)
            .with_label("TexturedPipeline")
            .with_vertex_buffer(TexturedVertex::layout())
            .with_color_target(format, Some(wgpu::BlendState::REPLACE))
            .with_depth_stencil(depth_format, true, wgpu::CompareFunction::Less)
            .with_no_culling()
            .build();

        Ok(Self {
            context,
            lit_pipeline,
            textured_pipeline,
            camera_buf,
            camera_bind_group,
            lighting_buf,
            lighting_bind_group,
            texture_layout,
            textures: Vec::new(),
            batches: Vec::new(),
            projection: Mat4::IDENTITY,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    fn push_batch(&mut self, batch: Batch) -> BatchId {
        self.batches.push(batch);
        BatchId(self.batches.len() as u32 - 1)
    }
}

impl GraphicsBackend for Renderer {
    type Error = wgpu::SurfaceError;

    fn create_texture(&mut self, image: &SourceImage, sampling: TextureSampling) -> TextureId {
        let texture = Texture::from_source_image(
            &self.context.device,
            &self.context.queue,
            image,
            sampling,
            Some("ImageTexture"),
        );
        let bind_group = self
            .context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("ImageBindGroup"),
                layout: &self.texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&texture.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&texture.sampler),
                    },
                ],
            });

        self.textures.push(BoundTexture {
            _texture: texture,
            bind_group,
        });
        TextureId(self.textures.len() as u32 - 1)
    }

    fn configure_lighting(&mut self, lighting: &Lighting) {
        let uni = LightingUniform::from(lighting);
        self.context
            .queue
            .write_buffer(&self.lighting_buf, 0, bytemuck::bytes_of(&uni));
    }

    fn create_lit_batch(&mut self, label: &str, vertices: &[LitVertex]) -> BatchId {
        let batch = Batch::from_vertices(&self.context.device, label, vertices);
        self.push_batch(batch)
    }

    fn create_textured_batch(
        &mut self,
        label: &str,
        vertices: &[TexturedVertex],
        indices: &[u16],
    ) -> BatchId {
        let batch = Batch::from_indexed(&self.context.device, label, vertices, indices);
        self.push_batch(batch)
    }

    fn resize(&mut self, width: u32, height: u32, projection: Mat4) {
        self.context.resize(PhysicalSize::new(width, height));
        self.projection = projection;
    }

    fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = match self.context.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                return match self.context.handle_surface_error(&err) {
                    SurfaceErrorAction::Fatal => Err(err),
                    action => {
                        log::warn!("Skipping frame after surface error {:?} ({:?})", err, action);
                        Ok(())
                    }
                };
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera = CameraUniform::from_matrices(self.projection, frame.view);
        self.context
            .queue
            .write_buffer(&self.camera_buf, 0, bytemuck::bytes_of(&camera));

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Encoder"),
                });

        {
            let [r, g, b, a] = frame.clear_color;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ScenePass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.context.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for draw in &frame.draws {
                let Some(batch) = self.batches.get(draw.batch.0 as usize) else {
                    log::warn!("Skipping draw with unknown batch {:?}", draw.batch);
                    continue;
                };

                match draw.shading {
                    Shading::Textured(id) => {
                        let Some(texture) = self.textures.get(id.0 as usize) else {
                            log::warn!("Skipping draw with unknown texture {:?}", id);
                            continue;
                        };
                        rpass.set_pipeline(&self.textured_pipeline);
                        rpass.set_bind_group(0, &self.camera_bind_group, &[]);
                        rpass.set_bind_group(1, &texture.bind_group, &[]);
                    }
                    Shading::Lit => {
                        rpass.set_pipeline(&self.lit_pipeline);
                        rpass.set_bind_group(0, &self.camera_bind_group, &[]);
                        rpass.set_bind_group(1, &self.lighting_bind_group, &[]);
                    }
                }

                batch.draw(&mut rpass);
            }
        }

        self.context.queue.submit(Some(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}
