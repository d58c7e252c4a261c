use room_core::constants::PLACARD_IMAGE_SIZE;
use room_core::images::PLACARD_IMAGE_BYTES;
use room_core::{ParticleField, PlacardImage, PlacardLayout, Projection, SceneGraph, SceneState};
use web_sys as web;
use wgpu;
use wgpu::util::DeviceExt;

pub mod helpers;
pub mod recover;
pub mod scene;
mod targets;

use scene::{Instance, SceneUniforms};
use targets::DepthTarget;

pub static ROOM_WGSL: &str = include_str!("../shaders/room.wgsl");

const INITIAL_INSTANCE_CAPACITY: usize = 128;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    opaque_pipeline: wgpu::RenderPipeline,
    blended_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    // Particle wall texture (group 1)
    wall_tex: wgpu::Texture,
    wall_size: u32,
    wall_bind_group: wgpu::BindGroup,
    // Project images, one array layer per placard (group 1, binding 2)
    placard_tex: wgpu::Texture,
    placard_ready: Vec<bool>,

    cube_vertices: wgpu::Buffer,
    cube_vertex_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        wall_size: u32,
        placard_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("room_shader"),
            source: wgpu::ShaderSource::Wgsl(ROOM_WGSL.into()),
        });

        // Group 0: camera + lights
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Group 1: particle wall texture + sampler
        let wall_size = wall_size.max(1);
        let (wall_tex, wall_view) = helpers::create_texture_2d(
            &device,
            "wall_tex",
            wall_size,
            wall_size,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        let [image_w, image_h] = PLACARD_IMAGE_SIZE;
        let (placard_tex, placard_view) = helpers::create_texture_2d_array(
            &device,
            "placard_tex",
            image_w,
            image_h,
            placard_count as u32,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        );
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let wall_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("wall_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2Array,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
            ],
        });
        let wall_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("wall_bg"),
            layout: &wall_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&wall_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&linear_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&placard_view),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&uniform_bgl, &wall_bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline = helpers::make_scene_pipeline(
            &device,
            "opaque_pipeline",
            &pipeline_layout,
            &shader,
            format,
            None,
            true,
        );
        let blended_pipeline = helpers::make_scene_pipeline(
            &device,
            "blended_pipeline",
            &pipeline_layout,
            &shader,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        let cube = scene::unit_cube_vertices();
        let cube_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertices"),
            contents: bytemuck::cast_slice(&cube),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_buffer = create_instance_buffer(&device, INITIAL_INSTANCE_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            opaque_pipeline,
            blended_pipeline,
            uniform_buffer,
            uniform_bind_group,
            wall_tex,
            wall_size,
            wall_bind_group,
            placard_tex,
            placard_ready: vec![false; placard_count],
            cube_vertices,
            cube_vertex_count: cube.len() as u32,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.02,
                g: 0.02,
                b: 0.04,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Configure the surface again with the current size, after it was lost or
    /// went out of date.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Copy the particle raster into the wall texture.
    pub fn upload_wall(&mut self, field: &ParticleField) {
        if field.size() != self.wall_size {
            log::warn!(
                "wall texture is {}px, field is {}px; skipping upload",
                self.wall_size,
                field.size()
            );
            return;
        }
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.wall_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            field.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.wall_size),
                rows_per_image: Some(self.wall_size),
            },
            wgpu::Extent3d {
                width: self.wall_size,
                height: self.wall_size,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Write one decoded project image into its placard's array layer.
    pub fn upload_placard(&mut self, image: &PlacardImage) {
        let [w, h] = PLACARD_IMAGE_SIZE;
        if image.index >= self.placard_ready.len() {
            log::warn!("no texture layer for placard {}", image.index);
            return;
        }
        if image.rgba.len() != PLACARD_IMAGE_BYTES {
            log::warn!(
                "placard {} image is {} bytes, expected {}",
                image.index,
                image.rgba.len(),
                PLACARD_IMAGE_BYTES
            );
            return;
        }
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.placard_tex,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: image.index as u32,
                },
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );
        self.placard_ready[image.index] = true;
    }

    pub fn render(
        &mut self,
        state: &SceneState,
        graph: Option<&SceneGraph>,
        layout: &PlacardLayout,
    ) -> Result<(), wgpu::SurfaceError> {
        let projection = Projection::with_aspect(self.width as f32 / self.height.max(1) as f32);
        let uniforms = scene::scene_uniforms(state, &projection);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let draw = scene::build_draw_list(state, graph, layout, &self.placard_ready);
        self.ensure_instance_capacity(draw.instances.len());
        if !draw.instances.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&draw.instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
            rpass.set_bind_group(1, &self.wall_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.cube_vertices.slice(..));
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            if draw.opaque > 0 {
                rpass.set_pipeline(&self.opaque_pipeline);
                rpass.draw(0..self.cube_vertex_count, 0..draw.opaque);
            }
            if draw.blended() > 0 {
                rpass.set_pipeline(&self.blended_pipeline);
                rpass.draw(
                    0..self.cube_vertex_count,
                    draw.opaque..draw.instances.len() as u32,
                );
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn ensure_instance_capacity(&mut self, needed: usize) {
        if needed <= self.instance_capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        self.instance_buffer = create_instance_buffer(&self.device, capacity);
        self.instance_capacity = capacity;
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity.max(1) * std::mem::size_of::<Instance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
