use crate::constants::CLEAR_COLOR;
use glam::Vec3;
use heimer_core::gpu::{InstanceRaw, SceneUniforms};
use heimer_core::{BoxInstance, Camera, Lighting};
use web_sys as web;

mod helpers;
mod pipelines;
mod targets;
use pipelines::{InstanceBuffer, SceneResources};
use targets::{DepthTarget, EnvironmentTarget};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,
    depth: DepthTarget,
    environment: EnvironmentTarget,
    sampler: wgpu::Sampler,
    bind_group: wgpu::BindGroup,
    instances: InstanceBuffer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, box_count: usize) -> anyhow::Result<Self> {
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
                    // default limits keep older WebGPU impls from seeing unknown fields
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
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let scene = pipelines::create_scene_resources(&device, format);
        let depth = DepthTarget::new(&device, width, height);
        let environment = EnvironmentTarget::placeholder(&device);
        let sampler = helpers::create_linear_sampler(&device);
        let bind_group = pipelines::create_bind_group(&device, &scene, &environment.view, &sampler);
        let instances = InstanceBuffer::new(&device, box_count);

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            depth,
            environment,
            sampler,
            bind_group,
            instances,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
            time_accum: 0.0,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Swap the placeholder background for the decoded environment image.
    pub fn set_environment(&mut self, bitmap: &web::ImageBitmap) {
        self.environment = EnvironmentTarget::upload(&self.device, &self.queue, bitmap);
        self.bind_group = pipelines::create_bind_group(
            &self.device,
            &self.scene,
            &self.environment.view,
            &self.sampler,
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        camera: &Camera,
        lighting: &Lighting,
        boxes: &[BoxInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms =
            SceneUniforms::new(camera, lighting, self.environment.loaded, self.time_accum);
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        let raw = back_to_front(camera.eye, boxes);
        self.instances.write(&self.device, &self.queue, &raw);
        let instance_count = raw.len() as u32;

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
            rpass.set_bind_group(0, &self.bind_group, &[]);

            // Background first, then opaque outlines, then the sorted glass boxes
            rpass.set_pipeline(&self.scene.sky_pipeline);
            rpass.draw(0..3, 0..1);

            if instance_count > 0 {
                rpass.set_vertex_buffer(1, self.instances.buffer.slice(..));

                rpass.set_pipeline(&self.scene.edge_pipeline);
                rpass.set_vertex_buffer(0, self.scene.edge_vb.slice(..));
                rpass.draw(0..self.scene.edge_vertex_count, 0..instance_count);

                rpass.set_pipeline(&self.scene.box_pipeline);
                rpass.set_vertex_buffer(0, self.scene.cube_vb.slice(..));
                rpass.draw(0..self.scene.cube_vertex_count, 0..instance_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Pack instances farthest-first so alpha blending composites correctly.
fn back_to_front(eye: Vec3, boxes: &[BoxInstance]) -> Vec<InstanceRaw> {
    let mut order: Vec<(f32, &BoxInstance)> = boxes
        .iter()
        .map(|b| (b.primitive.position.distance_squared(eye), b))
        .collect();
    order.sort_by(|a, b| b.0.total_cmp(&a.0));
    order.into_iter().map(|(_, b)| InstanceRaw::from(b)).collect()
}
