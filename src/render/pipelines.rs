use super::helpers;
use heimer_core::gpu::{InstanceRaw, SceneUniforms};
use heimer_core::primitive::{cube_edges, cube_triangles, MeshVertex};
use wgpu;
use wgpu::util::DeviceExt;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4,
    8 => Float32x4
];
const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const EDGE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceRaw>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}

/// Pipelines, static geometry and the shared bind group layout.
pub(crate) struct SceneResources {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) sky_pipeline: wgpu::RenderPipeline,
    pub(crate) edge_pipeline: wgpu::RenderPipeline,
    pub(crate) box_pipeline: wgpu::RenderPipeline,
    pub(crate) cube_vb: wgpu::Buffer,
    pub(crate) cube_vertex_count: u32,
    pub(crate) edge_vb: wgpu::Buffer,
    pub(crate) edge_vertex_count: u32,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(heimer_core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let sky_pipeline = helpers::make_scene_pipeline(
        device,
        "sky_pipeline",
        &pl,
        &shader,
        ("vs_sky", "fs_sky"),
        &[],
        wgpu::PrimitiveState::default(),
        helpers::depth_state(false, wgpu::CompareFunction::Always),
        color_format,
        None,
    );
    let edge_pipeline = helpers::make_scene_pipeline(
        device,
        "edge_pipeline",
        &pl,
        &shader,
        ("vs_edge", "fs_edge"),
        &[
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &EDGE_ATTRS,
            },
            instance_layout(),
        ],
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        helpers::depth_state(true, wgpu::CompareFunction::LessEqual),
        color_format,
        None,
    );
    let box_pipeline = helpers::make_scene_pipeline(
        device,
        "box_pipeline",
        &pl,
        &shader,
        ("vs_box", "fs_box"),
        &[
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &MESH_ATTRS,
            },
            instance_layout(),
        ],
        wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        helpers::depth_state(true, wgpu::CompareFunction::Less),
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );

    let cube = cube_triangles();
    let cube_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_vb"),
        contents: bytemuck::cast_slice(&cube),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let edges = cube_edges();
    let edge_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("edge_vb"),
        contents: bytemuck::cast_slice(&edges),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneResources {
        bgl,
        uniform_buffer,
        sky_pipeline,
        edge_pipeline,
        box_pipeline,
        cube_vb,
        cube_vertex_count: cube.len() as u32,
        edge_vb,
        edge_vertex_count: edges.len() as u32,
    }
}

pub(crate) fn create_bind_group(
    device: &wgpu::Device,
    res: &SceneResources,
    env_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &res.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: res.uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(env_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

/// Instance buffer that grows to the next power of two when the scene does.
pub(crate) struct InstanceBuffer {
    pub(crate) buffer: wgpu::Buffer,
    capacity: usize,
}

impl InstanceBuffer {
    pub(crate) fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();
        Self {
            buffer: Self::allocate(device, capacity),
            capacity,
        }
    }

    fn allocate(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub(crate) fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[InstanceRaw],
    ) {
        if data.len() > self.capacity {
            self.capacity = data.len().next_power_of_two();
            self.buffer = Self::allocate(device, self.capacity);
            log::debug!("[render] instance buffer grown to {}", self.capacity);
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
    }
}
