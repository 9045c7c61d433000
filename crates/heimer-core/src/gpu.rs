//! Plain-old-data layouts shared between the scene and the WGSL shaders.

use crate::lighting::Lighting;
use crate::scene::BoxInstance;
use crate::state::Camera;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub edge_color: [f32; 4],
    // roughness, metalness, transmission, clearcoat
    pub material: [f32; 4],
}

impl From<&BoxInstance> for InstanceRaw {
    fn from(b: &BoxInstance) -> Self {
        let m = &b.primitive.material;
        Self {
            model: b.model.to_cols_array_2d(),
            color: b.primitive.color.with_alpha(m.opacity),
            edge_color: b.primitive.edge_color.with_alpha(1.0),
            material: [m.roughness, m.metalness, m.transmission, m.clearcoat],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub inv_view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub ambient: [f32; 4],
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
    // x: environment loaded (0/1), y: time, zw: unused
    pub params: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, lighting: &Lighting, env_loaded: bool, time: f32) -> Self {
        let view_proj = camera.view_projection();
        let dir = lighting.directional.direction();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: extend(lighting.ambient.color.scaled(lighting.ambient.intensity)),
            light_dir: dir.extend(0.0).to_array(),
            light_color: extend(
                lighting
                    .directional
                    .color
                    .scaled(lighting.directional.intensity),
            ),
            params: [if env_loaded { 1.0 } else { 0.0 }, time, 0.0, 0.0],
        }
    }
}

#[inline]
fn extend(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}
