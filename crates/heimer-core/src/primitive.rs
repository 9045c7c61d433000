//! Description of the single drawable used by the scene: a small translucent
//! cube with a wireframe outline. The GPU side instances these meshes.

use crate::color::Rgb;
use crate::constants::CELL_SIZE;
use glam::Vec3;

/// Surface parameters of the box body, physically-based style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalMaterial {
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub transmission: f32,
    pub clearcoat: f32,
}

pub const BOX_MATERIAL: PhysicalMaterial = PhysicalMaterial {
    roughness: 0.1,
    metalness: 0.8,
    opacity: 0.9,
    transmission: 0.5,
    clearcoat: 1.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPrimitive {
    pub position: Vec3,
    pub size: f32,
    pub color: Rgb,
    pub edge_color: Rgb,
    pub material: PhysicalMaterial,
}

/// A box at `position` with the shared material and a contrasting outline.
#[inline]
pub fn box_with_edges(position: Vec3, color: Rgb, edge_color: Rgb) -> BoxPrimitive {
    BoxPrimitive {
        position,
        size: CELL_SIZE,
        color,
        edge_color,
        material: BOX_MATERIAL,
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

// (normal, tangent u, tangent v) per face; u x v == normal so winding is CCW
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// 36 vertices (two triangles per face) of a `CELL_SIZE` cube centered on the origin.
pub fn cube_triangles() -> Vec<MeshVertex> {
    let h = CELL_SIZE * 0.5;
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let corner = |su: f32, sv: f32| MeshVertex {
            position: ((n + u * su + v * sv) * h).to_array(),
            normal: n.to_array(),
        };
        let quad = [
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ];
        out.extend_from_slice(&[quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]);
    }
    out
}

/// The 12 cube edges as a line list (24 positions).
pub fn cube_edges() -> Vec<[f32; 3]> {
    let h = CELL_SIZE * 0.5;
    let corner = |i: usize| {
        [
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        ]
    };
    let mut out = Vec::with_capacity(24);
    for a in 0..8usize {
        for bit in [1usize, 2, 4] {
            if a & bit == 0 {
                out.push(corner(a));
                out.push(corner(a | bit));
            }
        }
    }
    out
}
