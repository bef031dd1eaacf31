//! Vertex types for 3D rendering

use bytemuck::{Pod, Zeroable};

use super::mesh::Mesh;

/// 3D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Interpolate the trajectory gradient (oldest=deep blue, middle=magenta, newest=amber)
pub fn trajectory_color(t: f32) -> [f32; 4] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let lerp = |a: [f32; 4], b: [f32; 4], u: f32| -> [f32; 4] {
        std::array::from_fn(|i| a[i] * (1.0 - u) + b[i] * u)
    };

    if t < 0.5 {
        lerp(colors::GRADIENT_OLD, colors::GRADIENT_MID, t / 0.5)
    } else {
        lerp(colors::GRADIENT_MID, colors::GRADIENT_NEW, (t - 0.5) / 0.5)
    }
}

/// Convert a mesh to GPU vertices colored along the trajectory gradient
pub fn gradient_vertices(mesh: &Mesh) -> Vec<Vertex> {
    mesh.vertices
        .iter()
        .zip(&mesh.along)
        .map(|(p, &t)| Vertex::new(p.x as f32, p.y as f32, p.z as f32, trajectory_color(t)))
        .collect()
}

/// Convert a mesh to GPU vertices with one flat color
pub fn solid_vertices(mesh: &Mesh, color: [f32; 4]) -> Vec<Vertex> {
    mesh.vertices
        .iter()
        .map(|p| Vertex::new(p.x as f32, p.y as f32, p.z as f32, color))
        .collect()
}

/// Colors for scene elements
pub mod colors {
    pub const GRADIENT_OLD: [f32; 4] = [0.15, 0.3, 0.9, 1.0];
    pub const GRADIENT_MID: [f32; 4] = [0.85, 0.25, 0.75, 1.0];
    pub const GRADIENT_NEW: [f32; 4] = [1.0, 0.75, 0.2, 1.0];
    pub const AXIS_V: [f32; 4] = [0.9, 0.3, 0.3, 1.0];
    pub const AXIS_W: [f32; 4] = [0.3, 0.85, 0.4, 1.0];
    pub const AXIS_T: [f32; 4] = [0.35, 0.55, 1.0, 1.0];
    pub const GRID: [f32; 4] = [0.35, 0.35, 0.4, 0.5];
}
