//! Static reference geometry: axis arrows and a ground grid

use glam::DVec3;

use crate::consts::MAX_GRID_LINES;

use super::mesh::Mesh;
use super::shapes::{build_cone, build_cylinder};
use super::vertex::{Vertex, colors, solid_vertices};

/// Dimensions of the reference geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    /// Axes run from -extent to +extent
    pub axis_extent: f64,
    pub axis_radius: f64,
    pub arrow_length: f64,
    pub arrow_radius: f64,
    pub show_axes: bool,
    /// Grid spans [-extent, extent] on the x/z plane at y = grid_height
    pub grid_extent: f64,
    pub grid_spacing: f64,
    pub grid_height: f64,
    pub grid_radius: f64,
    pub show_grid: bool,
    pub segments: u32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            axis_extent: 2.5,
            axis_radius: 0.01,
            arrow_length: 0.15,
            arrow_radius: 0.04,
            show_axes: true,
            grid_extent: 2.5,
            grid_spacing: 0.5,
            grid_height: -2.5,
            grid_radius: 0.004,
            show_grid: true,
            segments: 8,
        }
    }
}

/// A shaft from `from` with a cone head ending exactly at `to`
pub fn axis_arrow(from: DVec3, to: DVec3, style: &SceneStyle) -> Mesh {
    let span = to - from;
    let length = span.length();
    let mut mesh = Mesh::new();
    if length <= style.arrow_length {
        mesh.append(&build_cone(from, to, style.arrow_radius, style.segments));
        return mesh;
    }

    let head_base = to - span / length * style.arrow_length;
    mesh.append(&build_cylinder(from, head_base, style.axis_radius, style.segments));
    mesh.append(&build_cone(head_base, to, style.arrow_radius, style.segments));
    mesh
}

/// Grid lines parallel to x and z, at most `MAX_GRID_LINES + 1` each way
pub fn grid(style: &SceneStyle) -> Mesh {
    let mut mesh = Mesh::new();
    let valid = |x: f64| x.is_finite() && x > 0.0;
    if !valid(style.grid_spacing) || !valid(style.grid_extent) || !style.grid_height.is_finite() {
        return mesh;
    }

    let e = style.grid_extent;
    let y = style.grid_height;
    let lines = ((2.0 * e / style.grid_spacing).floor() as usize).min(MAX_GRID_LINES);
    for i in 0..=lines {
        let offset = -e + i as f64 * style.grid_spacing;
        mesh.append(&build_cylinder(
            DVec3::new(-e, y, offset),
            DVec3::new(e, y, offset),
            style.grid_radius,
            style.segments,
        ));
        mesh.append(&build_cylinder(
            DVec3::new(offset, y, -e),
            DVec3::new(offset, y, e),
            style.grid_radius,
            style.segments,
        ));
    }
    mesh
}

/// Reference geometry with a flat color per part
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub parts: Vec<(Mesh, [f32; 4])>,
}

impl Scene {
    pub fn build(style: &SceneStyle) -> Self {
        let mut parts = Vec::new();
        if style.show_axes {
            let e = style.axis_extent;
            // v on x, w on y, compressed time on z
            for (axis, color) in [
                (DVec3::X, colors::AXIS_V),
                (DVec3::Y, colors::AXIS_W),
                (DVec3::Z, colors::AXIS_T),
            ] {
                parts.push((axis_arrow(-axis * e, axis * e, style), color));
            }
        }
        if style.show_grid {
            parts.push((grid(style), colors::GRID));
        }
        log::debug!("Scene built with {} parts", parts.len());
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|(mesh, _)| mesh.is_empty())
    }

    /// Interleaved vertices and a single index buffer for all parts
    pub fn buffers(&self) -> (Vec<Vertex>, Vec<u32>) {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for (mesh, color) in &self.parts {
            let base = vertices.len() as u32;
            vertices.extend(solid_vertices(mesh, *color));
            indices.extend(mesh.indices().into_iter().map(|i| i + base));
        }
        (vertices, indices)
    }
}
