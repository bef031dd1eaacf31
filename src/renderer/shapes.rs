//! Shape generation for 3D primitives
//!
//! Tubes, cylinders and cones are swept around a direction using the same
//! orthonormal frame construction, so cross-sections line up between shapes.

use glam::DVec3;
use std::f64::consts::TAU;

use super::mesh::Mesh;

/// Above this |d.y| the reference up vector switches from +Y to +X.
///
/// Keeps `cross(d, up)` away from the near-parallel case.
pub const UP_SWITCH_THRESHOLD: f64 = 0.9;

/// Endpoints closer than this are treated as coincident
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Orthonormal pair (u, v) perpendicular to unit direction `d`.
///
/// (u, v, d) is right-handed.
#[inline]
pub fn orthonormal_frame(d: DVec3) -> (DVec3, DVec3) {
    let up = if d.y.abs() > UP_SWITCH_THRESHOLD {
        DVec3::X
    } else {
        DVec3::Y
    };
    let u = d.cross(up).normalize();
    let v = d.cross(u);
    (u, v)
}

/// Unit direction from `from` to `to`, or None if they coincide
#[inline]
fn direction(from: DVec3, to: DVec3) -> Option<DVec3> {
    let delta = to - from;
    let length = delta.length();
    if length < DEGENERATE_EPSILON || !length.is_finite() {
        None
    } else {
        Some(delta / length)
    }
}

/// (cos, sin) of each ring angle, computed once per build
fn unit_circle(segments: u32) -> Vec<(f64, f64)> {
    (0..segments)
        .map(|k| {
            let angle = TAU * k as f64 / segments as f64;
            (angle.cos(), angle.sin())
        })
        .collect()
}

/// Emit one ring of vertices and return the index of its first vertex
fn push_ring(
    mesh: &mut Mesh,
    center: DVec3,
    (u, v): (DVec3, DVec3),
    radius: f64,
    circle: &[(f64, f64)],
    along: f32,
) -> u32 {
    let base = mesh.vertex_count() as u32;
    for &(c, s) in circle {
        mesh.push_vertex(center + (u * c + v * s) * radius, along);
    }
    base
}

/// Connect two rings with two outward-facing triangles per side
fn stitch_rings(mesh: &mut Mesh, start: u32, end: u32, segments: u32) {
    for k in 0..segments {
        let next = (k + 1) % segments;
        let (a, b) = (start + k, start + next);
        let (c, d) = (end + k, end + next);
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(b, d, c);
    }
}

/// Sweep a circular cross-section along a polyline.
///
/// Every segment gets its own pair of rings (no welding between segments),
/// so N distinct points give `2 * segments * (N - 1)` vertices and the same
/// number of triangles. Coincident consecutive points are skipped; fewer than
/// two points give an empty mesh.
pub fn build_tube(points: &[DVec3], radius: f64, segments: u32) -> Mesh {
    if points.len() < 2 || segments == 0 {
        return Mesh::new();
    }

    let pairs = points.len() - 1;
    let per_segment = (2 * segments) as usize;
    let mut mesh = Mesh::with_capacity(pairs * per_segment, pairs * per_segment);
    let circle = unit_circle(segments);
    let last = pairs as f32;

    for (i, pair) in points.windows(2).enumerate() {
        let (p1, p2) = (pair[0], pair[1]);
        let Some(d) = direction(p1, p2) else {
            continue;
        };
        let frame = orthonormal_frame(d);

        let start = push_ring(&mut mesh, p1, frame, radius, &circle, i as f32 / last);
        let end = push_ring(&mut mesh, p2, frame, radius, &circle, (i + 1) as f32 / last);
        stitch_rings(&mut mesh, start, end, segments);
    }

    mesh
}

/// Open cylinder from `p1` to `p2` (side faces only)
pub fn build_cylinder(p1: DVec3, p2: DVec3, radius: f64, segments: u32) -> Mesh {
    let Some(d) = direction(p1, p2) else {
        return Mesh::new();
    };
    if segments == 0 {
        return Mesh::new();
    }

    let per_side = (2 * segments) as usize;
    let mut mesh = Mesh::with_capacity(per_side, per_side);
    let circle = unit_circle(segments);
    let frame = orthonormal_frame(d);

    let start = push_ring(&mut mesh, p1, frame, radius, &circle, 0.0);
    let end = push_ring(&mut mesh, p2, frame, radius, &circle, 1.0);
    stitch_rings(&mut mesh, start, end, segments);
    mesh
}

/// Cone with its base ring around `base` and apex at `tip` (no base cap)
pub fn build_cone(base: DVec3, tip: DVec3, radius: f64, segments: u32) -> Mesh {
    let Some(d) = direction(base, tip) else {
        return Mesh::new();
    };
    if segments == 0 {
        return Mesh::new();
    }

    let mut mesh = Mesh::with_capacity(segments as usize + 1, segments as usize);
    let circle = unit_circle(segments);
    let frame = orthonormal_frame(d);

    let ring = push_ring(&mut mesh, base, frame, radius, &circle, 0.0);
    let apex = mesh.push_vertex(tip, 1.0);
    for k in 0..segments {
        let next = (k + 1) % segments;
        mesh.push_triangle(ring + k, ring + next, apex);
    }
    mesh
}
