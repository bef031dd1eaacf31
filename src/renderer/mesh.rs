//! Indexed triangle mesh handed to the external renderer

use glam::DVec3;

/// Vertex positions plus triangle index triples.
///
/// `along` holds, per vertex, the normalized position along the source
/// centerline (0 = first point, 1 = last point). Renderers use it to map a
/// gradient over the trajectory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<DVec3>,
    pub triangles: Vec<[u32; 3]>,
    pub along: Vec<f32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
            along: Vec::with_capacity(vertices),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.along.clear();
    }

    /// Push a vertex and return its index
    #[inline]
    pub fn push_vertex(&mut self, position: DVec3, along: f32) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.along.push(along);
        index
    }

    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Append another mesh, rebasing its indices
    pub fn append(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.along.extend_from_slice(&other.along);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    /// Flattened index buffer
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Face normal of a triangle (unnormalized, right-hand winding)
    pub fn face_normal(&self, triangle: usize) -> DVec3 {
        let [a, b, c] = self.triangles[triangle];
        let (a, b, c) = (
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        );
        (b - a).cross(c - a)
    }

    /// True if every vertex coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.push_vertex(DVec3::ZERO, 0.0);
        let b = mesh.push_vertex(DVec3::X, 0.5);
        let c = mesh.push_vertex(DVec3::Y, 1.0);
        mesh.push_triangle(a, b, c);
        mesh
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut mesh = triangle();
        mesh.append(&triangle());
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.along.len(), 6);
        assert_eq!(mesh.indices(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_face_normal_ccw() {
        let mesh = triangle();
        assert_eq!(mesh.face_normal(0), DVec3::Z);
    }

    #[test]
    fn test_clear() {
        let mut mesh = triangle();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.along.is_empty());
    }
}
