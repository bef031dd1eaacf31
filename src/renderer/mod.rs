//! Procedural geometry for an external renderer
//!
//! Nothing here touches a GPU device: meshes are built on the CPU and handed
//! over as interleaved vertex and index buffers.

pub mod mesh;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use mesh::Mesh;
pub use scene::{Scene, SceneStyle};
pub use shapes::{build_cone, build_cylinder, build_tube, orthonormal_frame};
pub use vertex::{Vertex, gradient_vertices, solid_vertices, trajectory_color};
