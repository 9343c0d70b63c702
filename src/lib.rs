//! Procedural "solar skirt" meshes around window openings.
//!
//! For every window a fan of rays is cast in the window's local horizontal plane.
//! Each ray is resolved to a near point (the first obstruction, or the end of the ray
//! if nothing is in the way), and a far point is projected from it along the light
//! direction. The point pairs are stitched into a closed ribbon of quads, and the
//! ribbons of all windows are concatenated into a single [`MeshPayload`].
//!
//! Ray intersection is delegated to a [`RayIntersectionQuery`], so the crate can run
//! against a physics scene, a set of parry colliders, or a test oracle.

pub mod assembler;
pub mod debug;
pub mod error;
pub mod intersection;
pub mod mesh;
pub mod params;
pub mod primitive;
pub mod sampler;
pub mod strategy;

#[cfg(test)]
pub mod proptest;

// Re-export commonly used types
pub use assembler::assemble;
pub use debug::{debug_overlay, DebugOverlay};
pub use error::{SolarMeshError, SolarMeshResult};
pub use intersection::{NoObstruction, ObstacleSet, RayIntersectionQuery};
pub use mesh::payload::MeshPayload;
pub use mesh::ribbon::{build_ribbon, MeshSlice};
pub use mesh::trimesh::{ConnectedComponents, IndexTriangle, TriangleMesh, VertexIndex};
pub use params::{
    clamp_light_ray_length, normalize_ray_count, GenerationParams, RayCountPreset,
};
pub use primitive::aabb::Aabb;
pub use primitive::frame::WindowFrame;
pub use primitive::ray::Ray;
pub use primitive::segment::Segment;
pub use primitive::triangle::Triangle;
pub use sampler::{ray_direction, sample_window, PointPair};
pub use strategy::{GenerationMode, GenerationState, SolarMesh};
