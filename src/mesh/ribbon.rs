//! Stitching near/far point pairs into a closed ribbon.
//!
//! Ray `j` owns local vertices `2j` (near) and `2j + 1` (far). Neighbouring rays form a
//! quad split into two triangles, and the last ray is joined back to ray 0 so the
//! ribbon is a closed loop.

use itertools::Itertools;
use nalgebra::{Point3, Vector2};

use crate::mesh::trimesh::IndexTriangle;
use crate::sampler::PointPair;

/// The ribbon of a single window, indexed from 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshSlice {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<IndexTriangle>,
    /// One UV per vertex.
    pub uvs: Vec<Vector2<f64>>,
}

impl MeshSlice {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of entries this slice occupies in a flat index buffer.
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Builds the closed ribbon for one window from its point pairs, in ray order.
///
/// `n` pairs produce `2n` vertices and `2n` triangles. The `u` coordinate is the
/// fraction of the way around the loop (`j / n`, real-valued) and `v` is 0 on the near
/// ring and 1 on the far ring.
///
/// An empty input produces an empty slice.
pub fn build_ribbon(pairs: &[PointPair]) -> MeshSlice {
    let ray_count = pairs.len();
    if ray_count == 0 {
        return MeshSlice::default();
    }

    let mut slice = MeshSlice {
        vertices: Vec::with_capacity(2 * ray_count),
        triangles: Vec::with_capacity(2 * ray_count),
        uvs: Vec::with_capacity(2 * ray_count),
    };

    for (j, pair) in pairs.iter().enumerate() {
        let u = j as f64 / ray_count as f64;

        slice.vertices.push(pair.near);
        slice.vertices.push(pair.far);
        slice.uvs.push(Vector2::new(u, 0.0));
        slice.uvs.push(Vector2::new(u, 1.0));
    }

    for (j, next) in (0..ray_count).circular_tuple_windows() {
        let (near, far) = (2 * j, 2 * j + 1);
        let (next_near, next_far) = (2 * next, 2 * next + 1);

        slice
            .triangles
            .push(IndexTriangle::from_raw(near, far, next_near));
        slice
            .triangles
            .push(IndexTriangle::from_raw(next_near, far, next_far));
    }

    slice
}
