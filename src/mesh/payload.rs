//! The merged mesh of all windows, as handed to a renderer.

use nalgebra::{Point3, Vector2};

use crate::error::SolarMeshResult;
use crate::mesh::ribbon::MeshSlice;
use crate::mesh::trimesh::{IndexTriangle, TriangleMesh, VertexIndex};
use crate::primitive::aabb::Aabb;

/// Vertex, triangle and UV buffers for every window of a pass.
///
/// Buffers are sized up front for `window_count * ray_count` rays. Empty window slots
/// produce no geometry, and the windows after them are packed tightly, so the unused
/// space ends up as zero-filled slack at the tail of every buffer: vertices at the
/// origin, UVs at `(0, 0)` and degenerate `(0, 0, 0)` triangles.
/// [`MeshPayload::compacted`] drops it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshPayload {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<IndexTriangle>,
    pub uvs: Vec<Vector2<f64>>,
    /// Vertices actually written; everything past this is slack.
    populated_vertices: usize,
    populated_triangles: usize,
}

impl MeshPayload {
    /// Zero-filled buffers for `ray_count` rays over `window_count` window slots.
    pub fn allocate(window_count: usize, ray_count: usize) -> Self {
        let vertices = 2 * ray_count * window_count;
        Self {
            vertices: vec![Point3::origin(); vertices],
            triangles: vec![IndexTriangle::default(); vertices],
            uvs: vec![Vector2::zeros(); vertices],
            populated_vertices: 0,
            populated_triangles: 0,
        }
    }

    /// Appends a window slice after the ones already placed, shifting its indices by the
    /// current vertex count.
    ///
    /// Grows the buffers if the slice does not fit in the reserved space (per-window
    /// ray counts may exceed the base count).
    pub fn append_slice(&mut self, slice: &MeshSlice) {
        let vertex_offset = self.populated_vertices;
        let triangle_offset = self.populated_triangles;

        let vertex_end = vertex_offset + slice.vertex_count();
        let triangle_end = triangle_offset + slice.triangles.len();
        if self.vertices.len() < vertex_end {
            self.vertices.resize(vertex_end, Point3::origin());
            self.uvs.resize(vertex_end, Vector2::zeros());
        }
        if self.triangles.len() < triangle_end {
            self.triangles.resize(triangle_end, IndexTriangle::default());
        }

        self.vertices[vertex_offset..vertex_end].copy_from_slice(&slice.vertices);
        self.uvs[vertex_offset..vertex_end].copy_from_slice(&slice.uvs);
        for (dst, tri) in self.triangles[triangle_offset..triangle_end]
            .iter_mut()
            .zip(&slice.triangles)
        {
            *dst = tri.offset(vertex_offset);
        }

        self.populated_vertices = vertex_end;
        self.populated_triangles = triangle_end;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Length of the flat index buffer, slack included.
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn populated_vertex_count(&self) -> usize {
        self.populated_vertices
    }

    pub fn populated_triangle_count(&self) -> usize {
        self.populated_triangles
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The triangles as a flat `u32` index list, three entries per face.
    ///
    /// # Errors
    ///
    /// [`crate::SolarMeshError::IndexOverflow`] if an index does not fit in a `u32`.
    pub fn flat_indices(&self) -> SolarMeshResult<Vec<u32>> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices())
            .map(VertexIndex::to_u32)
            .collect()
    }

    /// A copy without the slack left by empty window slots.
    pub fn compacted(&self) -> Self {
        Self {
            vertices: self.vertices[..self.populated_vertices].to_vec(),
            triangles: self.triangles[..self.populated_triangles].to_vec(),
            uvs: self.uvs[..self.populated_vertices].to_vec(),
            populated_vertices: self.populated_vertices,
            populated_triangles: self.populated_triangles,
        }
    }

    /// Bounding box of the written vertices. Slack is ignored.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::around_points(self.vertices[..self.populated_vertices].iter().copied())
    }

    /// The populated geometry as a plain triangle mesh.
    pub fn as_triangle_mesh(&self) -> TriangleMesh {
        let compact = self.compacted();
        TriangleMesh::new(compact.vertices, compact.triangles)
    }
}
