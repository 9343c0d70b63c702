use crate::error::{SolarMeshError, SolarMeshResult};
use crate::primitive::triangle::Triangle;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

/// Represents an index of a vertex in a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    /// The index as stored in a 32-bit index buffer.
    pub fn to_u32(self) -> SolarMeshResult<u32> {
        u32::try_from(self.0).map_err(|_| SolarMeshError::IndexOverflow { index: self.0 })
    }
}

/// Represents a triangle in a mesh, defined by three vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexTriangle {
    /// The first vertex index of the triangle.
    pub a: VertexIndex,
    /// The second vertex index of the triangle.
    pub b: VertexIndex,
    /// The third vertex index of the triangle.
    pub c: VertexIndex,
}

impl IndexTriangle {
    /// Builds a triangle from raw vertex indices.
    pub fn from_raw(a: usize, b: usize, c: usize) -> Self {
        Self {
            a: VertexIndex(a),
            b: VertexIndex(b),
            c: VertexIndex(c),
        }
    }

    /// The same triangle with every index shifted by `offset`.
    pub fn offset(&self, offset: usize) -> Self {
        Self::from_raw(self.a.0 + offset, self.b.0 + offset, self.c.0 + offset)
    }

    pub fn vertices(&self) -> [VertexIndex; 3] {
        [self.a, self.b, self.c]
    }
}

/// Represents a triangle mesh, consisting of vertices and triangle indices.
///
/// Scene obstacles are described with this type, and a [`crate::MeshPayload`] can be
/// viewed as one.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// A list of vertices in the mesh.
    pub vertices: Vec<Point3<f64>>,
    /// A list of triangles, each defined by three vertex indices.
    pub indices: Vec<IndexTriangle>,
}

impl TriangleMesh {
    /// Creates a new `TriangleMesh` from a list of vertices and a list of triangles.
    ///
    /// # Parameters
    /// - `vertices`: A list of vertices in the mesh.
    /// - `indices`: A list of triangles, each defined by three vertex indices.
    ///
    /// # Returns
    /// A `TriangleMesh` object representing the mesh.
    pub fn new(vertices: Vec<Point3<f64>>, indices: Vec<IndexTriangle>) -> Self {
        Self { vertices, indices }
    }

    /// An axis-aligned rectangle, made of two triangles, spanned by `corner`, `corner + u`
    /// and `corner + v`.
    pub fn quad(corner: Point3<f64>, u: Vector3<f64>, v: Vector3<f64>) -> Self {
        Self::new(
            vec![corner, corner + u, corner + u + v, corner + v],
            vec![
                IndexTriangle::from_raw(0, 1, 2),
                IndexTriangle::from_raw(0, 2, 3),
            ],
        )
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |tri| Triangle {
            a: self.vertices[tri.a.0],
            b: self.vertices[tri.b.0],
            c: self.vertices[tri.c.0],
        })
    }

    /// Builds a parry collider for ray queries.
    ///
    /// Fails if the mesh has no triangles, refers to missing vertices, or has more vertices
    /// than a 32-bit index can address.
    pub fn to_collider(&self) -> SolarMeshResult<parry3d_f64::shape::TriMesh> {
        if let Some(bad) = self
            .indices
            .iter()
            .flat_map(|t| t.vertices())
            .find(|v| v.0 >= self.vertices.len())
        {
            return Err(SolarMeshError::Collider(format!(
                "vertex index {} out of range for {} vertices",
                bad.0,
                self.vertices.len()
            )));
        }

        let indices = self
            .indices
            .iter()
            .map(|f| Ok([f.a.to_u32()?, f.b.to_u32()?, f.c.to_u32()?]))
            .collect::<SolarMeshResult<Vec<_>>>()?;

        parry3d_f64::shape::TriMesh::new(self.vertices.clone(), indices)
            .map_err(|e| SolarMeshError::Collider(format!("{e:?}")))
    }
}

/// Groups of vertices and faces that are connected through shared triangles.
pub struct ConnectedComponents {
    pub components: Vec<Vec<VertexIndex>>,
    pub triangle_components: Vec<Vec<usize>>,
}

impl ConnectedComponents {
    /// Vertices referenced by no triangle form singleton components.
    pub fn connected_components_of_mesh(mesh: &TriangleMesh) -> Self {
        let mut uf = QuickUnionUf::<UnionBySize>::new(mesh.vertices.len());

        for tri in &mesh.indices {
            uf.union(tri.a.0, tri.b.0);
            uf.union(tri.b.0, tri.c.0);
            // a and c are already joined through b.
        }

        // Re-index the union-find roots as 0..m in order of first appearance.
        let mut component_map = HashMap::new();
        let mut next_index = 0;

        let vertex_to_component = (0..mesh.vertices.len())
            .map(|i| {
                let root = uf.find(i);
                *component_map.entry(root).or_insert_with(|| {
                    let index = next_index;
                    next_index += 1;
                    index
                })
            })
            .collect::<Vec<_>>();

        let mut components = vec![Vec::new(); next_index];
        for (i, &component) in vertex_to_component.iter().enumerate() {
            components[component].push(VertexIndex(i));
        }

        let mut triangle_components = vec![Vec::new(); next_index];
        for (i, tri) in mesh.indices.iter().enumerate() {
            triangle_components[vertex_to_component[tri.a.0]].push(i);
        }

        Self {
            components,
            triangle_components,
        }
    }

    /// Components that contain at least one triangle.
    pub fn non_trivial(&self) -> usize {
        self.triangle_components
            .iter()
            .filter(|faces| !faces.is_empty())
            .count()
    }
}
