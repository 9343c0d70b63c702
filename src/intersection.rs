//! The ray-intersection seam between skirt generation and whatever holds the scene.
//!
//! Generation never intersects geometry itself. It asks a [`RayIntersectionQuery`] for
//! the first hit along each ray and falls back to the end of the ray when there is none.

use nalgebra::Point3;
use ordered_float::OrderedFloat;
use parry3d_f64::query::RayCast;
use parry3d_f64::shape::TriMesh;

use crate::error::SolarMeshResult;
use crate::mesh::trimesh::TriangleMesh;
use crate::primitive::ray::Ray;

/// Anything that can find the first surface along a ray.
///
/// Implement this for your scene type (physics world, collider set, ...) to cast the
/// window fans against it.
pub trait RayIntersectionQuery {
    /// Returns the closest hit point along `ray`, or `None` if nothing is hit within
    /// `max_distance`.
    ///
    /// Implementations must not report hits farther than `max_distance`.
    fn first_hit(&self, ray: &Ray, max_distance: f64) -> Option<Point3<f64>>;
}

/// An empty scene. Every ray runs to its full length.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstruction;

impl RayIntersectionQuery for NoObstruction {
    fn first_hit(&self, _ray: &Ray, _max_distance: f64) -> Option<Point3<f64>> {
        None
    }
}

impl<F> RayIntersectionQuery for F
where
    F: Fn(&Ray, f64) -> Option<Point3<f64>>,
{
    fn first_hit(&self, ray: &Ray, max_distance: f64) -> Option<Point3<f64>> {
        self(ray, max_distance)
    }
}

/// A set of static triangle-mesh colliders, e.g. the walls and overhangs around a
/// building's windows.
#[derive(Default)]
pub struct ObstacleSet {
    colliders: Vec<TriMesh>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one collider per mesh.
    ///
    /// # Errors
    ///
    /// Fails on the first mesh that cannot be turned into a collider.
    pub fn from_meshes<'a>(meshes: impl IntoIterator<Item = &'a TriangleMesh>) -> SolarMeshResult<Self> {
        let colliders = meshes
            .into_iter()
            .map(TriangleMesh::to_collider)
            .collect::<SolarMeshResult<Vec<_>>>()?;
        Ok(Self { colliders })
    }

    pub fn push(&mut self, mesh: &TriangleMesh) -> SolarMeshResult<()> {
        self.colliders.push(mesh.to_collider()?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl RayIntersectionQuery for ObstacleSet {
    fn first_hit(&self, ray: &Ray, max_distance: f64) -> Option<Point3<f64>> {
        let parry_ray = ray.to_parry();

        self.colliders
            .iter()
            .filter_map(|collider| collider.cast_local_ray(&parry_ray, max_distance, true))
            .min_by_key(|toi| OrderedFloat(*toi))
            .map(|toi| ray.at(toi))
    }
}
