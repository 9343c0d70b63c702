use nalgebra::Point3;

/// Axis-Aligned Bounding Box (AABB) structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum point of the AABB.
    pub min: Point3<f64>,
    /// Maximum point of the AABB.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates an AABB that encompasses all the given points.
    ///
    /// # Arguments
    ///
    /// * `points` - The points to be enclosed by the AABB.
    ///
    /// # Returns
    ///
    /// An AABB that encloses all the given points, or `None` if there are no points.
    pub fn around_points(points: impl IntoIterator<Item = Point3<f64>>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut aabb = Self::singleton(points.next()?);

        for pt in points {
            aabb.expand_to_cover(pt);
        }

        Some(aabb)
    }

    /// Creates an AABB that represents a single point.
    pub fn singleton(pt: Point3<f64>) -> Self {
        Self { min: pt, max: pt }
    }

    /// Expands the AABB to cover the given point.
    pub fn expand_to_cover(&mut self, pt: Point3<f64>) {
        self.min = self.min.inf(&pt);
        self.max = self.max.sup(&pt);
    }

    pub fn contains(&self, pt: &Point3<f64>) -> bool {
        (0..3).all(|i| self.min[i] <= pt[i] && pt[i] <= self.max[i])
    }
}
