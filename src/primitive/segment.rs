use nalgebra::{Point3, Vector3};

/// A struct representing a line segment in 3D space.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Segment {
    /// The starting point of the segment.
    pub a: Point3<f64>,
    /// The ending point of the segment.
    pub b: Point3<f64>,
}

impl Segment {
    /// Creates a new `Segment` with the given starting and ending points.
    ///
    /// # Arguments
    ///
    /// * `a` - The starting point of the segment.
    /// * `b` - The ending point of the segment.
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self { a, b }
    }

    /// Segment from `a` along `offset`.
    pub fn from_offset(a: Point3<f64>, offset: Vector3<f64>) -> Self {
        Self { a, b: a + offset }
    }

    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}
