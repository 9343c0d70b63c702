//! The anchor a ray fan is cast from.

use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Position and orientation of a window opening.
///
/// Rays are cast in the frame's local XZ plane, so the local Y axis is the window's "up".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    pub position: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl WindowFrame {
    pub fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// A frame at `position` with world-aligned axes.
    pub fn at(position: Point3<f64>) -> Self {
        Self::new(position, UnitQuaternion::identity())
    }

    /// A frame whose local +Z axis points along `forward` and whose local +Y axis is as
    /// close to `up` as possible.
    ///
    /// Returns `None` if `forward` is zero or collinear with `up`.
    pub fn looking_along(
        position: Point3<f64>,
        forward: &Vector3<f64>,
        up: &Vector3<f64>,
    ) -> Option<Self> {
        if forward.cross(up).norm_squared() < 1.0e-12 {
            return None;
        }
        Some(Self::new(position, UnitQuaternion::face_towards(forward, up)))
    }

    /// Applies the window's rotation to a direction given in local space.
    ///
    /// Translation does not affect directions.
    pub fn transform_direction(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * local
    }
}

impl Default for WindowFrame {
    fn default() -> Self {
        Self::at(Point3::origin())
    }
}
