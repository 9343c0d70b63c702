//! Resolving the ray fan of a window into near/far point pairs.

use nalgebra::{Point3, Unit, Vector3};
use tracing::trace;

use crate::error::{SolarMeshError, SolarMeshResult};
use crate::intersection::RayIntersectionQuery;
use crate::params::GenerationParams;
use crate::primitive::frame::WindowFrame;
use crate::primitive::ray::Ray;

/// The two ends of one ribbon rung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    /// First obstruction along the ray, or the end of the ray if nothing was hit.
    pub near: Point3<f64>,
    /// `near` pushed along the light direction.
    pub far: Point3<f64>,
}

/// World-space direction of ray `ray_index` out of `ray_count`.
///
/// The angle, in degrees within the window's local XZ plane, is
/// `(ray_index + 1) * 360 / ray_count + angular_offset_degrees`.
///
/// This is the only place the fan layout is computed; the mesh builder and the debug
/// overlay both go through it.
pub fn ray_direction(
    frame: &WindowFrame,
    ray_index: usize,
    ray_count: usize,
    angular_offset_degrees: f64,
) -> Unit<Vector3<f64>> {
    let angle_step = 360.0 / ray_count as f64;
    let angle = ((ray_index + 1) as f64 * angle_step + angular_offset_degrees).to_radians();
    let local_direction = Vector3::new(angle.cos(), 0.0, angle.sin());

    Unit::new_normalize(frame.transform_direction(&local_direction))
}

/// Normalizes a light direction, rejecting zero and non-finite vectors.
pub fn light_unit(light_direction: &Vector3<f64>) -> SolarMeshResult<Unit<Vector3<f64>>> {
    if !light_direction.iter().all(|c| c.is_finite()) {
        return Err(SolarMeshError::DegenerateLightDirection);
    }
    Unit::try_new(*light_direction, 1.0e-12).ok_or(SolarMeshError::DegenerateLightDirection)
}

/// Casts a single ray of the fan and resolves its point pair.
///
/// A ray that hits nothing ends at `max_ray_distance`, so this never fails.
pub fn sample_ray<Q: RayIntersectionQuery + ?Sized>(
    frame: &WindowFrame,
    ray_index: usize,
    ray_count: usize,
    light: &Unit<Vector3<f64>>,
    params: &GenerationParams,
    oracle: &Q,
) -> PointPair {
    let dir = ray_direction(frame, ray_index, ray_count, params.angular_offset_degrees);
    let ray = Ray::new(frame.position, dir);

    let near = match oracle.first_hit(&ray, params.max_ray_distance) {
        Some(hit) => hit,
        None => {
            trace!(ray_index, "ray hit nothing, using its end point");
            ray.at(params.max_ray_distance)
        }
    };
    let far = near + light.as_ref() * params.light_ray_length;

    PointPair { near, far }
}

/// Resolves all `ray_count` rays of a window, in ray order.
///
/// `ray_count` is expected to have passed validation already.
pub fn sample_window<Q: RayIntersectionQuery + ?Sized>(
    frame: &WindowFrame,
    ray_count: usize,
    light: &Unit<Vector3<f64>>,
    params: &GenerationParams,
    oracle: &Q,
) -> Vec<PointPair> {
    (0..ray_count)
        .map(|j| sample_ray(frame, j, ray_count, light, params, oracle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersection::NoObstruction;
    use crate::proptest::{arbitrary_frame, arbitrary_light_direction, arbitrary_ray_count};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn four_ray_fan_starts_at_135_degrees() {
        let frame = WindowFrame::default();
        let expected = [
            Vector3::new(-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
            Vector3::new(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
            Vector3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
            Vector3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
        ];

        for (j, want) in expected.iter().enumerate() {
            let dir = ray_direction(&frame, j, 4, 45.0);
            assert_relative_eq!(dir.into_inner(), *want, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn missed_rays_end_at_max_distance() {
        let frame = WindowFrame::at(Point3::new(1.0, 2.0, 3.0));
        let params = GenerationParams::default()
            .with_ray_count(4)
            .with_light_ray_length(2.0);
        let light = light_unit(&Vector3::new(0.0, 0.0, -1.0)).unwrap();

        let pairs = sample_window(&frame, 4, &light, &params, &NoObstruction);

        assert_eq!(pairs.len(), 4);
        for (j, pair) in pairs.iter().enumerate() {
            let dir = ray_direction(&frame, j, 4, 45.0);
            assert_eq!(pair.near, frame.position + dir.as_ref() * 100.0);
            assert_relative_eq!(pair.far - pair.near, Vector3::new(0.0, 0.0, -2.0), epsilon = 1.0e-9);
        }
    }

    #[test]
    fn oracle_hits_become_near_points() {
        let frame = WindowFrame::default();
        let params = GenerationParams::default().with_ray_count(8);
        let light = light_unit(&Vector3::new(0.0, -3.0, 0.0)).unwrap();
        // A cylinder wall of radius 5 around the window.
        let wall = |ray: &Ray, max: f64| (5.0 <= max).then(|| ray.at(5.0));

        let pairs = sample_window(&frame, 8, &light, &params, &wall);

        for pair in pairs {
            assert_relative_eq!((pair.near - frame.position).norm(), 5.0, epsilon = 1.0e-12);
            assert_relative_eq!(pair.far - pair.near, Vector3::new(0.0, -10.0, 0.0), epsilon = 1.0e-9);
        }
    }

    #[test]
    fn degenerate_light_is_rejected() {
        assert_eq!(
            light_unit(&Vector3::zeros()),
            Err(SolarMeshError::DegenerateLightDirection)
        );
        assert_eq!(
            light_unit(&Vector3::new(f64::NAN, 0.0, 1.0)),
            Err(SolarMeshError::DegenerateLightDirection)
        );
        assert_relative_eq!(
            light_unit(&Vector3::new(0.0, 0.0, -4.0)).unwrap().into_inner(),
            Vector3::new(0.0, 0.0, -1.0),
            epsilon = 1.0e-12
        );
    }

    proptest! {
        #[test]
        fn directions_lie_in_window_plane(frame in arbitrary_frame(), ray_count in arbitrary_ray_count()) {
            let up = frame.transform_direction(&Vector3::y());
            for j in 0..ray_count {
                let dir = ray_direction(&frame, j, ray_count, 45.0);
                prop_assert!(dir.dot(&up).abs() < 1.0e-9);
                prop_assert!((dir.norm() - 1.0).abs() < 1.0e-9);
            }
        }

        #[test]
        fn fan_has_quadrant_symmetry(frame in arbitrary_frame(), ray_count in arbitrary_ray_count()) {
            // Ray j and ray j + n/2 point in opposite directions.
            let half = ray_count / 2;
            for j in 0..half {
                let a = ray_direction(&frame, j, ray_count, 45.0);
                let b = ray_direction(&frame, j + half, ray_count, 45.0);
                prop_assert!((a.into_inner() + b.into_inner()).norm() < 1.0e-9);
            }
        }

        #[test]
        fn far_point_is_offset_along_light(
            frame in arbitrary_frame(),
            light in arbitrary_light_direction(),
            length in 0.1..15.0f64,
        ) {
            let params = GenerationParams::default().with_light_ray_length(length);
            let unit = light_unit(&light).unwrap();
            for pair in sample_window(&frame, 8, &unit, &params, &NoObstruction) {
                prop_assert!(((pair.far - pair.near) - unit.as_ref() * length).norm() < 1.0e-9);
            }
        }
    }
}
