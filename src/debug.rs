//! Line geometry for visualising the ray fans in an editor viewport.
//!
//! The overlay is computed from the same [`ray_direction`] as the mesh, so what is drawn
//! is what gets built.

use nalgebra::{Point3, Vector3};

use crate::error::SolarMeshResult;
use crate::intersection::RayIntersectionQuery;
use crate::params::GenerationParams;
use crate::primitive::frame::WindowFrame;
use crate::primitive::ray::Ray;
use crate::primitive::segment::Segment;
use crate::sampler::{light_unit, ray_direction};

/// Radius of the marker drawn at each window center.
pub const CENTER_MARKER_RADIUS: f64 = 0.1;

/// Length of the light direction indicator drawn from each window center.
pub const SUN_INDICATOR_LENGTH: f64 = 10.0;

/// What a viewport should draw for one configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugOverlay {
    /// Window centers, to be drawn as spheres of [`CENTER_MARKER_RADIUS`].
    pub centers: Vec<Point3<f64>>,
    /// Rays that hit nothing, from the center to the end of the ray (grey).
    pub missed_rays: Vec<Segment>,
    /// From each window center along the light direction (yellow).
    pub sun_indicators: Vec<Segment>,
    /// From every near point along the light, `light_ray_length` long (yellow).
    pub light_rays: Vec<Segment>,
}

/// Computes the overlay for every non-empty window slot.
///
/// # Errors
///
/// Fails like [`crate::GenerationMode::generate`] on an invalid ray count or a degenerate
/// light direction; nothing is drawn in that case.
pub fn debug_overlay<Q: RayIntersectionQuery + ?Sized>(
    windows: &[Option<WindowFrame>],
    light_direction: &Vector3<f64>,
    params: &GenerationParams,
    oracle: &Q,
) -> SolarMeshResult<DebugOverlay> {
    params.validate()?;
    let light = light_unit(light_direction)?;
    let mut overlay = DebugOverlay::default();

    for frame in windows.iter().flatten() {
        let ray_count = params.mode.ray_count_for(frame, params.ray_count);
        overlay.centers.push(frame.position);
        overlay.sun_indicators.push(Segment::from_offset(
            frame.position,
            light.as_ref() * SUN_INDICATOR_LENGTH,
        ));

        for j in 0..ray_count {
            let dir = ray_direction(frame, j, ray_count, params.angular_offset_degrees);
            let ray = Ray::new(frame.position, dir);

            let near = match oracle.first_hit(&ray, params.max_ray_distance) {
                Some(hit) => hit,
                None => {
                    let missed = ray.segment(params.max_ray_distance);
                    overlay.missed_rays.push(missed);
                    missed.b
                }
            };

            overlay.light_rays.push(Segment::from_offset(
                near,
                light.as_ref() * params.light_ray_length,
            ));
        }
    }

    Ok(overlay)
}
