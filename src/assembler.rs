//! Building every window's ribbon and merging them into one payload.

use nalgebra::{Unit, Vector3};
use tracing::debug;

use crate::intersection::RayIntersectionQuery;
use crate::mesh::payload::MeshPayload;
use crate::mesh::ribbon::{build_ribbon, MeshSlice};
use crate::params::GenerationParams;
use crate::primitive::frame::WindowFrame;
use crate::sampler::sample_window;

/// Casts the fan of one window and stitches it into a ribbon.
pub fn build_window<Q: RayIntersectionQuery + ?Sized>(
    frame: &WindowFrame,
    ray_count: usize,
    light: &Unit<Vector3<f64>>,
    params: &GenerationParams,
    oracle: &Q,
) -> MeshSlice {
    build_ribbon(&sample_window(frame, ray_count, light, params, oracle))
}

/// Builds the ribbons of all windows, in list order, into a single payload.
///
/// Buffers are reserved for every slot of `windows`. Empty slots are skipped and leave
/// their share as slack at the end of the buffers (see [`MeshPayload`]); they never
/// shift the indices of the windows that follow.
///
/// Parameters are not validated here, see [`crate::SolarMesh::generate`].
pub fn assemble<Q: RayIntersectionQuery + ?Sized>(
    windows: &[Option<WindowFrame>],
    light: &Unit<Vector3<f64>>,
    params: &GenerationParams,
    oracle: &Q,
) -> MeshPayload {
    let payload = MeshPayload::allocate(windows.len(), params.ray_count);

    windows
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| match slot {
            Some(frame) => Some((i, frame)),
            None => {
                debug!(window = i, "skipping empty window slot");
                None
            }
        })
        .fold(payload, |mut payload, (i, frame)| {
            let ray_count = params.mode.ray_count_for(frame, params.ray_count);
            let slice = build_window(frame, ray_count, light, params, oracle);
            debug!(
                window = i,
                ray_count,
                vertex_offset = payload.populated_vertex_count(),
                "built window ribbon"
            );
            payload.append_slice(&slice);
            payload
        })
}
