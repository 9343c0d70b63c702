//! Generation modes and the stateful skirt component.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assembler::assemble;
use crate::error::{SolarMeshError, SolarMeshResult};
use crate::intersection::RayIntersectionQuery;
use crate::mesh::payload::MeshPayload;
use crate::params::GenerationParams;
use crate::primitive::frame::WindowFrame;
use crate::sampler::light_unit;

/// The ways a skirt can be generated.
///
/// `Uniform` and `Adaptive` currently share one algorithm. `Spot` is selectable but has
/// no generator, and asking for it fails with [`SolarMeshError::UnresolvedGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum GenerationMode {
    /// Same ray count for every window.
    #[default]
    Uniform,
    /// Per-window ray count. Falls back to the uniform count for now.
    Adaptive,
    Spot,
}

impl GenerationMode {
    /// Whether a generator exists for this mode.
    pub fn is_resolved(self) -> bool {
        matches!(self, GenerationMode::Uniform | GenerationMode::Adaptive)
    }

    /// Number of rays to cast for `frame`, given the pass-wide `base` count.
    pub fn ray_count_for(self, _frame: &WindowFrame, base: usize) -> usize {
        // TODO: scale Adaptive with the obstruction density around the window once the
        // heuristic is settled; must stay a multiple of 4.
        match self {
            GenerationMode::Uniform | GenerationMode::Adaptive | GenerationMode::Spot => base,
        }
    }

    /// Validates the pass and builds the payload.
    ///
    /// # Errors
    ///
    /// - [`SolarMeshError::UnresolvedGenerator`] for a mode without a generator
    /// - [`SolarMeshError::InvalidRayCount`] if `params.ray_count` is not a positive
    ///   multiple of 4
    /// - [`SolarMeshError::DegenerateLightDirection`] if `light_direction` cannot be
    ///   normalized
    pub fn generate<Q: RayIntersectionQuery + ?Sized>(
        self,
        windows: &[Option<WindowFrame>],
        light_direction: &Vector3<f64>,
        params: &GenerationParams,
        oracle: &Q,
    ) -> SolarMeshResult<MeshPayload> {
        if !self.is_resolved() {
            return Err(SolarMeshError::UnresolvedGenerator { mode: self });
        }
        params.validate()?;
        let light = light_unit(light_direction)?;

        Ok(assemble(windows, &light, params, oracle))
    }
}

/// Outcome of the most recent generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Validated,
    Rejected,
}

/// A skirt generator that keeps its last successful mesh.
///
/// A rejected pass leaves the previous mesh in place, so the caller can fix the
/// parameters and retry without losing what is on screen.
#[derive(Debug, Clone, Default)]
pub struct SolarMesh {
    pub params: GenerationParams,
    state: GenerationState,
    mesh: Option<MeshPayload>,
}

impl SolarMesh {
    pub fn new(params: GenerationParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// The mesh of the last successful pass.
    pub fn mesh(&self) -> Option<&MeshPayload> {
        self.mesh.as_ref()
    }

    /// Hands the current mesh over to the caller, e.g. for upload.
    pub fn take_mesh(&mut self) -> Option<MeshPayload> {
        self.mesh.take()
    }

    /// Rebuilds the mesh from scratch for `windows` and `light_direction`.
    ///
    /// # Errors
    ///
    /// See [`GenerationMode::generate`]. On error the previous mesh is kept and the state
    /// becomes [`GenerationState::Rejected`].
    pub fn generate<Q: RayIntersectionQuery + ?Sized>(
        &mut self,
        windows: &[Option<WindowFrame>],
        light_direction: &Vector3<f64>,
        oracle: &Q,
    ) -> SolarMeshResult<&MeshPayload> {
        let mode = self.params.mode;
        debug!(
            ?mode,
            windows = windows.len(),
            ray_count = self.params.ray_count,
            "generating solar mesh"
        );

        match mode.generate(windows, light_direction, &self.params, oracle) {
            Ok(payload) => {
                info!(
                    vertices = payload.vertex_count(),
                    indices = payload.index_count(),
                    populated_vertices = payload.populated_vertex_count(),
                    "solar mesh generated"
                );
                self.state = GenerationState::Validated;
                Ok(&*self.mesh.insert(payload))
            }
            Err(err) => {
                warn!(%err, "solar mesh generation rejected");
                self.state = GenerationState::Rejected;
                Err(err)
            }
        }
    }
}
