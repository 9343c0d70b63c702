//! Error types for skirt generation.

use thiserror::Error;

use crate::strategy::GenerationMode;

/// Result type for skirt generation.
pub type SolarMeshResult<T> = Result<T, SolarMeshError>;

/// Errors that abort a generation pass.
///
/// A pass that fails with any of these never touches previously generated geometry.
/// Empty window slots and rays that hit nothing are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolarMeshError {
    /// The shading pattern assumes quadrant symmetry.
    #[error("ray count must be a positive multiple of 4, got {ray_count}")]
    InvalidRayCount {
        /// The rejected ray count.
        ray_count: usize,
    },

    /// The requested mode has no generator behind it.
    #[error("generation mode {mode:?} has no generator")]
    UnresolvedGenerator {
        /// The requested mode.
        mode: GenerationMode,
    },

    /// The light direction cannot be normalized.
    #[error("light direction must be a finite, non-zero vector")]
    DegenerateLightDirection,

    /// A vertex index does not fit the 32-bit index buffers used for upload and colliders.
    #[error("vertex index {index} does not fit in a u32 index buffer")]
    IndexOverflow {
        /// The offending index.
        index: usize,
    },

    /// A triangle mesh could not be turned into a collider.
    #[error("cannot build collider: {0}")]
    Collider(String),
}
