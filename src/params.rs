//! Parameters for skirt generation, plus the clamping helpers an editor uses to keep
//! user input in range.

use serde::{Deserialize, Serialize};

use crate::error::{SolarMeshError, SolarMeshResult};
use crate::strategy::GenerationMode;

/// Distance at which a ray that hits nothing is cut off.
pub const DEFAULT_MAX_RAY_DISTANCE: f64 = 100.0;

/// Rotation of the whole fan, in degrees.
pub const DEFAULT_ANGULAR_OFFSET_DEGREES: f64 = 45.0;

pub const MIN_RAY_COUNT: usize = 4;
pub const MAX_RAY_COUNT: usize = 128;

pub const MIN_LIGHT_RAY_LENGTH: f64 = 0.1;
pub const MAX_LIGHT_RAY_LENGTH: f64 = 15.0;

/// Parameters of one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Rays per window. Must be a positive multiple of 4. Default: 16
    pub ray_count: usize,

    /// How far the far ring is pushed along the light direction. Default: 10.0
    pub light_ray_length: f64,

    /// Default: [`DEFAULT_MAX_RAY_DISTANCE`]
    pub max_ray_distance: f64,

    /// Default: [`DEFAULT_ANGULAR_OFFSET_DEGREES`]
    pub angular_offset_degrees: f64,

    /// Which generator builds the mesh. Default: uniform
    pub mode: GenerationMode,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            ray_count: 16,
            light_ray_length: 10.0,
            max_ray_distance: DEFAULT_MAX_RAY_DISTANCE,
            angular_offset_degrees: DEFAULT_ANGULAR_OFFSET_DEGREES,
            mode: GenerationMode::Uniform,
        }
    }
}

impl GenerationParams {
    #[must_use]
    pub const fn with_ray_count(mut self, ray_count: usize) -> Self {
        self.ray_count = ray_count;
        self
    }

    #[must_use]
    pub const fn with_light_ray_length(mut self, length: f64) -> Self {
        self.light_ray_length = length;
        self
    }

    #[must_use]
    pub const fn with_max_ray_distance(mut self, distance: f64) -> Self {
        self.max_ray_distance = distance;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks the ray count invariant.
    ///
    /// # Errors
    ///
    /// [`SolarMeshError::InvalidRayCount`] if the ray count is zero or not a multiple of 4.
    pub fn validate(&self) -> SolarMeshResult<()> {
        validate_ray_count(self.ray_count)
    }
}

pub fn validate_ray_count(ray_count: usize) -> SolarMeshResult<()> {
    if ray_count == 0 || ray_count % 4 != 0 {
        return Err(SolarMeshError::InvalidRayCount { ray_count });
    }
    Ok(())
}

/// Ray count quality levels offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum RayCountPreset {
    Custom,
    Low,
    Medium,
    High,
    VeryHigh,
    Ultra,
}

impl RayCountPreset {
    pub const ALL: [RayCountPreset; 6] = [
        RayCountPreset::Custom,
        RayCountPreset::Low,
        RayCountPreset::Medium,
        RayCountPreset::High,
        RayCountPreset::VeryHigh,
        RayCountPreset::Ultra,
    ];

    /// Raw preset value (26 per level), before normalization. `Custom` has none.
    pub fn raw_ray_count(self) -> Option<usize> {
        let level = Self::ALL.iter().position(|p| *p == self)?;
        (level > 0).then_some(level * 26)
    }

    /// The ray count this preset produces once clamped and snapped, or `current` for
    /// `Custom`.
    pub fn ray_count(self, current: usize) -> usize {
        normalize_ray_count(self.raw_ray_count().unwrap_or(current))
    }
}

/// Clamps a requested ray count to `[4, 128]` and snaps it to a multiple of 4.
///
/// Halfway values round to the even quarter, so 6 and 10 both become 8.
pub fn normalize_ray_count(requested: usize) -> usize {
    let clamped = requested.clamp(MIN_RAY_COUNT, MAX_RAY_COUNT);
    if clamped % 4 == 0 {
        return clamped;
    }
    ((clamped as f64 / 4.0).round_ties_even() as usize) * 4
}

pub fn clamp_light_ray_length(length: f64) -> f64 {
    length.clamp(MIN_LIGHT_RAY_LENGTH, MAX_LIGHT_RAY_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();

        assert_eq!(params.ray_count, 16);
        assert!((params.light_ray_length - 10.0).abs() < 1e-12);
        assert!((params.max_ray_distance - 100.0).abs() < 1e-12);
        assert!((params.angular_offset_degrees - 45.0).abs() < 1e-12);
        assert_eq!(params.mode, GenerationMode::Uniform);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_ray_counts_off_the_quadrants() {
        for bad in [0, 1, 2, 3, 5, 6, 18, 126] {
            assert_eq!(
                validate_ray_count(bad),
                Err(SolarMeshError::InvalidRayCount { ray_count: bad })
            );
        }
        for good in [4, 8, 12, 128, 256] {
            assert!(validate_ray_count(good).is_ok());
        }
    }

    #[test]
    fn normalize_matches_editor_rounding() {
        assert_eq!(normalize_ray_count(0), 4);
        assert_eq!(normalize_ray_count(5), 4);
        assert_eq!(normalize_ray_count(6), 8);
        assert_eq!(normalize_ray_count(7), 8);
        assert_eq!(normalize_ray_count(10), 8);
        assert_eq!(normalize_ray_count(14), 16);
        assert_eq!(normalize_ray_count(26), 24);
        assert_eq!(normalize_ray_count(500), 128);
    }

    #[test]
    fn presets_step_by_26_then_snap() {
        let counts: Vec<_> = RayCountPreset::ALL.iter().map(|p| p.ray_count(20)).collect();
        assert_eq!(counts, vec![20, 24, 52, 80, 104, 128]);
        assert_eq!(RayCountPreset::Medium.raw_ray_count(), Some(52));
        assert_eq!(RayCountPreset::Custom.raw_ray_count(), None);
    }

    #[test]
    fn light_ray_length_is_clamped() {
        assert_eq!(clamp_light_ray_length(0.0), 0.1);
        assert_eq!(clamp_light_ray_length(7.5), 7.5);
        assert_eq!(clamp_light_ray_length(40.0), 15.0);
    }

    #[test]
    fn params_load_from_partial_json() {
        let params: GenerationParams =
            serde_json::from_str(r#"{ "ray_count": 32, "mode": "Adaptive" }"#).unwrap();

        assert_eq!(params.ray_count, 32);
        assert_eq!(params.mode, GenerationMode::Adaptive);
        assert_eq!(params.max_ray_distance, DEFAULT_MAX_RAY_DISTANCE);
    }

    #[test]
    fn params_survive_json() {
        let params = GenerationParams::default()
            .with_ray_count(24)
            .with_light_ray_length(3.5)
            .with_mode(GenerationMode::Spot);

        let json = serde_json::to_string(&params).unwrap();

        assert_eq!(serde_json::from_str::<GenerationParams>(&json).unwrap(), params);
    }

    proptest! {
        #[test]
        fn normalized_counts_are_always_valid(requested in 0usize..1000) {
            let n = normalize_ray_count(requested);
            prop_assert!(validate_ray_count(n).is_ok());
            prop_assert!((MIN_RAY_COUNT..=MAX_RAY_COUNT).contains(&n));
        }

        #[test]
        fn preset_counts_are_always_valid(preset in any::<RayCountPreset>(), current in 0usize..200) {
            prop_assert!(validate_ray_count(preset.ray_count(current)).is_ok());
        }
    }
}
