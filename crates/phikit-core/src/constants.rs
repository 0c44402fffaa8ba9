//! Golden-ratio constants
//!
//! The golden ratio and the quantities derived from it. Generators receive
//! them through [`GoldenConstants`] rather than reading the free constants,
//! so each generator stays a function of its declared inputs.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The golden ratio, (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Reciprocal of the golden ratio, PHI - 1 = 1 / PHI.
pub const PHI_INVERSE: f64 = 0.618_033_988_749_895;

/// The golden angle in radians: 2π(1 - 1/PHI) ≈ 137.5°.
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Tolerance used when comparing derived geometry.
pub const EPSILON: f64 = 1e-9;

/// Returns PHI.
pub fn golden_ratio() -> f64 {
    PHI
}

/// Returns PHI_INVERSE.
pub fn golden_ratio_inverse() -> f64 {
    PHI_INVERSE
}

/// Returns the golden angle in radians.
pub fn golden_angle() -> f64 {
    GOLDEN_ANGLE
}

/// Injectable bundle of golden-ratio constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldenConstants {
    pub phi: f64,
    pub phi_inverse: f64,
    /// Golden angle in radians
    pub golden_angle: f64,
}

impl GoldenConstants {
    /// The standard constants.
    pub const STANDARD: GoldenConstants = GoldenConstants {
        phi: PHI,
        phi_inverse: PHI_INVERSE,
        golden_angle: GOLDEN_ANGLE,
    };

    /// Derive the full bundle from a ratio. `GoldenConstants::from_ratio(PHI)`
    /// reproduces [`GoldenConstants::STANDARD`].
    pub fn from_ratio(phi: f64) -> Self {
        let phi_inverse = 1.0 / phi;
        Self {
            phi,
            phi_inverse,
            golden_angle: 2.0 * PI * (1.0 - phi_inverse),
        }
    }

    /// Golden angle in degrees.
    pub fn golden_angle_degrees(&self) -> f64 {
        self.golden_angle.to_degrees()
    }
}

impl Default for GoldenConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
