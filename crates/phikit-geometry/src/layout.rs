//! # Layout Derivation
//!
//! Numeric layout metrics derived from the golden ratio and the Fibonacci
//! table: golden rectangles, a Fibonacci spacing scale and a PHI-based
//! modular size scale.

use phikit_core::error::ensure_positive;
use phikit_core::{fibonacci, GeometryError, GeometryResult, GoldenConstants};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of a golden rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldenRectangle {
    pub width: f64,
    pub height: f64,
}

impl GoldenRectangle {
    /// Solve the missing side. A known width gives `height = width / PHI`,
    /// a known height gives `width = height * PHI`.
    pub fn from_side(known: f64, known_is_width: bool) -> GeometryResult<Self> {
        Self::from_side_with(known, known_is_width, &GoldenConstants::default())
    }

    pub fn from_side_with(
        known: f64,
        known_is_width: bool,
        constants: &GoldenConstants,
    ) -> GeometryResult<Self> {
        let known = ensure_positive("known_side", known)?;
        Ok(if known_is_width {
            Self {
                width: known,
                height: known / constants.phi,
            }
        } else {
            Self {
                width: known * constants.phi,
                height: known,
            }
        })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width.max(self.height) / self.width.min(self.height)
    }

    /// Cut off the square on the short side; the remainder is again golden.
    /// Returns the square's side and the remaining rectangle.
    pub fn subdivide(&self) -> (f64, GoldenRectangle) {
        if self.width >= self.height {
            (
                self.height,
                GoldenRectangle {
                    width: self.width - self.height,
                    height: self.height,
                },
            )
        } else {
            (
                self.width,
                GoldenRectangle {
                    width: self.width,
                    height: self.height - self.width,
                },
            )
        }
    }
}

/// Free-function form of [`GoldenRectangle::from_side`].
pub fn golden_rectangle(known: f64, known_is_width: bool) -> GeometryResult<GoldenRectangle> {
    GoldenRectangle::from_side(known, known_is_width)
}

/// Split `length` into its golden major and minor parts.
pub fn golden_split(length: f64) -> GeometryResult<(f64, f64)> {
    golden_split_with(length, &GoldenConstants::default())
}

pub fn golden_split_with(
    length: f64,
    constants: &GoldenConstants,
) -> GeometryResult<(f64, f64)> {
    let length = ensure_positive("length", length)?;
    let major = length / constants.phi;
    Ok((major, length - major))
}

/// `base * PHI^exponent`, the modular size scale.
pub fn golden_scale(base: f64, exponent: i32) -> GeometryResult<f64> {
    golden_scale_with(base, exponent, &GoldenConstants::default())
}

pub fn golden_scale_with(
    base: f64,
    exponent: i32,
    constants: &GoldenConstants,
) -> GeometryResult<f64> {
    let base = ensure_positive("base", base)?;
    Ok(base * constants.phi.powi(exponent))
}

/// Ordinal spacing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleStep {
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ScaleStep {
    pub const ALL: [ScaleStep; 7] = [
        ScaleStep::Xxs,
        ScaleStep::Xs,
        ScaleStep::Sm,
        ScaleStep::Md,
        ScaleStep::Lg,
        ScaleStep::Xl,
        ScaleStep::Xxl,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> GeometryResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            GeometryError::invalid_index(
                index as f64,
                format!("scale step must be at most {}", Self::ALL.len() - 1),
            )
        })
    }
}

impl fmt::Display for ScaleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleStep::Xxs => "xxs",
            ScaleStep::Xs => "xs",
            ScaleStep::Sm => "sm",
            ScaleStep::Md => "md",
            ScaleStep::Lg => "lg",
            ScaleStep::Xl => "xl",
            ScaleStep::Xxl => "xxl",
        };
        f.write_str(name)
    }
}

impl FromStr for ScaleStep {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xxs" => Ok(ScaleStep::Xxs),
            "xs" => Ok(ScaleStep::Xs),
            "sm" => Ok(ScaleStep::Sm),
            "md" => Ok(ScaleStep::Md),
            "lg" => Ok(ScaleStep::Lg),
            "xl" => Ok(ScaleStep::Xl),
            "xxl" => Ok(ScaleStep::Xxl),
            _ => Err(GeometryError::invalid_parameter(
                "scale_step",
                format!("unknown step '{}'", s),
            )),
        }
    }
}

/// Spacing scale backed by the Fibonacci table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutScale {
    /// Multiplier applied to every table entry.
    pub base_unit: f64,
    /// Table index of the smallest step.
    pub offset: usize,
}

impl Default for LayoutScale {
    fn default() -> Self {
        Self {
            base_unit: 1.0,
            offset: 2,
        }
    }
}

impl LayoutScale {
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("base_unit", self.base_unit)?;
        fibonacci(self.table_index(ScaleStep::Xxl)?)?;
        Ok(())
    }

    fn table_index(&self, step: ScaleStep) -> GeometryResult<usize> {
        step.index().checked_add(self.offset).ok_or_else(|| {
            GeometryError::invalid_index(
                self.offset as f64,
                "scale offset overflows the table index",
            )
        })
    }

    /// Spacing for an ordinal step: `F[step + offset] * base_unit`.
    /// Steps past `Xxl` raise `InvalidIndex`.
    pub fn spacing_for(&self, step: usize) -> GeometryResult<f64> {
        let step = ScaleStep::from_index(step)?;
        Ok(fibonacci(self.table_index(step)?)? as f64 * self.base_unit)
    }

    pub fn spacing(&self, step: ScaleStep) -> GeometryResult<f64> {
        self.spacing_for(step.index())
    }

    /// Every step with its spacing, smallest first.
    pub fn table(&self) -> GeometryResult<Vec<(ScaleStep, f64)>> {
        ScaleStep::ALL
            .iter()
            .map(|step| Ok((*step, self.spacing(*step)?)))
            .collect()
    }
}

/// Spacing on the default scale: 2, 3, 5, 8, 13, 21, 34.
pub fn spacing_for(step: usize) -> GeometryResult<f64> {
    LayoutScale::default().spacing_for(step)
}
