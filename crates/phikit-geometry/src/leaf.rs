//! # Leaf Generator
//!
//! Builds an organic leaf outline from two cubic curves, a straight midrib
//! and golden-ratio-biased lateral veins.
//!
//! The leaf lives in a local frame with the stem at the origin and the tip
//! straight up at `(0, -length)` (y grows downward, as in screen space).
//! Near the base the outline's control points sit `width * PHI` off the
//! midrib and near the tip `width * PHI_INVERSE`, which gives the outline
//! its blunt base and tapering point.

use crate::path::{PathBuilder, PathRole, ShapePath};
use crate::shapes::ShapeGenerator;
use phikit_core::error::{ensure_in_range, ensure_positive};
use phikit_core::{GeometryError, GeometryResult, GoldenConstants, Point2D};
use serde::{Deserialize, Serialize};

/// Leaf length for `leaf_size = 1`, before the PHI_INVERSE scaling.
pub const LEAF_UNIT: f64 = 100.0;

/// Upper bound on lateral veins per side.
pub const MAX_VEINS: usize = 34;

/// Leaf parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafConfig {
    pub leaf_size: f64,
    /// Width relative to length, in (0, 1].
    pub slenderness: f64,
    /// Stroke weight of the midrib, in [0, 1]; veins scale from it.
    pub midrib_intensity: f64,
    /// Flip all horizontal offsets.
    pub mirror: bool,
    /// Lateral veins on each side.
    pub vein_count: usize,
    pub show_veins: bool,
}

impl Default for LeafConfig {
    fn default() -> Self {
        Self {
            leaf_size: 1.0,
            slenderness: 0.3,
            midrib_intensity: 0.7,
            mirror: false,
            vein_count: 5,
            show_veins: true,
        }
    }
}

impl LeafConfig {
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("leaf_size", self.leaf_size)?;
        ensure_positive("slenderness", self.slenderness)?;
        ensure_in_range("slenderness", self.slenderness, 0.0, 1.0)?;
        ensure_in_range("midrib_intensity", self.midrib_intensity, 0.0, 1.0)?;
        if self.vein_count > MAX_VEINS {
            return Err(GeometryError::invalid_parameter(
                "vein_count",
                format!("must be at most {}, got {}", MAX_VEINS, self.vein_count),
            ));
        }
        Ok(())
    }
}

/// A lateral vein's placement along the midrib.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VeinPlacement {
    /// Fraction of the leaf length, measured from the stem.
    pub position: f64,
    /// +1 for the primary side, -1 for the opposite side (before mirroring).
    pub side: f64,
}

/// Leaf generator.
#[derive(Debug, Clone)]
pub struct LeafGenerator {
    config: LeafConfig,
    constants: GoldenConstants,
}

impl LeafGenerator {
    pub fn new(config: LeafConfig) -> GeometryResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            constants: GoldenConstants::default(),
        })
    }

    pub fn with_constants(mut self, constants: GoldenConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn config(&self) -> &LeafConfig {
        &self.config
    }

    pub fn leaf_length(&self) -> f64 {
        self.config.leaf_size * LEAF_UNIT * self.constants.phi_inverse
    }

    pub fn leaf_width(&self) -> f64 {
        self.leaf_length() * self.config.slenderness * self.constants.phi_inverse
    }

    pub fn tip(&self) -> Point2D {
        Point2D::new(0.0, -self.leaf_length())
    }

    fn side(&self) -> f64 {
        if self.config.mirror {
            -1.0
        } else {
            1.0
        }
    }

    /// Vein positions: `k / (n + 1) * PHI_INVERSE` on the primary side, the
    /// opposite side staggered half a step further along.
    pub fn vein_placements(&self) -> Vec<VeinPlacement> {
        let n = self.config.vein_count;
        let step = self.constants.phi_inverse / (n + 1) as f64;
        (1..=n)
            .flat_map(|k| {
                let position = k as f64 * step;
                [
                    VeinPlacement {
                        position,
                        side: 1.0,
                    },
                    VeinPlacement {
                        position: position + step / 2.0,
                        side: -1.0,
                    },
                ]
            })
            .collect()
    }

    pub fn generate(&self) -> GeometryResult<ShapePath> {
        let phi = self.constants.phi;
        let phi_inv = self.constants.phi_inverse;
        let length = self.leaf_length();
        let width = self.leaf_width();
        let side = self.side();

        let stem = Point2D::ORIGIN;
        let tip = self.tip();
        let base_y = -length * (1.0 - phi_inv);
        let upper_y = -length * phi_inv;

        let mut shape = ShapePath::new();

        let mut outline = PathBuilder::new();
        outline
            .move_to(stem)
            .curve_to(
                Point2D::new(side * width * phi, base_y),
                Point2D::new(side * width * phi_inv, upper_y),
                tip,
            )
            .curve_to(
                Point2D::new(-side * width * phi_inv, upper_y),
                Point2D::new(-side * width * phi, base_y),
                stem,
            );
        shape.push(outline.build(PathRole::Outline));

        if self.config.midrib_intensity > 0.0 {
            let mut midrib = PathBuilder::new();
            midrib.move_to(stem).line_to(tip);
            shape.push(
                midrib
                    .build(PathRole::Midrib)
                    .with_weight(self.config.midrib_intensity),
            );
        }

        if self.config.show_veins {
            for vein in self.vein_placements() {
                let dir = vein.side * side;
                let start_y = -length * vein.position;
                let reach = width * (1.0 - vein.position);

                let mut path = PathBuilder::new();
                path.move_to(Point2D::new(0.0, start_y)).quad_to(
                    Point2D::new(dir * reach * phi_inv, start_y),
                    Point2D::new(dir * reach, start_y - reach * phi_inv),
                );
                let weight = self.config.midrib_intensity * phi_inv * (1.0 - vein.position);
                shape.push(path.build(PathRole::Vein).with_weight(weight));
            }
        }

        tracing::debug!(
            "Generated leaf: length {:.3}, width {:.3}, {} elements",
            length,
            width,
            shape.elements.len()
        );
        Ok(shape)
    }
}

impl ShapeGenerator for LeafGenerator {
    fn name(&self) -> &'static str {
        "leaf"
    }

    fn generate(&self) -> GeometryResult<ShapePath> {
        LeafGenerator::generate(self)
    }
}
