//! # Branch Generator
//!
//! A single cubic stem with leaves distributed along it. Leaves are oriented
//! by the stem's tangent, shrink towards the tip and alternate sides with a
//! deterministic angular jitter. Fruit markers follow the Fibonacci
//! sequence rather than every leaf.

use crate::curve::BezierSegment;
use crate::leaf::{LeafConfig, LeafGenerator};
use crate::path::{PathBuilder, PathRole, ShapePath};
use crate::shapes::ShapeGenerator;
use nalgebra::{Isometry2, Vector2};
use phikit_core::error::{ensure_finite, ensure_positive};
use phikit_core::{is_fibonacci, GeometryError, GeometryResult, GoldenConstants, Point2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Fruit radius relative to the leaf length at that position.
const FRUIT_SCALE: f64 = 0.1;

/// Branch parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    pub start: Point2D,
    pub end: Point2D,
    /// Bend of the stem; 0 is straight, the sign picks the side.
    pub curvature: f64,
    pub leaf_count: usize,
    /// Leaf size at the base of the stem.
    pub leaf_size: f64,
    pub slenderness: f64,
    /// Angle between stem and leaf, in degrees.
    pub leaf_angle: f64,
    /// Amplitude of the per-leaf angular jitter, in degrees.
    pub jitter: f64,
    /// Distribute leaves from the tip back to the base.
    pub mirror: bool,
    pub show_fruit: bool,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            start: Point2D::new(10.0, 90.0),
            end: Point2D::new(90.0, 10.0),
            curvature: 0.3,
            leaf_count: 5,
            leaf_size: 0.3,
            slenderness: 0.3,
            leaf_angle: 45.0,
            jitter: 10.0,
            mirror: false,
            show_fruit: true,
        }
    }
}

impl BranchConfig {
    pub fn validate(&self) -> GeometryResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GeometryError::invalid_parameter(
                "start/end",
                "endpoints must be finite",
            ));
        }
        if self.start.distance_to(&self.end) == 0.0 {
            return Err(GeometryError::invalid_parameter(
                "start/end",
                "endpoints must be distinct",
            ));
        }
        if self.leaf_count == 0 {
            return Err(GeometryError::invalid_parameter(
                "leaf_count",
                "must be at least 1",
            ));
        }
        ensure_finite("curvature", self.curvature)?;
        ensure_positive("leaf_size", self.leaf_size)?;
        ensure_finite("leaf_angle", self.leaf_angle)?;
        ensure_finite("jitter", self.jitter)?;
        LeafConfig {
            leaf_size: self.leaf_size,
            slenderness: self.slenderness,
            ..LeafConfig::default()
        }
        .validate()
    }
}

/// Where one leaf sits on the stem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafPlacement {
    pub index: usize,
    /// Curve parameter along the stem.
    pub t: f64,
    pub position: Point2D,
    /// Direction the leaf points, in radians.
    pub angle: f64,
    /// Multiplier applied to `leaf_size`.
    pub size_factor: f64,
    pub has_fruit: bool,
}

/// Branch generator.
#[derive(Debug, Clone)]
pub struct BranchGenerator {
    config: BranchConfig,
    constants: GoldenConstants,
}

impl BranchGenerator {
    pub fn new(config: BranchConfig) -> GeometryResult<Self> {
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

    pub fn config(&self) -> &BranchConfig {
        &self.config
    }

    pub fn branch_length(&self) -> f64 {
        self.config.start.distance_to(&self.config.end)
    }

    /// The stem curve. Control points sit a third and two thirds along the
    /// chord, pushed off it by `length * PHI_INVERSE * curvature` (the second
    /// by a further PHI_INVERSE).
    pub fn stem(&self) -> BezierSegment {
        let start = self.config.start;
        let end = self.config.end;
        let chord = end - start;
        // validate() guarantees distinct endpoints.
        let normal = chord.normal().unwrap_or(Point2D::new(0.0, 1.0));
        let offset = self.branch_length() * self.constants.phi_inverse * self.config.curvature;

        let c1 = start.lerp(&end, 1.0 / 3.0) + normal * offset;
        let c2 = start.lerp(&end, 2.0 / 3.0) + normal * (offset * self.constants.phi_inverse);
        BezierSegment::new(start, c1, c2, end)
    }

    /// Parameter of leaf `index`: `i / (n - 1)`, or 0 for a single leaf.
    pub fn leaf_parameter(&self, index: usize) -> f64 {
        let n = self.config.leaf_count;
        let t = if n <= 1 {
            0.0
        } else {
            index as f64 / (n - 1) as f64
        };
        if self.config.mirror {
            1.0 - t
        } else {
            t
        }
    }

    pub fn leaf_placements(&self) -> GeometryResult<Vec<LeafPlacement>> {
        let stem = self.stem();
        let phi = self.constants.phi;
        let phi_inv = self.constants.phi_inverse;

        (0..self.config.leaf_count)
            .map(|i| {
                let t = self.leaf_parameter(i);
                let position = stem.point_at(t)?;
                let heading = stem.angle_at(t)?;
                let side = if i % 2 == 0 { 1.0 } else { -1.0 };
                let jitter = (i as f64 * phi).sin() * self.config.jitter;
                let angle = heading + (side * self.config.leaf_angle + jitter).to_radians();

                Ok(LeafPlacement {
                    index: i,
                    t,
                    position,
                    angle,
                    size_factor: 1.0 - t * (1.0 - phi_inv),
                    has_fruit: is_fibonacci(i as u64 + 1),
                })
            })
            .collect()
    }

    pub fn generate(&self) -> GeometryResult<ShapePath> {
        let stem = self.stem();
        let mut shape = ShapePath::new();

        let mut stem_path = PathBuilder::new();
        stem_path
            .move_to(stem.p0)
            .curve_to(stem.p1, stem.p2, stem.p3);
        shape.push(stem_path.build(PathRole::Stem));

        let placements = self.leaf_placements()?;
        for placement in &placements {
            let leaf = LeafGenerator::new(LeafConfig {
                leaf_size: self.config.leaf_size * placement.size_factor,
                slenderness: self.config.slenderness,
                mirror: placement.index % 2 == 1,
                ..LeafConfig::default()
            })?
            .with_constants(self.constants);

            // The local leaf axis points along -y (angle -π/2).
            let iso = Isometry2::new(
                Vector2::new(placement.position.x, placement.position.y),
                placement.angle + FRAC_PI_2,
            );
            for element in leaf.generate()?.transformed(&iso).elements {
                let element = if element.role == PathRole::Outline {
                    element.with_role(PathRole::Leaf)
                } else {
                    element
                };
                shape.push(element);
            }

            if self.config.show_fruit && placement.has_fruit {
                let radius = leaf.leaf_length() * FRUIT_SCALE;
                let mut fruit = PathBuilder::new();
                fruit.circle(placement.position, radius);
                shape.push(fruit.build(PathRole::Fruit));
            }
        }

        tracing::debug!(
            "Generated branch: length {:.3}, {} leaves",
            self.branch_length(),
            placements.len()
        );
        Ok(shape)
    }
}

impl ShapeGenerator for BranchGenerator {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn generate(&self) -> GeometryResult<ShapePath> {
        BranchGenerator::generate(self)
    }
}
