//! # Vesica Piscis Generator
//!
//! Two equal circles in a 100×100 frame, each centred on the other's
//! circumference, the lens where they overlap and optional golden-section
//! guide lines.

use crate::path::{PathBuilder, PathRole, ShapePath};
use crate::shapes::ShapeGenerator;
use phikit_core::error::ensure_positive;
use phikit_core::{GeometryResult, GoldenConstants, Point2D};
use serde::{Deserialize, Serialize};

/// Side of the normalized frame.
pub const FRAME_SIZE: f64 = 100.0;

/// Vesica parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesicaConfig {
    pub radius: f64,
    pub show_circles: bool,
    pub show_lens: bool,
    pub show_guides: bool,
}

impl Default for VesicaConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            show_circles: true,
            show_lens: true,
            show_guides: false,
        }
    }
}

impl VesicaConfig {
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("radius", self.radius)?;
        Ok(())
    }
}

/// Solved construction points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesicaGeometry {
    pub radius: f64,
    pub left_center: Point2D,
    pub right_center: Point2D,
    /// Upper intersection of the two circles.
    pub top: Point2D,
    /// Lower intersection of the two circles.
    pub bottom: Point2D,
    /// Full distance between the intersections, `sqrt(4r² - r²) = r√3`.
    /// Each tip sits half of this from the centre line.
    pub lens_height: f64,
    /// Points dividing the lens height by PHI, measured from top and bottom.
    pub golden_points: [Point2D; 2],
}

impl VesicaGeometry {
    pub fn solve(radius: f64, constants: &GoldenConstants) -> Self {
        let center = FRAME_SIZE / 2.0;
        let left_center = Point2D::new(center - radius / 2.0, center);
        let right_center = Point2D::new(center + radius / 2.0, center);

        let lens_height = (4.0 * radius * radius - radius * radius).sqrt();
        let half_height = lens_height / 2.0;
        let top = Point2D::new(center, center - half_height);
        let bottom = Point2D::new(center, center + half_height);

        let golden = lens_height * constants.phi_inverse;
        let golden_points = [
            Point2D::new(center, top.y + golden),
            Point2D::new(center, bottom.y - golden),
        ];

        Self {
            radius,
            left_center,
            right_center,
            top,
            bottom,
            lens_height,
            golden_points,
        }
    }

    pub fn half_height(&self) -> f64 {
        self.lens_height / 2.0
    }

    /// Half of the lens's horizontal extent at height `y` (0 outside it).
    pub fn lens_half_width_at(&self, y: f64) -> f64 {
        let dy = y - self.left_center.y;
        let inside = self.radius * self.radius - dy * dy;
        if inside <= 0.0 {
            return 0.0;
        }
        (inside.sqrt() - self.radius / 2.0).max(0.0)
    }
}

/// Vesica piscis generator.
#[derive(Debug, Clone)]
pub struct VesicaGenerator {
    config: VesicaConfig,
    constants: GoldenConstants,
}

impl VesicaGenerator {
    pub fn new(config: VesicaConfig) -> GeometryResult<Self> {
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

    pub fn config(&self) -> &VesicaConfig {
        &self.config
    }

    pub fn geometry(&self) -> VesicaGeometry {
        VesicaGeometry::solve(self.config.radius, &self.constants)
    }

    pub fn generate(&self) -> GeometryResult<ShapePath> {
        let geometry = self.geometry();
        let r = geometry.radius;
        let mut shape = ShapePath::new();

        if self.config.show_circles {
            for center in [geometry.left_center, geometry.right_center] {
                let mut circle = PathBuilder::new();
                circle.circle(center, r);
                shape.push(circle.build(PathRole::Circle));
            }
        }

        if self.config.show_lens {
            // Both boundaries run top to bottom; the left one bulges left
            // (right circle), the right one bulges right (left circle).
            let mut lens = PathBuilder::new();
            lens.move_to(geometry.top)
                .circular_arc_to(r, false, geometry.bottom)
                .move_to(geometry.top)
                .circular_arc_to(r, true, geometry.bottom);
            shape.push(lens.build(PathRole::Lens));
        }

        if self.config.show_guides {
            let center = FRAME_SIZE / 2.0;

            let mut axis = PathBuilder::new();
            axis.move_to(geometry.top).line_to(geometry.bottom);
            shape.push(axis.build(PathRole::Guide));

            let mut centers = PathBuilder::new();
            centers
                .move_to(geometry.left_center)
                .line_to(geometry.right_center);
            shape.push(centers.build(PathRole::Guide));

            for golden in geometry.golden_points {
                let half_width = geometry.lens_half_width_at(golden.y);
                let mut line = PathBuilder::new();
                line.move_to(Point2D::new(center - half_width, golden.y))
                    .line_to(Point2D::new(center + half_width, golden.y));
                shape.push(
                    line.build(PathRole::Guide)
                        .with_weight(self.constants.phi_inverse),
                );
            }
        }

        tracing::debug!(
            "Generated vesica: radius {:.3}, lens height {:.3}",
            r,
            geometry.lens_height
        );
        Ok(shape)
    }
}

impl ShapeGenerator for VesicaGenerator {
    fn name(&self) -> &'static str {
        "vesica"
    }

    fn generate(&self) -> GeometryResult<ShapePath> {
        VesicaGenerator::generate(self)
    }
}
