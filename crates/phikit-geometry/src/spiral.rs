//! # Golden Spiral Generator
//!
//! Approximates a golden (logarithmic) spiral with quarter-circle arcs drawn
//! through a Fibonacci tiling of squares. Each new square is attached to the
//! bounding box of the squares placed so far, walking a four-step quadrant
//! cycle, so the tiling grows by roughly PHI per quarter turn.

use crate::path::{PathBuilder, PathRole, ShapePath};
use crate::shapes::ShapeGenerator;
use phikit_core::{error::ensure_positive, fibonacci, GeometryResult, GoldenConstants, Point2D};
use serde::{Deserialize, Serialize};

/// Spiral parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Number of squares; `iterations - 1` arcs are drawn.
    pub iterations: usize,
    /// Side of the first square.
    pub start_size: f64,
    /// Emit the square outlines as well.
    pub show_squares: bool,
    /// Flip every arc's sweep direction.
    pub reflect: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            start_size: 1.0,
            show_squares: false,
            reflect: false,
        }
    }
}

impl SpiralConfig {
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("start_size", self.start_size)?;
        Ok(())
    }
}

/// Quarter of the turn a square occupies.
///
/// The quadrant names where the square is attached to the tiling and which
/// quadrant of its arc's circle the spiral sweeps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

/// Axis-aligned bounding box of the tiling so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub min: Point2D,
    pub max: Point2D,
}

/// Where an arc runs inside its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterArc {
    pub center: Point2D,
    pub start: Point2D,
    pub end: Point2D,
}

impl Quadrant {
    pub const CYCLE: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
        Quadrant::TopLeft,
    ];

    /// Quadrant of the square at `step` (square 0 is `TopRight`).
    pub fn from_step(step: usize) -> Self {
        Self::CYCLE[step % 4]
    }

    pub fn next(self) -> Self {
        match self {
            Quadrant::TopRight => Quadrant::BottomRight,
            Quadrant::BottomRight => Quadrant::BottomLeft,
            Quadrant::BottomLeft => Quadrant::TopLeft,
            Quadrant::TopLeft => Quadrant::TopRight,
        }
    }

    /// Top-left corner of a new square of side `size` attached to `bounds`.
    ///
    /// TR attaches to the right edge (top aligned), BR below (right
    /// aligned), BL to the left (bottom aligned) and TL above (left aligned).
    pub fn place(self, bounds: &TileBounds, size: f64) -> Point2D {
        match self {
            Quadrant::TopRight => Point2D::new(bounds.max.x, bounds.min.y),
            Quadrant::BottomRight => Point2D::new(bounds.max.x - size, bounds.max.y),
            Quadrant::BottomLeft => Point2D::new(bounds.min.x - size, bounds.max.y - size),
            Quadrant::TopLeft => Point2D::new(bounds.min.x, bounds.min.y - size),
        }
    }

    /// The quarter arc through a square with top-left corner `origin`.
    /// The centre is the corner opposite the swept quadrant.
    pub fn arc(self, origin: Point2D, size: f64) -> QuarterArc {
        let top_left = origin;
        let top_right = Point2D::new(origin.x + size, origin.y);
        let bottom_left = Point2D::new(origin.x, origin.y + size);
        let bottom_right = Point2D::new(origin.x + size, origin.y + size);

        match self {
            Quadrant::TopRight => QuarterArc {
                center: bottom_left,
                start: top_left,
                end: bottom_right,
            },
            Quadrant::BottomRight => QuarterArc {
                center: top_left,
                start: top_right,
                end: bottom_left,
            },
            Quadrant::BottomLeft => QuarterArc {
                center: top_right,
                start: bottom_right,
                end: top_left,
            },
            Quadrant::TopLeft => QuarterArc {
                center: bottom_right,
                start: bottom_left,
                end: top_right,
            },
        }
    }
}

/// One square of the tiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralSquare {
    pub quadrant: Quadrant,
    pub origin: Point2D,
    pub size: f64,
}

impl SpiralSquare {
    pub fn arc(&self) -> QuarterArc {
        self.quadrant.arc(self.origin, self.size)
    }
}

/// Golden spiral generator.
#[derive(Debug, Clone)]
pub struct SpiralGenerator {
    config: SpiralConfig,
    constants: GoldenConstants,
}

impl SpiralGenerator {
    pub fn new(config: SpiralConfig) -> GeometryResult<Self> {
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

    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Fibonacci-scaled square sides, `start_size * F[i]`.
    pub fn square_sizes(&self) -> GeometryResult<Vec<f64>> {
        (0..self.config.iterations)
            .map(|i| Ok(self.config.start_size * fibonacci(i)? as f64))
            .collect()
    }

    /// Lay out the square tiling.
    pub fn squares(&self) -> GeometryResult<Vec<SpiralSquare>> {
        let sizes = self.square_sizes()?;
        let mut squares = Vec::with_capacity(sizes.len());
        let mut bounds: Option<TileBounds> = None;
        let mut quadrant = Quadrant::from_step(0);

        for size in sizes {
            let origin = match &bounds {
                Some(b) => quadrant.place(b, size),
                None => Point2D::ORIGIN,
            };
            let corner = Point2D::new(origin.x + size, origin.y + size);
            bounds = Some(match bounds {
                Some(b) => TileBounds {
                    min: Point2D::new(b.min.x.min(origin.x), b.min.y.min(origin.y)),
                    max: Point2D::new(b.max.x.max(corner.x), b.max.y.max(corner.y)),
                },
                None => TileBounds {
                    min: origin,
                    max: corner,
                },
            });
            squares.push(SpiralSquare {
                quadrant,
                origin,
                size,
            });
            quadrant = quadrant.next();
        }

        Ok(squares)
    }

    /// Growth factor between consecutive squares, which tends to PHI.
    pub fn growth_ratio(&self) -> GeometryResult<Option<f64>> {
        let sizes = self.square_sizes()?;
        Ok(match sizes.as_slice() {
            [.., a, b] => Some(b / a),
            _ => None,
        })
    }

    pub fn generate(&self) -> GeometryResult<ShapePath> {
        let mut shape = ShapePath::new();
        if self.config.iterations < 2 {
            tracing::debug!(
                "Spiral with {} iterations has no arcs, returning empty path",
                self.config.iterations
            );
            return Ok(shape);
        }

        let squares = self.squares()?;
        let sweep = !self.config.reflect;

        let mut spiral = PathBuilder::new();
        spiral.move_to(squares[0].arc().start);
        for pair in squares.windows(2) {
            let radius = pair[0].size.min(pair[1].size);
            spiral.circular_arc_to(radius, sweep, pair[0].arc().end);
        }
        shape.push(spiral.build(PathRole::Spiral));

        if self.config.show_squares {
            for square in &squares {
                let mut outline = PathBuilder::new();
                outline.rect(square.origin, square.size);
                shape.push(outline.build(PathRole::Square).with_weight(self.constants.phi_inverse));
            }
        }

        tracing::debug!(
            "Generated spiral: {} squares, {} arcs",
            squares.len(),
            shape.arc_count()
        );
        Ok(shape)
    }
}

impl ShapeGenerator for SpiralGenerator {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn generate(&self) -> GeometryResult<ShapePath> {
        SpiralGenerator::generate(self)
    }
}
