//! # PhiKit Geometry
//!
//! Procedural sacred-geometry engine. Every generator is a pure function of
//! its configuration and an injected [`GoldenConstants`] bundle, and returns
//! a [`ShapePath`]: role-tagged sequences of move/line/arc/curve commands
//! that a rendering layer consumes verbatim.
//!
//! ## Components
//!
//! - **Curve primitives**: cubic bezier point and tangent evaluation
//! - **Spiral**: golden spiral from a Fibonacci tiling of squares
//! - **Leaf / Branch**: bezier leaf outlines with veins, leaves along a stem
//! - **Vesica**: two-circle lens with golden-section guides
//! - **Layout**: golden rectangles and the Fibonacci spacing scale
//!
//! ## Architecture
//!
//! ```text
//! phikit-core (PHI, Fibonacci table, Point2D, errors)
//!   └── curve (bezier primitives)
//!         ├── spiral ─┐
//!         ├── leaf ───┤
//!         ├── branch ─┼── path (PathCommand, ShapePath, lyon export)
//!         └── vesica ─┘
//!   └── layout (golden rectangle, spacing scale)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use phikit_geometry::{SpiralConfig, SpiralGenerator};
//!
//! let spiral = SpiralGenerator::new(SpiralConfig {
//!     iterations: 5,
//!     ..SpiralConfig::default()
//! })
//! .unwrap();
//! assert_eq!(spiral.generate().unwrap().arc_count(), 4);
//! ```

pub mod branch;
pub mod curve;
pub mod layout;
pub mod leaf;
pub mod path;
pub mod shapes;
pub mod spiral;
pub mod vesica;

pub use branch::{BranchConfig, BranchGenerator, LeafPlacement};
pub use curve::{bezier_point_at, bezier_tangent_at, tangent_angle, BezierSegment};
pub use layout::{
    golden_rectangle, golden_scale, golden_scale_with, golden_split, golden_split_with,
    spacing_for, GoldenRectangle, LayoutScale, ScaleStep,
};
pub use leaf::{LeafConfig, LeafGenerator, VeinPlacement};
pub use path::{Bounds, PathBuilder, PathCommand, PathElement, PathRole, ShapePath};
pub use shapes::{generate_shape, Shape, ShapeConfig, ShapeGenerator, ShapeType};
pub use spiral::{Quadrant, QuarterArc, SpiralConfig, SpiralGenerator, SpiralSquare};
pub use vesica::{VesicaConfig, VesicaGenerator, VesicaGeometry};

pub use phikit_core::{GeometryError, GeometryResult, GoldenConstants, Point2D};
