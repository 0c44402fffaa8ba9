//! # Path Assembly
//!
//! Generators describe their output as ordered [`PathCommand`] sequences
//! grouped into role-tagged [`PathElement`]s. A [`ShapePath`] is handed to
//! the caller as-is; the engine never touches it again.

mod arc;
mod builder;
mod export;

pub use arc::{arc_center, arc_to_cubics};
pub use builder::PathBuilder;

use crate::curve::{transform_point, BezierSegment};
use nalgebra::Isometry2;
use phikit_core::Point2D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point2D),
    LineTo(Point2D),
    /// Elliptical arc from the current point to `to`, SVG semantics.
    /// `rotation` is the x-axis rotation in degrees.
    ArcTo {
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2D,
    },
    /// Cubic curve; `p0` repeats the current point.
    CurveTo(BezierSegment),
}

impl PathCommand {
    /// Where the pen rests after this command.
    pub fn end_point(&self) -> Point2D {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
            PathCommand::ArcTo { to, .. } => *to,
            PathCommand::CurveTo(segment) => segment.p3,
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, PathCommand::ArcTo { .. })
    }

    /// Reflection across `x = axis_x`. Arcs flip their sweep and rotation.
    pub fn mirrored_x(&self, axis_x: f64) -> Self {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p.reflect_x(axis_x)),
            PathCommand::LineTo(p) => PathCommand::LineTo(p.reflect_x(axis_x)),
            PathCommand::ArcTo {
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                to,
            } => PathCommand::ArcTo {
                radius_x,
                radius_y,
                rotation: -rotation,
                large_arc,
                sweep: !sweep,
                to: to.reflect_x(axis_x),
            },
            PathCommand::CurveTo(segment) => PathCommand::CurveTo(segment.mirrored_x(axis_x)),
        }
    }

    /// Rigid motion; arcs keep their radii and pick up the rotation.
    pub fn transformed(&self, iso: &Isometry2<f64>) -> Self {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(transform_point(p, iso)),
            PathCommand::LineTo(p) => PathCommand::LineTo(transform_point(p, iso)),
            PathCommand::ArcTo {
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
                to,
            } => PathCommand::ArcTo {
                radius_x,
                radius_y,
                rotation: rotation + iso.rotation.angle().to_degrees(),
                large_arc,
                sweep,
                to: transform_point(to, iso),
            },
            PathCommand::CurveTo(segment) => PathCommand::CurveTo(segment.transformed(iso)),
        }
    }
}

/// Semantic tag a renderer can key its styling on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRole {
    Outline,
    Spiral,
    Square,
    Midrib,
    Vein,
    Stem,
    Leaf,
    Fruit,
    Circle,
    Lens,
    Guide,
}

impl PathRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathRole::Outline => "outline",
            PathRole::Spiral => "spiral",
            PathRole::Square => "square",
            PathRole::Midrib => "midrib",
            PathRole::Vein => "vein",
            PathRole::Stem => "stem",
            PathRole::Leaf => "leaf",
            PathRole::Fruit => "fruit",
            PathRole::Circle => "circle",
            PathRole::Lens => "lens",
            PathRole::Guide => "guide",
        }
    }
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-tagged command sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    pub role: PathRole,
    /// Relative stroke weight hint, 1.0 for a regular line.
    pub weight: f64,
    pub commands: Vec<PathCommand>,
}

impl PathElement {
    pub fn new(role: PathRole, commands: Vec<PathCommand>) -> Self {
        Self {
            role,
            weight: 1.0,
            commands,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_role(mut self, role: PathRole) -> Self {
        self.role = role;
        self
    }

    /// The element starts and ends at the same point.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.commands.first(), self.commands.last()) {
            (Some(first), Some(last)) if self.commands.len() > 1 => first
                .end_point()
                .approx_eq(&last.end_point(), tolerance),
            _ => false,
        }
    }

    pub fn mirrored_x(&self, axis_x: f64) -> Self {
        Self {
            role: self.role,
            weight: self.weight,
            commands: self.commands.iter().map(|c| c.mirrored_x(axis_x)).collect(),
        }
    }

    pub fn transformed(&self, iso: &Isometry2<f64>) -> Self {
        Self {
            role: self.role,
            weight: self.weight,
            commands: self.commands.iter().map(|c| c.transformed(iso)).collect(),
        }
    }
}

/// Axis-aligned bounds of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    fn include(&mut self, p: Point2D) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }
}

/// Output of a shape generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePath {
    pub elements: Vec<PathElement>,
}

impl ShapePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: PathElement) {
        if !element.commands.is_empty() {
            self.elements.push(element);
        }
    }

    pub fn extend(&mut self, other: ShapePath) {
        self.elements.extend(other.elements);
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every command in output order.
    pub fn commands(&self) -> impl Iterator<Item = &PathCommand> {
        self.elements.iter().flat_map(|e| e.commands.iter())
    }

    pub fn elements_with_role(&self, role: PathRole) -> impl Iterator<Item = &PathElement> {
        self.elements.iter().filter(move |e| e.role == role)
    }

    pub fn arc_count(&self) -> usize {
        self.commands().filter(|c| c.is_arc()).count()
    }

    pub fn mirrored_x(&self, axis_x: f64) -> Self {
        Self {
            elements: self.elements.iter().map(|e| e.mirrored_x(axis_x)).collect(),
        }
    }

    pub fn transformed(&self, iso: &Isometry2<f64>) -> Self {
        Self {
            elements: self.elements.iter().map(|e| e.transformed(iso)).collect(),
        }
    }

    /// Bounds of the drawn geometry. Arcs are expanded into cubics first,
    /// and cubics contribute their control points, so the box may be
    /// slightly loose but never clips the curve.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        let mut include = |p: Point2D| match bounds.as_mut() {
            Some(b) => b.include(p),
            None => bounds = Some(Bounds { min: p, max: p }),
        };

        for element in &self.elements {
            let mut current = Point2D::ORIGIN;
            for command in &element.commands {
                match *command {
                    PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                    PathCommand::CurveTo(s) => {
                        include(s.p0);
                        include(s.p1);
                        include(s.p2);
                        include(s.p3);
                    }
                    PathCommand::ArcTo {
                        radius_x,
                        radius_y,
                        rotation,
                        large_arc,
                        sweep,
                        to,
                    } => {
                        include(current);
                        include(to);
                        let cubics = arc_to_cubics(
                            current, to, radius_x, radius_y, rotation, large_arc, sweep,
                        );
                        for s in cubics.into_iter().flatten() {
                            include(s.p1);
                            include(s.p2);
                        }
                    }
                }
                current = command.end_point();
            }
        }
        bounds
    }
}
