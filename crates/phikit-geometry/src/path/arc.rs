//! SVG-style arcs, resolved through lyon's endpoint parameterization.

use crate::curve::BezierSegment;
use lyon::geom::{point, vector, Angle, Arc, ArcFlags, SvgArc};
use phikit_core::Point2D;

fn to_point2d(p: lyon::geom::Point<f64>) -> Point2D {
    Point2D::new(p.x, p.y)
}

/// The centre-parameterized arc, or `None` when lyon would draw a line
/// (zero radius, coincident endpoints) or an input is not finite.
fn solve(
    from: Point2D,
    to: Point2D,
    rx: f64,
    ry: f64,
    rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<Arc<f64>> {
    let finite = from.is_finite() && to.is_finite();
    if !finite || !rx.is_finite() || !ry.is_finite() || !rotation_deg.is_finite() {
        return None;
    }

    let svg_arc = SvgArc {
        from: point(from.x, from.y),
        to: point(to.x, to.y),
        radii: vector(rx, ry),
        x_rotation: Angle::degrees(rotation_deg),
        flags: ArcFlags { large_arc, sweep },
    };
    if svg_arc.is_straight_line() {
        return None;
    }
    Some(svg_arc.to_arc())
}

/// Centre of the arc drawn from `from` with the given SVG arc parameters.
pub fn arc_center(
    from: Point2D,
    to: Point2D,
    rx: f64,
    ry: f64,
    rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<Point2D> {
    solve(from, to, rx, ry, rotation_deg, large_arc, sweep).map(|arc| to_point2d(arc.center))
}

/// Approximate an SVG arc with cubic segments spanning at most 90° each.
/// Returns `None` when the radii are degenerate or the endpoints coincide.
pub fn arc_to_cubics(
    from: Point2D,
    to: Point2D,
    rx: f64,
    ry: f64,
    rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<Vec<BezierSegment>> {
    let arc = solve(from, to, rx, ry, rotation_deg, large_arc, sweep)?;

    let mut cubics = Vec::new();
    arc.for_each_cubic_bezier(&mut |c| {
        cubics.push(BezierSegment::new(
            to_point2d(c.from),
            to_point2d(c.ctrl1),
            to_point2d(c.ctrl2),
            to_point2d(c.to),
        ));
    });
    Some(cubics)
}
