//! Export to lyon paths for consumers that tessellate or flatten.

use super::{PathCommand, ShapePath};
use lyon::math::{point, vector, Angle};
use lyon::path::builder::SvgPathBuilder;
use lyon::path::{ArcFlags, Path};
use phikit_core::Point2D;

fn lyon_point(p: Point2D) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

impl ShapePath {
    /// Write every element into one lyon path through its SVG builder.
    /// Each `MoveTo` starts a new subpath; arcs are left to lyon to approximate.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder().with_svg();

        for element in &self.elements {
            match element.commands.first() {
                None | Some(PathCommand::MoveTo(_)) => {}
                Some(PathCommand::CurveTo(s)) => {
                    builder.move_to(lyon_point(s.p0));
                }
                Some(_) => {
                    builder.move_to(lyon_point(Point2D::ORIGIN));
                }
            }

            for command in &element.commands {
                match *command {
                    PathCommand::MoveTo(p) => {
                        builder.move_to(lyon_point(p));
                    }
                    PathCommand::LineTo(p) => {
                        builder.line_to(lyon_point(p));
                    }
                    PathCommand::CurveTo(s) => {
                        builder.cubic_bezier_to(
                            lyon_point(s.p1),
                            lyon_point(s.p2),
                            lyon_point(s.p3),
                        );
                    }
                    PathCommand::ArcTo {
                        radius_x,
                        radius_y,
                        rotation,
                        large_arc,
                        sweep,
                        to,
                    } => {
                        builder.arc_to(
                            vector(radius_x as f32, radius_y as f32),
                            Angle::degrees(rotation as f32),
                            ArcFlags { large_arc, sweep },
                            lyon_point(to),
                        );
                    }
                }
            }

            if element.is_closed(1e-9) {
                builder.close();
            }
        }

        builder.build()
    }
}
