use lyon::path::Event;
use phikit_geometry::{
    PathBuilder, PathCommand, PathRole, Point2D, ShapePath, SpiralConfig, SpiralGenerator,
    VesicaConfig, VesicaGenerator,
};

#[test]
fn test_builder_chains_commands() {
    let mut builder = PathBuilder::new();
    builder
        .move_to(Point2D::new(0.0, 0.0))
        .line_to(Point2D::new(10.0, 0.0))
        .circular_arc_to(5.0, true, Point2D::new(10.0, 10.0))
        .quad_to(Point2D::new(5.0, 15.0), Point2D::new(0.0, 10.0))
        .close();
    let element = builder.build(PathRole::Outline);

    assert_eq!(element.commands.len(), 5);
    assert!(element.is_closed(1e-12));
    match element.commands[3] {
        PathCommand::CurveTo(segment) => {
            assert_eq!(segment.p0, Point2D::new(10.0, 10.0));
            assert_eq!(segment.p3, Point2D::new(0.0, 10.0));
        }
        other => panic!("expected a curve, got {:?}", other),
    }
}

#[test]
fn test_empty_elements_are_dropped() {
    let mut shape = ShapePath::new();
    shape.push(PathBuilder::new().build(PathRole::Guide));
    assert!(shape.is_empty());
    assert!(shape.bounds().is_none());
}

#[test]
fn test_circle_bounds_cover_the_whole_circle() {
    let mut builder = PathBuilder::new();
    builder.circle(Point2D::new(50.0, 50.0), 10.0);
    let mut shape = ShapePath::new();
    shape.push(builder.build(PathRole::Circle));

    let bounds = shape.bounds().unwrap();
    // Control points may sit just outside the circle, never inside it.
    for min in [bounds.min.x, bounds.min.y] {
        assert!(min <= 40.0 + 1e-6 && min > 38.5);
    }
    for max in [bounds.max.x, bounds.max.y] {
        assert!(max >= 60.0 - 1e-6 && max < 61.5);
    }
}

#[test]
fn test_vesica_bounds_fit_the_frame() {
    let shape = VesicaGenerator::new(VesicaConfig::default())
        .unwrap()
        .generate()
        .unwrap();
    let bounds = shape.bounds().unwrap();
    assert!(bounds.min.x <= 5.0 + 1e-9);
    assert!(bounds.max.x >= 95.0 - 1e-9);
    assert!(bounds.min.x > 0.0 && bounds.max.x < 100.0);
}

#[test]
fn test_lyon_export_expands_arcs() {
    let shape = SpiralGenerator::new(SpiralConfig {
        iterations: 6,
        ..SpiralConfig::default()
    })
    .unwrap()
    .generate()
    .unwrap();

    let path = shape.to_lyon_path();
    let mut begins = 0;
    let mut curves = 0;
    let mut ends = 0;
    for event in path.iter() {
        match event {
            Event::Begin { .. } => begins += 1,
            Event::Quadratic { .. } | Event::Cubic { .. } => curves += 1,
            Event::End { .. } => ends += 1,
            _ => {}
        }
    }
    assert_eq!(begins, 1);
    assert_eq!(ends, 1);
    // Every arc becomes at least one curve segment.
    assert!(curves >= shape.arc_count());
}

#[test]
fn test_lyon_export_closes_closed_elements() {
    let mut builder = PathBuilder::new();
    builder.rect(Point2D::new(0.0, 0.0), 10.0);
    let mut shape = ShapePath::new();
    shape.push(builder.build(PathRole::Square));

    let closed = shape
        .to_lyon_path()
        .iter()
        .any(|event| matches!(event, Event::End { close: true, .. }));
    assert!(closed);
}

#[test]
fn test_shape_serializes_as_tagged_commands() {
    let mut builder = PathBuilder::new();
    builder
        .move_to(Point2D::new(0.0, 0.0))
        .circular_arc_to(1.0, false, Point2D::new(1.0, 1.0));
    let mut shape = ShapePath::new();
    shape.push(builder.build(PathRole::Spiral));

    let json = serde_json::to_value(&shape).unwrap();
    let element = &json["elements"][0];
    assert_eq!(element["role"], "spiral");
    assert_eq!(element["weight"], 1.0);
    assert_eq!(element["commands"][0]["op"], "move_to");
    assert_eq!(element["commands"][0]["x"], 0.0);
    assert_eq!(element["commands"][1]["op"], "arc_to");
    assert_eq!(element["commands"][1]["sweep"], false);
    assert_eq!(element["commands"][1]["to"]["y"], 1.0);

    let back: ShapePath = serde_json::from_value(json).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn test_lyon_export_keeps_arcs_on_their_circle() {
    let mut builder = PathBuilder::new();
    builder
        .move_to(Point2D::new(0.0, 0.0))
        .circular_arc_to(10.0, true, Point2D::new(20.0, 0.0));
    let mut shape = ShapePath::new();
    shape.push(builder.build(PathRole::Circle));

    let on_circle = |x: f32, y: f32| ((x - 10.0).hypot(y) - 10.0).abs() < 1e-3;
    let mut last = None;
    for event in shape.to_lyon_path().iter() {
        match event {
            Event::Quadratic { to, .. } | Event::Cubic { to, .. } => {
                assert!(on_circle(to.x, to.y));
            }
            Event::End { last: end, .. } => last = Some(end),
            _ => {}
        }
    }
    let last = last.unwrap();
    assert!((last.x - 20.0).abs() < 1e-3 && last.y.abs() < 1e-3);
}
