use phikit_geometry::{
    bezier_point_at, BranchConfig, BranchGenerator, PathCommand, PathRole, Point2D,
};

fn branch(config: BranchConfig) -> BranchGenerator {
    BranchGenerator::new(config).unwrap()
}

#[test]
fn test_stem_runs_between_endpoints() {
    let generator = branch(BranchConfig::default());
    let shape = generator.generate().unwrap();
    let stem = shape.elements_with_role(PathRole::Stem).next().unwrap();

    assert_eq!(stem.commands[0], PathCommand::MoveTo(Point2D::new(10.0, 90.0)));
    assert_eq!(stem.commands[1].end_point(), Point2D::new(90.0, 10.0));
}

#[test]
fn test_stem_control_offset_scales_with_curvature() {
    let config = BranchConfig {
        start: Point2D::new(0.0, 0.0),
        end: Point2D::new(100.0, 0.0),
        curvature: 0.5,
        ..BranchConfig::default()
    };
    let stem = branch(config).stem();
    let expected = 100.0 * phikit_core::PHI_INVERSE * 0.5;
    assert!((stem.p1.y.abs() - expected).abs() < 1e-9);
    assert!((stem.p2.y.abs() - expected * phikit_core::PHI_INVERSE).abs() < 1e-9);
}

#[test]
fn test_leaves_sit_on_the_stem() {
    let generator = branch(BranchConfig::default());
    let stem = generator.stem();
    let placements = generator.leaf_placements().unwrap();
    assert_eq!(placements.len(), 5);

    for (i, placement) in placements.iter().enumerate() {
        assert!((placement.t - i as f64 / 4.0).abs() < 1e-12);
        let on_curve = bezier_point_at(stem.p0, stem.p1, stem.p2, stem.p3, placement.t).unwrap();
        assert!(placement.position.approx_eq(&on_curve, 1e-9));
    }
}

#[test]
fn test_leaf_size_decays_towards_tip() {
    let placements = branch(BranchConfig::default()).leaf_placements().unwrap();
    assert_eq!(placements[0].size_factor, 1.0);
    let last = placements.last().unwrap();
    assert!((last.size_factor - phikit_core::PHI_INVERSE).abs() < 1e-12);
    assert!(placements
        .windows(2)
        .all(|w| w[1].size_factor < w[0].size_factor));
}

#[test]
fn test_leaves_alternate_sides() {
    let generator = branch(BranchConfig {
        start: Point2D::new(0.0, 50.0),
        end: Point2D::new(100.0, 50.0),
        curvature: 0.0,
        jitter: 0.0,
        leaf_count: 6,
        ..BranchConfig::default()
    });
    for placement in generator.leaf_placements().unwrap() {
        let expected = if placement.index % 2 == 0 { 45.0 } else { -45.0 };
        assert!((placement.angle.to_degrees() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_jitter_is_deterministic_sine_of_index() {
    let generator = branch(BranchConfig {
        start: Point2D::new(0.0, 50.0),
        end: Point2D::new(100.0, 50.0),
        curvature: 0.0,
        leaf_angle: 0.0,
        jitter: 10.0,
        ..BranchConfig::default()
    });
    for placement in generator.leaf_placements().unwrap() {
        let expected = (placement.index as f64 * phikit_core::PHI).sin() * 10.0;
        assert!((placement.angle.to_degrees() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_single_leaf_does_not_divide_by_zero() {
    let generator = branch(BranchConfig {
        leaf_count: 1,
        ..BranchConfig::default()
    });
    let placements = generator.leaf_placements().unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].t, 0.0);
    assert_eq!(placements[0].position, Point2D::new(10.0, 90.0));
    assert!(generator.generate().is_ok());
}

#[test]
fn test_mirror_distributes_from_tip() {
    let generator = branch(BranchConfig {
        mirror: true,
        ..BranchConfig::default()
    });
    let placements = generator.leaf_placements().unwrap();
    assert_eq!(placements[0].t, 1.0);
    assert_eq!(placements[4].t, 0.0);
}

#[test]
fn test_fruit_follows_fibonacci_positions() {
    let generator = branch(BranchConfig {
        leaf_count: 14,
        ..BranchConfig::default()
    });
    let with_fruit: Vec<usize> = generator
        .leaf_placements()
        .unwrap()
        .iter()
        .filter(|p| p.has_fruit)
        .map(|p| p.index)
        .collect();
    // i + 1 in {1, 2, 3, 5, 8, 13}
    assert_eq!(with_fruit, vec![0, 1, 2, 4, 7, 12]);

    let shape = generator.generate().unwrap();
    assert_eq!(shape.elements_with_role(PathRole::Fruit).count(), 6);
}

#[test]
fn test_fruit_can_be_hidden() {
    let shape = branch(BranchConfig {
        show_fruit: false,
        ..BranchConfig::default()
    })
    .generate()
    .unwrap();
    assert_eq!(shape.elements_with_role(PathRole::Fruit).count(), 0);
}

#[test]
fn test_every_leaf_outline_is_closed_and_anchored() {
    let generator = branch(BranchConfig::default());
    let placements = generator.leaf_placements().unwrap();
    let shape = generator.generate().unwrap();
    let leaves: Vec<_> = shape.elements_with_role(PathRole::Leaf).collect();
    assert_eq!(leaves.len(), placements.len());

    for (leaf, placement) in leaves.iter().zip(&placements) {
        assert!(leaf.is_closed(1e-9));
        assert!(leaf.commands[0].end_point().approx_eq(&placement.position, 1e-9));
    }
}

#[test]
fn test_invalid_branch_parameters() {
    let cases = [
        BranchConfig {
            leaf_count: 0,
            ..BranchConfig::default()
        },
        BranchConfig {
            end: Point2D::new(10.0, 90.0),
            ..BranchConfig::default()
        },
        BranchConfig {
            leaf_size: -1.0,
            ..BranchConfig::default()
        },
        BranchConfig {
            curvature: f64::NAN,
            ..BranchConfig::default()
        },
    ];
    for config in cases {
        let err = BranchGenerator::new(config.clone()).unwrap_err();
        assert!(err.is_invalid_parameter(), "{:?} accepted", config);
    }
}
