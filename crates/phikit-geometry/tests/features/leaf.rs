use phikit_geometry::{
    LeafConfig, LeafGenerator, PathCommand, PathElement, PathRole, Point2D, ShapePath,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn leaf(config: LeafConfig) -> ShapePath {
    LeafGenerator::new(config).unwrap().generate().unwrap()
}

fn assert_commands_match(a: &ShapePath, b: &ShapePath) {
    assert_eq!(a.elements.len(), b.elements.len());
    for (ea, eb) in a.elements.iter().zip(&b.elements) {
        assert_eq!(ea.role, eb.role);
        assert!((ea.weight - eb.weight).abs() < TOLERANCE);
        assert_eq!(ea.commands.len(), eb.commands.len());
        for (ca, cb) in ea.commands.iter().zip(&eb.commands) {
            match (ca, cb) {
                (PathCommand::MoveTo(p), PathCommand::MoveTo(q))
                | (PathCommand::LineTo(p), PathCommand::LineTo(q)) => {
                    assert!(p.approx_eq(q, TOLERANCE), "{} != {}", p, q)
                }
                (PathCommand::CurveTo(s), PathCommand::CurveTo(t)) => {
                    assert!(s.p0.approx_eq(&t.p0, TOLERANCE));
                    assert!(s.p1.approx_eq(&t.p1, TOLERANCE));
                    assert!(s.p2.approx_eq(&t.p2, TOLERANCE));
                    assert!(s.p3.approx_eq(&t.p3, TOLERANCE));
                }
                other => panic!("command kinds differ: {:?}", other),
            }
        }
    }
}

#[test]
fn test_outline_is_closed() {
    let shape = leaf(LeafConfig::default());
    let outline = shape.elements_with_role(PathRole::Outline).next().unwrap();
    assert!(outline.is_closed(TOLERANCE));
    assert_eq!(outline.commands.len(), 3);
}

#[test]
fn test_outline_reaches_tip() {
    let generator = LeafGenerator::new(LeafConfig::default()).unwrap();
    let shape = generator.generate().unwrap();
    let outline = shape.elements_with_role(PathRole::Outline).next().unwrap();
    assert!(outline.commands[1].end_point().approx_eq(&generator.tip(), TOLERANCE));
}

#[test]
fn test_mirror_is_horizontal_reflection() {
    let plain = leaf(LeafConfig::default());
    let mirrored = leaf(LeafConfig {
        mirror: true,
        ..LeafConfig::default()
    });
    assert_commands_match(&mirrored, &plain.mirrored_x(0.0));
}

#[test]
fn test_midrib_is_straight_stem_to_tip() {
    let generator = LeafGenerator::new(LeafConfig::default()).unwrap();
    let shape = generator.generate().unwrap();
    let midrib = shape.elements_with_role(PathRole::Midrib).next().unwrap();
    assert_eq!(
        midrib.commands,
        vec![
            PathCommand::MoveTo(Point2D::ORIGIN),
            PathCommand::LineTo(generator.tip())
        ]
    );
    assert!((midrib.weight - 0.7).abs() < TOLERANCE);
}

#[test]
fn test_no_midrib_at_zero_intensity() {
    let shape = leaf(LeafConfig {
        midrib_intensity: 0.0,
        ..LeafConfig::default()
    });
    assert_eq!(shape.elements_with_role(PathRole::Midrib).count(), 0);
}

#[test]
fn test_veins_shrink_and_thin_along_leaf() {
    let shape = leaf(LeafConfig::default());
    let veins: Vec<_> = shape.elements_with_role(PathRole::Vein).collect();
    assert_eq!(veins.len(), 10);

    // Primary-side veins are every other element.
    let primary: Vec<&PathElement> = veins.iter().step_by(2).copied().collect();
    let reach = |e: &PathElement| e.commands[1].end_point().x.abs();
    for pair in primary.windows(2) {
        assert!(reach(pair[1]) < reach(pair[0]));
        assert!(pair[1].weight < pair[0].weight);
    }
}

#[test]
fn test_vein_placements_follow_golden_bias() {
    let generator = LeafGenerator::new(LeafConfig {
        vein_count: 3,
        ..LeafConfig::default()
    })
    .unwrap();
    let positions: Vec<f64> = generator
        .vein_placements()
        .iter()
        .filter(|v| v.side > 0.0)
        .map(|v| v.position)
        .collect();
    let phi_inv = phikit_core::PHI_INVERSE;
    assert_eq!(positions.len(), 3);
    for (k, position) in positions.iter().enumerate() {
        let expected = (k + 1) as f64 / 4.0 * phi_inv;
        assert!((position - expected).abs() < TOLERANCE);
    }
}

#[test]
fn test_hidden_veins() {
    let shape = leaf(LeafConfig {
        show_veins: false,
        ..LeafConfig::default()
    });
    assert_eq!(shape.elements_with_role(PathRole::Vein).count(), 0);
}

#[test]
fn test_invalid_leaf_parameters() {
    let cases = [
        LeafConfig {
            leaf_size: 0.0,
            ..LeafConfig::default()
        },
        LeafConfig {
            slenderness: 0.0,
            ..LeafConfig::default()
        },
        LeafConfig {
            slenderness: 1.5,
            ..LeafConfig::default()
        },
        LeafConfig {
            midrib_intensity: -0.1,
            ..LeafConfig::default()
        },
        LeafConfig {
            vein_count: 100,
            ..LeafConfig::default()
        },
    ];
    for config in cases {
        let err = LeafGenerator::new(config.clone()).unwrap_err();
        assert!(err.is_invalid_parameter(), "{:?} accepted", config);
    }
}

proptest! {
    #[test]
    fn prop_mirror_reflects_any_leaf(
        leaf_size in 0.1f64..5.0,
        slenderness in 0.05f64..1.0,
        vein_count in 0usize..8,
    ) {
        let config = LeafConfig { leaf_size, slenderness, vein_count, ..LeafConfig::default() };
        let plain = leaf(config.clone());
        let mirrored = leaf(LeafConfig { mirror: true, ..config });
        assert_commands_match(&mirrored, &plain.mirrored_x(0.0));
        let outline = plain.elements_with_role(PathRole::Outline).next().unwrap();
        prop_assert!(outline.is_closed(TOLERANCE));
    }
}
