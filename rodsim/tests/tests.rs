use std::f64::consts::{PI, TAU};
use std::path::PathBuf;

use rodsim::simulation::trajectory::{m2_angle, rod_frame};
use rodsim::{
    center_of_mass, ellipse_point, linspace, load_scenario_config, rail_point, sample_trajectory, tension_arrow, NVec2,
    Parameters, PeriodicCubicSpline, Scenario, ScenarioConfig, TensionProfile, VariantConfig,
};
use rodsim::simulation::tension::tension_label;

const TOL: f64 = 1e-12;

/// Default rod geometry used by the shipped scenarios
pub fn test_params() -> Parameters {
    Parameters {
        a: 2.0,
        b: 1.0,
        n_points: 100,
        m1: 1.0,
        m2: 1.0,
    }
}

/// Spline through the built-in tension knots
pub fn tension_spline() -> PeriodicCubicSpline {
    let xs = [0.0, PI / 2.0, PI, 3.0 * PI / 2.0, TAU];
    let ys = [-1.0, 1.0, 9.0, 1.0, -1.0];
    PeriodicCubicSpline::fit(&xs, &ys).expect("valid knots")
}

pub fn scenario_from_yaml(yaml: &str) -> anyhow::Result<Scenario> {
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
    Scenario::build_scenario(cfg)
}

// ==================================================================================
// Kinematics tests
// ==================================================================================

#[test]
fn linspace_includes_both_endpoints() {
    let ts = linspace(0.0, TAU, 100);
    assert_eq!(ts.len(), 100);
    assert_eq!(ts[0], 0.0);
    assert_eq!(ts[99], TAU);

    let step = ts[1] - ts[0];
    assert!((step - TAU / 99.0).abs() < TOL);
}

#[test]
fn linspace_degenerate_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
}

#[test]
fn ellipse_starts_at_top() {
    let p = ellipse_point(2.0, 1.0, 0.0);
    assert!((p - NVec2::new(0.0, 2.0)).norm() < TOL, "got {:?}", p);

    // quarter turn: -b on the x axis
    let q = ellipse_point(2.0, 1.0, PI / 2.0);
    assert!((q - NVec2::new(-1.0, 0.0)).norm() < TOL, "got {:?}", q);
}

#[test]
fn slider_stays_on_rail_opposite_to_m1() {
    for &t in &linspace(0.0, TAU, 37) {
        let m1 = ellipse_point(2.0, 1.0, t);
        let m2 = rail_point(1.0, t);
        assert_eq!(m2.y, 0.0);
        assert!((m1.x + m2.x).abs() < TOL);
    }
}

#[test]
fn center_of_mass_equal_masses_is_half_height() {
    let p = test_params();
    for &t in &linspace(0.0, TAU, 25) {
        let m1 = ellipse_point(p.a, p.b, t);
        let m2 = rail_point(p.b, t);
        let cm = center_of_mass(m1, p.m1, m2, p.m2);
        assert!(cm.x.abs() < TOL);
        assert!((cm.y - m1.y / 2.0).abs() < TOL);
    }
}

#[test]
fn center_of_mass_weights_heavier_mass() {
    let cm = center_of_mass(NVec2::new(0.0, 3.0), 2.0, NVec2::new(3.0, 0.0), 1.0);
    assert!((cm - NVec2::new(1.0, 2.0)).norm() < TOL);
}

#[test]
fn rod_length_is_constant_when_a_is_twice_b() {
    let traj = sample_trajectory(&test_params(), None);
    for f in &traj.frames {
        let len = (f.m1 - f.m2).norm();
        assert!((len - 2.0).abs() < 1e-9, "rod length {} at t = {}", len, f.t);
    }
}

#[test]
fn rail_marker_aligns_with_rod() {
    let p = test_params();
    let frame = rod_frame(0, 0.0, &p, None);
    // m1 straight above m2: rod points down
    assert!((frame.m2_angle + PI / 2.0).abs() < TOL);
    assert!((m2_angle(NVec2::new(0.0, 0.0), NVec2::new(1.0, 1.0)) - PI / 4.0).abs() < TOL);
    assert_eq!(frame.m1_angle, 0.0);
}

#[test]
fn trajectory_frames_are_index_aligned() {
    let p = test_params();
    let traj = sample_trajectory(&p, None);

    assert_eq!(traj.len(), p.n_points);
    assert_eq!(traj.path.len(), p.n_points);
    for (i, f) in traj.frames.iter().enumerate() {
        assert_eq!(f.index, i);
        assert_eq!(traj.path[i], f.m1);
        assert!(f.tension.is_none());
    }
    assert_eq!(traj.frames[0].t, 0.0);
    assert_eq!(traj.frames[p.n_points - 1].t, TAU);
}

// ==================================================================================
// Spline tests
// ==================================================================================

#[test]
fn spline_reproduces_anchor_values() {
    let s = tension_spline();
    let (xs, ys) = s.knots();
    for (x, y) in xs.iter().zip(ys.iter()) {
        assert!((s.eval(*x) - y).abs() < 1e-12, "s({}) = {}, expected {}", x, s.eval(*x), y);
    }
}

#[test]
fn spline_is_periodic() {
    let s = tension_spline();
    for &x in &[0.3, 1.0, 2.5, 4.0, 6.0] {
        assert!((s.eval(x) - s.eval(x + TAU)).abs() < 1e-9);
        assert!((s.eval(x) - s.eval(x - 2.0 * TAU)).abs() < 1e-9);
    }
}

#[test]
fn spline_slope_and_curvature_match_across_seam() {
    let s = tension_spline();
    assert!((s.derivative(0.0) - s.derivative(TAU)).abs() < 1e-9);
    assert!((s.second_derivative(0.0) - s.second_derivative(TAU)).abs() < 1e-9);
}

#[test]
fn spline_slope_continuous_at_interior_knots() {
    let s = tension_spline();
    let eps = 1e-7;
    for &x in &[PI / 2.0, PI, 3.0 * PI / 2.0] {
        let left = s.derivative(x - eps);
        let right = s.derivative(x + eps);
        assert!((left - right).abs() < 1e-5, "slope jump at {}: {} vs {}", x, left, right);
    }
}

#[test]
fn spline_curvature_continuous_at_knots() {
    let s = tension_spline();
    let eps = 1e-7;
    for &x in &[PI / 2.0, PI, 3.0 * PI / 2.0] {
        let left = s.second_derivative(x - eps);
        let right = s.second_derivative(x + eps);
        assert!((left - right).abs() < 1e-5, "curvature jump at {}: {} vs {}", x, left, right);
    }
    // seam
    let left = s.second_derivative(TAU - eps);
    let right = s.second_derivative(eps);
    assert!((left - right).abs() < 1e-5, "curvature jump at seam: {} vs {}", left, right);
}

#[test]
fn spline_matches_reference_between_knots() {
    // periodic CubicSpline through the tension knots:
    // M = (-12, 72, -132, 72) / π² at the knots
    let s = tension_spline();
    let pi2 = PI * PI;
    let cases = [
        (PI / 4.0, -0.9375),
        (3.0 * PI / 4.0, 5.9375),
        (5.0 * PI / 4.0, 5.9375),
        (7.0 * PI / 4.0, -0.9375),
    ];
    for (x, expected) in cases {
        assert!((s.eval(x) - expected).abs() < 1e-9, "s({}) = {}, expected {}", x, s.eval(x), expected);
    }

    assert!((s.second_derivative(0.0) + 12.0 / pi2).abs() < 1e-9);
    assert!((s.second_derivative(PI / 2.0) - 72.0 / pi2).abs() < 1e-9);
    assert!((s.second_derivative(PI) + 132.0 / pi2).abs() < 1e-9);
}

#[test]
fn spline_symmetric_knots_give_symmetric_curve() {
    let s = tension_spline();
    for &d in &[0.1, 0.7, 1.3, 2.9] {
        assert!((s.eval(PI + d) - s.eval(PI - d)).abs() < 1e-9);
    }
    // peak at π with zero slope
    assert!(s.derivative(PI).abs() < 1e-9);
}

#[test]
fn spline_rejects_bad_knots() {
    assert!(PeriodicCubicSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).is_err(), "end values differ");
    assert!(PeriodicCubicSpline::fit(&[0.0, 2.0, 1.0], &[0.0, 1.0, 0.0]).is_err(), "not increasing");
    assert!(PeriodicCubicSpline::fit(&[0.0, 1.0], &[0.0, 0.0]).is_err(), "too few knots");
    assert!(PeriodicCubicSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 0.0]).is_err(), "length mismatch");
}

#[test]
fn spline_with_two_intervals() {
    let s = PeriodicCubicSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).expect("valid knots");
    assert!((s.eval(1.0) - 1.0).abs() < TOL);
    assert!((s.eval(2.0)).abs() < TOL);
    assert!((s.derivative(0.0) - s.derivative(2.0)).abs() < 1e-9);
}

// ==================================================================================
// Tension tests
// ==================================================================================

#[test]
fn tension_arrow_follows_sign() {
    let m1 = NVec2::new(0.0, 2.0);
    let m2 = NVec2::new(0.0, 0.0);

    let pos = tension_arrow(m1, m2, 4.0, 0.5);
    assert_eq!(pos.head, m1);
    assert!((pos.d - NVec2::new(0.0, -2.0)).norm() < TOL, "got {:?}", pos.d);
    assert!((pos.tail() - NVec2::new(0.0, 4.0)).norm() < TOL, "got {:?}", pos.tail());

    let neg = tension_arrow(m1, m2, -1.0, 0.5);
    assert!((neg.d - NVec2::new(0.0, 0.5)).norm() < TOL, "got {:?}", neg.d);
    assert_eq!(neg.magnitude, -1.0);
}

#[test]
fn positive_tension_pulls_m1_toward_m2() {
    let p = test_params();
    let profile = TensionProfile::builtin().expect("builtin knots");

    // bottom of the ellipse: T = 9, m1 below m2
    let frame = rod_frame(0, PI, &p, Some(&profile));
    let arrow = frame.tension.expect("tension present");
    assert!((arrow.magnitude - 9.0).abs() < 1e-12);
    assert_eq!(arrow.head, frame.m1);

    let toward_m2 = frame.m2 - frame.m1;
    assert!(arrow.d.dot(&toward_m2) > 0.0, "arrow {:?} does not point toward m2", arrow.d);
    assert!((arrow.tail() - NVec2::new(0.0, -6.5)).norm() < 1e-9, "tail {:?}", arrow.tail());

    // top of the ellipse: T = -1, arrow points away from m2
    let top = rod_frame(0, 0.0, &p, Some(&profile));
    let arrow = top.tension.expect("tension present");
    assert!(arrow.magnitude < 0.0);
    assert!(arrow.d.dot(&(top.m2 - top.m1)) < 0.0);
}

#[test]
fn tension_label_hidden_value_until_started() {
    let arrow = tension_arrow(NVec2::new(0.0, 2.0), NVec2::zeros(), -1.0, 0.5);
    assert_eq!(tension_label(&arrow, false), "T");
    assert_eq!(tension_label(&arrow, true), "T: -1.000");
}

#[test]
fn tension_arrow_degenerate_rod() {
    let p = NVec2::new(1.0, 1.0);
    let arrow = tension_arrow(p, p, 3.0, 0.5);
    assert_eq!(arrow.d, NVec2::zeros());
}

#[test]
fn builtin_tension_profile_hits_knots() {
    let profile = TensionProfile::builtin().expect("builtin knots");
    assert!((profile.magnitude(0.0) + 1.0).abs() < 1e-12);
    assert!((profile.magnitude(PI) - 9.0).abs() < 1e-12);
    assert_eq!(profile.scale, 0.5);
}

#[test]
fn tension_arrow_length_matches_scaled_magnitude() {
    let p = test_params();
    let profile = TensionProfile::builtin().expect("builtin knots");
    let traj = sample_trajectory(&p, Some(&profile));

    for f in &traj.frames {
        let arrow = f.tension.expect("spatial frames carry tension");
        assert!((arrow.d.norm() - 0.5 * arrow.magnitude.abs()).abs() < 1e-9);
        assert_eq!(arrow.head, f.m1);
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn basic_scenario_defaults() {
    let scenario = scenario_from_yaml(
        r#"
engine:
  variant: "basic"
parameters:
  a: 2.0
  b: 1.0
  n_points: 100
"#,
    )
    .expect("basic scenario");

    assert_eq!(scenario.engine.variant, VariantConfig::Basic);
    assert!((scenario.engine.frame_duration - 0.05).abs() < TOL);
    assert!(!scenario.engine.looping);
    assert!(scenario.tension.is_none());
    assert_eq!(scenario.trajectory.len(), 100);
    assert_eq!(scenario.parameters.m1, 1.0);
    assert_eq!(scenario.captions.title, "Two Masses Rigid Body Rotation Problem Simulation");
    assert!(scenario.captions.credit.is_none());
}

#[test]
fn spatial_scenario_falls_back_to_builtin_tension() {
    let scenario = scenario_from_yaml(
        r#"
engine:
  variant: "spatial"
  looping: true
parameters:
  a: 2.0
  b: 1.0
  n_points: 40
"#,
    )
    .expect("spatial scenario");

    assert!((scenario.engine.frame_duration - 0.1).abs() < TOL);
    assert!(scenario.engine.looping);
    assert!(scenario.tension.is_some());
    assert!(scenario.trajectory.frames.iter().all(|f| f.tension.is_some()));
    assert_eq!(scenario.captions.title, "Rigid Body Spatial Analysis: Two Masses + Rod System");
}

#[test]
fn scenario_rejects_invalid_values() {
    let too_few = scenario_from_yaml(
        r#"
engine:
  variant: "basic"
parameters:
  a: 2.0
  b: 1.0
  n_points: 1
"#,
    );
    assert!(too_few.is_err());

    let open_spline = scenario_from_yaml(
        r#"
engine:
  variant: "spatial"
parameters:
  a: 2.0
  b: 1.0
  n_points: 10
tension:
  turns: [0.0, 0.5, 1.0]
  values: [0.0, 1.0, 2.0]
"#,
    );
    assert!(open_spline.is_err());

    for duration in ["1.0e30", ".inf", ".nan", "0.0", "-5.0", "0.5", "60001.0"] {
        let yaml = format!(
            r#"
engine:
  variant: "basic"
  frame_duration_ms: {duration}
parameters:
  a: 2.0
  b: 1.0
  n_points: 10
"#
        );
        assert!(scenario_from_yaml(&yaml).is_err(), "frame_duration_ms {duration} accepted");
    }

    let bad_variant: Result<ScenarioConfig, _> = serde_yaml::from_str(
        r#"
engine:
  variant: "wireframe"
parameters:
  a: 2.0
  b: 1.0
  n_points: 10
"#,
    );
    assert!(bad_variant.is_err());
}

#[test]
fn shipped_scenarios_load() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");

    for name in ["basic.yaml", "spatial.yaml"] {
        let cfg = load_scenario_config(&dir.join(name)).expect("scenario parses");
        let scenario = Scenario::build_scenario(cfg).expect("scenario builds");
        assert_eq!(scenario.trajectory.len(), 100, "{name}");
    }

    assert!(load_scenario_config(&dir.join("missing.yaml")).is_err());
}
