use approx::assert_abs_diff_eq;
use curvelab_core::Tolerance;
use curvelab_curve::curve::NaturalSpline;
use curvelab_curve::{
    build_samples, default_control_points, evaluate, CurveEvaluator, CurveScheme, EvalConfig,
    SampleSpec, DEFAULT_STEP,
};
use curvelab_math::{dvec2, Aabb2, Point2};

const EPS: f64 = Tolerance::DEFAULT_LINEAR;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn wavy(n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let x = 40.0 + i as f64 * 55.0;
            let y = 200.0 + 80.0 * (i as f64 * 1.3).sin();
            dvec2(x, y)
        })
        .collect()
}

fn square() -> Vec<Point2> {
    vec![
        dvec2(0.0, 0.0),
        dvec2(10.0, 0.0),
        dvec2(10.0, 10.0),
        dvec2(0.0, 10.0),
    ]
}

fn assert_point_eq(a: Point2, b: Point2) {
    let tol = Tolerance::default();
    assert!(
        tol.linear_eq(a.x, b.x) && tol.linear_eq(a.y, b.y),
        "{a} != {b}"
    );
}

#[test]
fn test_endpoint_interpolation() {
    init_logging();
    let pts = wavy(7);
    let n = pts.len();
    let ends = [SampleSpec::new(0, 0.0), SampleSpec::new(n - 2, 1.0)];

    for scheme in CurveScheme::ALL {
        if !scheme.interpolates_endpoints() {
            continue;
        }
        let out = evaluate(scheme, &pts, false, &ends).unwrap();
        assert_point_eq(out[0], pts[0]);
        assert_point_eq(out[1], pts[n - 1]);
    }
}

#[test]
fn test_linear_identity() {
    let a = dvec2(3.0, -2.0);
    let b = dvec2(11.0, 6.0);
    let samples = [
        SampleSpec::new(0, 0.0),
        SampleSpec::new(0, 0.5),
        SampleSpec::new(0, 1.0),
    ];
    let out = evaluate(CurveScheme::Linear, &[a, b], false, &samples).unwrap();
    assert_eq!(out[0], a);
    assert_point_eq(out[1], (a + b) / 2.0);
    assert_eq!(out[2], b);
}

#[test]
fn test_closed_natural_spline_periodicity() {
    let pts = square();
    let config = EvalConfig::for_scheme(CurveScheme::NaturalSplineClosed);
    let out = CurveEvaluator::new(config).unwrap().sample_curve(&pts).unwrap();
    assert_point_eq(out[0], out[out.len() - 1]);

    let spline = NaturalSpline::fit_periodic(&pts, Tolerance::default()).unwrap();
    let n = pts.len();
    let entering = spline.tangent_at(n - 1, 1.0);
    let leaving = spline.tangent_at(0, 0.0);
    assert_abs_diff_eq!(entering.x, leaving.x, epsilon = EPS);
    assert_abs_diff_eq!(entering.y, leaving.y, epsilon = EPS);
}

#[test]
fn test_closed_natural_spline_finite_difference_slopes() {
    let pts = wavy(6);
    let n = pts.len();
    let h = 1e-6;
    let samples = [
        SampleSpec::new(n - 1, 1.0 - h),
        SampleSpec::new(n - 1, 1.0),
        SampleSpec::new(0, 0.0),
        SampleSpec::new(0, h),
    ];
    let out = evaluate(CurveScheme::NaturalSplineClosed, &pts, true, &samples).unwrap();
    let before = (out[1] - out[0]) / h;
    let after = (out[3] - out[2]) / h;
    assert_point_eq(out[1], out[2]);
    assert!((before - after).length() < 1e-2 * before.length().max(1.0));
}

#[test]
fn test_catmull_rom_collinear_stays_on_line() {
    let pts: Vec<Point2> = (0..6).map(|i| dvec2(i as f64 * 7.0, i as f64 * 3.0)).collect();
    let samples = build_samples(pts.len(), false, DEFAULT_STEP).unwrap();
    let out = evaluate(CurveScheme::CatmullRom, &pts, false, &samples).unwrap();

    let dir = pts[pts.len() - 1] - pts[0];
    for p in out {
        let cross = (p - pts[0]).perp_dot(dir);
        assert_abs_diff_eq!(cross, 0.0, epsilon = EPS);
    }
}

#[test]
fn test_sample_counts() {
    for n in [2, 4, 9, 30] {
        assert_eq!(build_samples(n, false, 0.1).unwrap().len(), 10 * n - 9);
    }
    for n in [3, 4, 9, 30] {
        assert_eq!(build_samples(n, true, 0.1).unwrap().len(), 10 * n);
    }
}

#[test]
fn test_precondition_rejection() {
    let pts = wavy(3);
    let err = evaluate(CurveScheme::Bezier, &pts, false, &[SampleSpec::new(0, 0.0)]).unwrap_err();
    assert!(err.is_precondition());

    let pts = wavy(5);
    let err = evaluate(CurveScheme::Linear, &pts, false, &[SampleSpec::new(5, 0.0)]).unwrap_err();
    assert!(err.is_precondition());
}

#[test]
fn test_closed_flag_below_minimum() {
    let pts = wavy(2);
    let err = evaluate(CurveScheme::Linear, &pts, true, &[SampleSpec::new(0, 0.0)]).unwrap_err();
    assert!(err.is_precondition());
}

#[test]
fn test_determinism() {
    let pts = wavy(8);
    for scheme in CurveScheme::ALL {
        let config = EvalConfig::for_scheme(scheme);
        let evaluator = CurveEvaluator::new(config).unwrap();
        let a = evaluator.sample_curve(&pts).unwrap();
        let b = evaluator.sample_curve(&pts).unwrap();
        assert_eq!(a, b, "{scheme} is not deterministic");
    }
}

#[test]
fn test_every_scheme_closed_or_open_does_not_fail() {
    init_logging();
    let pts = default_control_points(640.0, 440.0);
    for scheme in CurveScheme::ALL {
        for closed in [false, true] {
            let config = EvalConfig::for_scheme(scheme).with_closed(closed);
            let out = CurveEvaluator::new(config).unwrap().sample_curve(&pts).unwrap();
            let expected = if closed {
                10 * pts.len() + 1
            } else {
                10 * pts.len() - 9
            };
            assert_eq!(out.len(), expected, "{scheme} closed={closed}");
            assert!(out.iter().all(|p| p.is_finite()));
        }
    }
}

#[test]
fn test_evaluator_does_not_mutate_input() {
    let pts = wavy(6);
    let copy = pts.clone();
    let samples = build_samples(pts.len(), false, DEFAULT_STEP).unwrap();
    for scheme in CurveScheme::ALL {
        evaluate(scheme, &pts, false, &samples).unwrap();
    }
    assert_eq!(pts, copy);
}

#[test]
fn test_bezier_and_bspline_legacy_clamps() {
    let pts = wavy(6);
    let samples = build_samples(pts.len(), false, DEFAULT_STEP).unwrap();

    let bezier = evaluate(CurveScheme::Bezier, &pts, false, &samples).unwrap();
    assert!(bezier[10..].iter().all(|&p| p == pts[3]));

    let bspline = evaluate(CurveScheme::BSpline, &pts, false, &samples).unwrap();
    assert!(bspline[..10].iter().all(|&p| p == pts[1]));
    assert_eq!(*bspline.last().unwrap(), pts[4]);
}

#[test]
fn test_hermite_tangents_from_config() {
    let pts = [dvec2(0.0, 0.0), dvec2(30.0, 0.0)];
    let straight = EvalConfig::for_scheme(CurveScheme::Hermite).with_hermite_tangents(
        curvelab_curve::HermiteTangents::new(dvec2(30.0, 0.0), dvec2(30.0, 0.0)),
    );
    let out = CurveEvaluator::new(straight)
        .unwrap()
        .evaluate(&pts, &[SampleSpec::new(0, 0.5)])
        .unwrap();
    assert_point_eq(out[0], dvec2(15.0, 0.0));
}

#[test]
fn test_sampled_bounds_cover_control_points_for_interpolants() {
    let pts = wavy(6);
    let bounds = Aabb2::from_points(&pts).unwrap();
    let config = EvalConfig::for_scheme(CurveScheme::NaturalSpline);
    let out = CurveEvaluator::new(config).unwrap().sample_curve(&pts).unwrap();
    let sampled = Aabb2::from_points(&out).unwrap().expand(EPS);
    assert!(sampled.contains_point(bounds.min));
    assert!(sampled.contains_point(bounds.max));
}
