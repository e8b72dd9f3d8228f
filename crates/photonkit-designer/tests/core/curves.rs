use std::f64::consts::PI;

use photonkit_designer::curves::{
    bezier_dc, bezier_sbend, dc, grating_arc, sbend, straight, turn, GratingArcParams,
};
use photonkit_designer::{Curve, Layout};

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{} != {} (tol {})", a, b, tol);
}

#[test]
fn test_circular_quarter_turn() {
    let bend = turn(5.0, 90.0, 0.0).unwrap();
    let end = bend.end();
    assert_close(end.x, 5.0, 1e-9);
    assert_close(end.y, 5.0, 1e-9);
    assert_close(bend.end_angle(), PI / 2.0, 1e-9);
    assert_close(bend.length(), 5.0 * PI / 2.0, 1e-3);
}

#[test]
fn test_negative_angle_turns_clockwise() {
    let bend = turn(5.0, -90.0, 0.5).unwrap();
    assert!(bend.end().y < 0.0);
    assert_close(bend.end_angle(), -PI / 2.0, 1e-9);
}

#[test]
fn test_euler_bend_is_gentler_at_the_ends() {
    let circular = turn(10.0, 90.0, 0.0).unwrap();
    let euler = turn(10.0, 90.0, 1.0).unwrap();
    // Same heading change and minimum radius, longer and wider footprint
    assert_close(euler.end_angle(), circular.end_angle(), 1e-9);
    assert_close(euler.min_radius(), 10.0, 0.2);
    assert_close(circular.min_radius(), 10.0, 0.2);
    assert!(euler.length() > circular.length());
    assert!(euler.end().x > circular.end().x);
}

#[test]
fn test_turn_rejects_invalid_parameters() {
    assert!(turn(0.0, 90.0, 0.0).unwrap_err().is_validation_error());
    assert!(turn(5.0, 90.0, 1.5).unwrap_err().is_validation_error());
    assert!(turn(5.0, 0.0, 0.0).unwrap_err().is_validation_error());
    assert!(straight(-1.0).unwrap_err().is_validation_error());
}

#[test]
fn test_sbend_reaches_requested_offset() {
    for &height in &[0.5, 2.0, -3.0] {
        let curve = sbend(5.0, height, 0.2).unwrap();
        assert_eq!(curve.segments().len(), 1);
        assert_close(curve.end().y, height, 1e-6);
        assert_close(curve.end_angle(), 0.0, 1e-9);
        assert!(curve.end().x > 0.0);
    }
}

#[test]
fn test_sbend_beyond_two_quarter_turns_inserts_straight() {
    let curve = sbend(1.0, 10.0, 0.0).unwrap();
    assert_close(curve.end().y, 10.0, 1e-9);
    assert_close(curve.end().x, 2.0, 1e-9);
    assert_close(curve.length(), 8.0 + PI, 1e-3);
}

#[test]
fn test_bezier_sbend_has_flat_ends() {
    let curve = bezier_sbend(10.0, 3.0).unwrap();
    assert_close(curve.start_angle(), 0.0, 1e-12);
    assert_close(curve.end_angle(), 0.0, 1e-12);
    assert_close(curve.end().x, 10.0, 1e-12);
    assert_close(curve.end().y, 3.0, 1e-12);
}

#[test]
fn test_coupler_trajectories() {
    let euler = dc(5.0, 2.0, 4.0, 0.2).unwrap();
    assert_eq!(euler.segments().len(), 3);
    assert_close(euler.end().y, 0.0, 1e-6);
    assert_close(euler.end_angle(), 0.0, 1e-9);

    let bezier = bezier_dc(6.0, 2.0, 4.0).unwrap();
    assert_eq!(bezier.segments().len(), 3);
    assert_close(bezier.end().x, 16.0, 1e-9);
    assert_close(bezier.end().y, 0.0, 1e-9);
}

#[test]
fn test_link_is_head_to_tail() {
    let curve = Curve::link([
        straight(3.0).unwrap(),
        turn(2.0, 90.0, 0.0).unwrap(),
        straight(4.0).unwrap(),
    ])
    .unwrap();
    assert_eq!(curve.segments().len(), 3);
    assert_close(curve.end().x, 5.0, 1e-9);
    assert_close(curve.end().y, 6.0, 1e-9);
    assert!(Curve::link(Vec::<Curve>::new()).unwrap_err().is_geometry_error());
}

#[test]
fn test_grating_arcs_grow_with_order() {
    let params = GratingArcParams {
        angle: 30.0,
        duty_cycle: 0.5,
        n_core: 2.8,
        n_clad: 1.444,
        fiber_angle: 8.0,
        wavelength: 1.55,
        num_evaluations: 16,
    };
    let inner = grating_arc(&params, 10).unwrap().region();
    let outer = grating_arc(&params, 11).unwrap().region();
    assert!(outer.bounds().unwrap().max_x > inner.bounds().unwrap().max_x);
    assert!(inner.area() > 0.0);

    let on_axis = params.radius(10.0, 0.0);
    assert_close(on_axis, 10.0 * 1.55 / (2.8 - 1.444 * 8f64.to_radians().sin()), 1e-12);

    let bad = GratingArcParams { angle: 0.0, ..params };
    assert!(grating_arc(&bad, 10).unwrap_err().is_validation_error());
}

#[test]
fn test_curve_path_moves_with_layout() {
    let mut wg = straight(5.0).unwrap().path(0.5).unwrap();
    wg.translate(1.0, 2.0);
    assert_close(wg.port("a0").unwrap().x, 1.0, 1e-12);
}
