use photonkit_core::{angles_equivalent, Error, GeometryError, LookupError};
use photonkit_designer::curves::{sbend, straight};
use photonkit_designer::{Layout, Pattern, Port};
use proptest::prelude::*;

fn waveguide(length: f64, width: f64) -> Pattern {
    straight(length).unwrap().path(width).unwrap()
}

proptest! {
    #[test]
    fn prop_docked_port_meets_target(
        x in -500.0..500.0f64,
        y in -500.0..500.0f64,
        a in 0.0..360.0f64,
        length in 1.0..50.0f64,
    ) {
        let target = Port::new(x, y, a, 0.5);
        let mut wg = waveguide(length, 0.5);
        wg.to(target).unwrap();

        let a0 = wg.port("a0").unwrap();
        prop_assert!((a0.x - x).abs() < 1e-6);
        prop_assert!((a0.y - y).abs() < 1e-6);
        prop_assert!(angles_equivalent(a0.a, a + 180.0, 1e-6));

        // The body extends away from the target along its facing direction
        let b0 = wg.port("b0").unwrap();
        let along = (b0.x - x) * a.to_radians().cos() + (b0.y - y) * a.to_radians().sin();
        prop_assert!((along - length).abs() < 1e-6);
    }

    #[test]
    fn prop_chained_docking_is_continuous(height in 0.5..8.0f64, a in 0.0..360.0f64) {
        let mut first = sbend(5.0, height, 0.2).unwrap().path(0.5).unwrap();
        first.rotate(a, Default::default());
        let mut second = waveguide(3.0, 0.5);
        second.to(first.port("b0").unwrap()).unwrap();

        let joint = first.port("b0").unwrap();
        let a0 = second.port("a0").unwrap();
        prop_assert!(joint.position().distance_to(&a0.position()) < 1e-6);
        prop_assert!(angles_equivalent(a0.a, joint.a + 180.0, 1e-6));
    }
}

#[test]
fn test_to_port_uses_named_port() {
    let mut wg = waveguide(10.0, 0.5);
    wg.to_port("b0", Port::new(0.0, 0.0, 0.0, 0.5)).unwrap();
    let b0 = wg.port("b0").unwrap();
    assert!(b0.x.abs() < 1e-9 && b0.y.abs() < 1e-9);
    assert!(angles_equivalent(b0.a, 180.0, 1e-9));
    // Body now lies to the right of the target
    assert!(wg.bounds().min_x > -1e-9);
    assert!((wg.bounds().max_x - 10.0).abs() < 1e-9);
}

#[test]
fn test_docking_width_mismatch() {
    let mut wg = waveguide(10.0, 0.5);
    let before = wg.clone();
    let err = wg.to(Port::new(0.0, 0.0, 0.0, 0.8)).unwrap_err();
    assert!(err.is_geometry_error());
    match err {
        Error::Geometry(GeometryError::PortWidthMismatch { port, expected, actual }) => {
            assert_eq!(port, "a0");
            assert_eq!(expected, 0.8);
            assert_eq!(actual, 0.5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(wg, before);
}

#[test]
fn test_docking_tolerates_rounding_in_width() {
    let mut wg = waveguide(10.0, 0.5);
    assert!(wg.to(Port::new(1.0, 1.0, 90.0, 0.5 + 1e-9)).is_ok());
}

#[test]
fn test_docking_without_port() {
    let mut rect = Pattern::rect(2.0, 1.0).unwrap();
    let err = rect.to(Port::new(0.0, 0.0, 0.0, 0.5)).unwrap_err();
    assert!(matches!(
        err,
        Error::Lookup(LookupError::MissingPort { ref port }) if port == "a0"
    ));
}
