use photonkit_core::angles_equivalent;
use photonkit_designer::curves::straight;
use photonkit_designer::{
    FocusingGrating, FocusingGratingParams, Grating, Layout, Pattern, Point, Region,
    StraightGrating, StraightGratingParams,
};

fn waveguide() -> Pattern {
    straight(10.0).unwrap().path(0.5).unwrap()
}

#[test]
fn test_straight_grating_layout() {
    let params = StraightGratingParams::new((20.0, 10.0), 1.0);
    let grating = StraightGrating::new(params, &waveguide()).unwrap();
    let device = grating.device();

    assert_eq!(device.entries().len(), 3);
    assert_eq!(device.layers(), vec![Some("rib_si"), Some("ridge_si")]);

    let b = grating.bounds();
    assert!(b.min_x.abs() < 1e-9 && (b.max_x - 30.0).abs() < 1e-9);
    assert!((b.height() - 10.0).abs() < 1e-9);

    // Teeth centered on every pitch, half teeth at both box edges
    let teeth = &device.entries()[1].pattern;
    assert_eq!(teeth.polygons().len(), 21);
    let area: f64 = teeth.polygons().iter().map(Region::area).sum();
    assert!((area - 100.0).abs() < 1e-6);

    let a0 = grating.port("a0").unwrap();
    assert_eq!((a0.x, a0.y), (0.0, 0.0));
    assert!(angles_equivalent(a0.a, 180.0, 1e-12));
    assert_eq!(grating.ports().len(), 1);
}

#[test]
fn test_straight_grating_period_count_and_rib_grow() {
    let mut params = StraightGratingParams::new((20.0, 10.0), 1.0);
    params.num_periods = Some(5);
    params.rib_grow = 1.0;
    let grating = StraightGrating::new(params, &waveguide()).unwrap();

    let slab = grating.device().entries()[0].pattern.bounds();
    assert!((slab.min_x - 9.0).abs() < 1e-6);
    assert!((slab.max_x - 16.0).abs() < 1e-6);
    assert!((slab.max_y - 6.0).abs() < 1e-6);
}

#[test]
fn test_straight_grating_validation() {
    let mut params = StraightGratingParams::new((20.0, 10.0), 1.0);
    params.duty_cycle = 1.0;
    assert!(StraightGrating::new(params, &waveguide()).unwrap_err().is_validation_error());

    let mut params = StraightGratingParams::new((20.0, 10.0), 1.0);
    params.num_periods = Some(0);
    assert!(StraightGrating::new(params, &waveguide()).unwrap_err().is_validation_error());

    let params = StraightGratingParams::new((20.0, 10.0), 1.0);
    let no_ports = Pattern::rect(1.0, 1.0).unwrap();
    assert!(StraightGrating::new(params, &no_ports).unwrap_err().is_lookup_error());
}

fn focusing_params() -> FocusingGratingParams {
    FocusingGratingParams::new(40.0, 0.5, 5.0)
}

#[test]
fn test_focusing_grating_throat() {
    let params = focusing_params();
    let offset = params.throat_offset();
    assert!((offset - 0.25 / 20f64.to_radians().tan()).abs() < 1e-12);

    let grating = FocusingGrating::new(params).unwrap();
    let apex = grating.apex();
    let throat = grating.throat();
    assert!((throat.x - apex.x - offset).abs() < 1e-9);
    assert!((throat.y - apex.y).abs() < 1e-9);
    assert_eq!(throat.w, 0.5);
}

#[test]
fn test_focusing_grating_left_edge_on_origin() {
    let grating = FocusingGrating::new(focusing_params()).unwrap();
    let a0 = grating.port("a0").unwrap();
    assert!(a0.x.abs() < 1e-9 && a0.y.abs() < 1e-9);
    assert!(angles_equivalent(a0.a, 180.0, 1e-9));
    assert!(grating.bounds().min_x.abs() < 1e-9);
    assert!((grating.apex().x - (5.0 - grating.params().throat_offset())).abs() < 1e-9);
}

#[test]
fn test_focusing_grating_members() {
    let grating = FocusingGrating::new(focusing_params()).unwrap();
    let device = grating.device();
    assert_eq!(device.name, "focusing_grating");
    assert_eq!(device.entries().len(), 3);
    assert_eq!(device.layers(), vec![Some("rib_si"), Some("ridge_si")]);
    // 20 teeth plus the sector
    assert_eq!(device.entries()[1].pattern.polygons().len(), 21);

    let slab = device.entries()[0].pattern.bounds();
    let ridge = device.entries()[1].pattern.bounds();
    assert!(slab.max_x > ridge.max_x + 0.9);
}

#[test]
fn test_focusing_grating_validation() {
    let mut params = focusing_params();
    params.num_periods = 0;
    assert!(FocusingGrating::new(params).unwrap_err().is_validation_error());

    let mut params = focusing_params();
    params.fiber_angle = 95.0;
    assert!(FocusingGrating::new(params).unwrap_err().is_validation_error());

    assert!(FocusingGrating::new(FocusingGratingParams::new(0.0, 0.5, 5.0))
        .unwrap_err()
        .is_validation_error());
}

#[test]
fn test_focusing_grating_tracks_apex_through_transforms() {
    let mut grating = FocusingGrating::new(focusing_params()).unwrap();
    let apex = grating.apex();
    grating.rotate(90.0, Point::origin()).translate(1.0, 0.0);
    let moved = grating.apex();
    assert!((moved.x - (1.0 - apex.y)).abs() < 1e-9);
    assert!((moved.y - apex.x).abs() < 1e-9);
    let throat = grating.throat();
    assert!((throat.y - moved.y - grating.params().throat_offset()).abs() < 1e-9);
}

#[test]
fn test_grating_enum_delegates() {
    let focusing = FocusingGrating::new(focusing_params()).unwrap();
    let size = focusing.size();
    let mut grating = Grating::from(focusing);
    assert_eq!(grating.size(), size);
    grating.translate(5.0, 5.0);
    assert!((grating.port("a0").unwrap().x - 5.0).abs() < 1e-9);
    assert_eq!(grating.device().entries().len(), 3);

    let straight = StraightGrating::new(StraightGratingParams::new((20.0, 10.0), 1.0), &waveguide()).unwrap();
    assert!(matches!(Grating::from(straight), Grating::Straight(_)));
}
