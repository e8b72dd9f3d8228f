use photonkit_core::angles_equivalent;
use photonkit_designer::curves::straight;
use photonkit_designer::{taper, Cross, Layout, Pattern};

#[test]
fn test_cross_ports_on_both_axes() {
    let mut wg = straight(10.0).unwrap().path(0.5).unwrap();
    wg.translate(30.0, -7.0);
    let cross = Cross::new(&wg).unwrap();

    assert_eq!(cross.pattern().polygons().len(), 2);
    let (w, h) = cross.size();
    assert!((w - 10.0).abs() < 1e-9 && (h - 10.0).abs() < 1e-9);
    assert!(cross.center().distance_to(&Default::default()) < 1e-9);

    let expected = [
        ("a0", -5.0, 0.0, 180.0),
        ("b0", 5.0, 0.0, 0.0),
        ("a1", 0.0, -5.0, 270.0),
        ("b1", 0.0, 5.0, 90.0),
    ];
    for (name, x, y, a) in expected {
        let p = cross.port(name).unwrap();
        assert!((p.x - x).abs() < 1e-9, "{name}: x = {}", p.x);
        assert!((p.y - y).abs() < 1e-9, "{name}: y = {}", p.y);
        assert!(angles_equivalent(p.a, a, 1e-9), "{name}: a = {}", p.a);
    }

    // The template is left untouched
    assert_eq!(wg.port("a0").unwrap().x, 30.0);
}

#[test]
fn test_cross_of_tapered_arm() {
    let arm = taper(8.0, 0.5, 1.5).unwrap();
    let cross = Cross::new(&arm).unwrap();
    assert_eq!(cross.port("a1").unwrap().w, 0.5);
    assert_eq!(cross.port("b1").unwrap().w, 1.5);
}

#[test]
fn test_cross_requires_waveguide_ports() {
    let err = Cross::new(&Pattern::rect(4.0, 1.0).unwrap()).unwrap_err();
    assert!(err.is_lookup_error());
}
