use photonkit_core::{CommonLayer, Error, LookupError};
use photonkit_designer::curves::straight;
use photonkit_designer::{Device, DeviceEntry, Layout, Pattern, Point, WaveguideDevice};
use photonkit_settings::FoundryConfig;

fn rib_waveguide() -> WaveguideDevice {
    let ridge = straight(10.0).unwrap().path(0.5).unwrap();
    let slab = straight(10.0).unwrap().path(3.0).unwrap();
    WaveguideDevice::new(ridge, Some(slab)).unwrap()
}

#[test]
fn test_waveguide_device_layers_and_ports() {
    let wg = rib_waveguide();
    assert_eq!(wg.device().name, "rib_wg");
    assert_eq!(wg.device().layers(), vec![Some("ridge_si"), Some("rib_si")]);
    assert_eq!(wg.port("a0").unwrap().w, 0.5);
    assert_eq!(wg.ports().len(), 2);
    assert!((wg.size().1 - 3.0).abs() < 1e-12);
}

#[test]
fn test_waveguide_without_slab() {
    let ridge = straight(10.0).unwrap().path(0.5).unwrap();
    let wg = WaveguideDevice::new(ridge, None).unwrap();
    assert_eq!(wg.device().entries().len(), 1);
}

#[test]
fn test_waveguide_requires_ridge_ports() {
    let err = WaveguideDevice::new(Pattern::rect(1.0, 1.0).unwrap(), None).unwrap_err();
    assert!(err.is_lookup_error());
}

#[test]
fn test_nested_devices_keep_member_layers() {
    let marker = Pattern::rect(1.0, 1.0).unwrap();
    let device = Device::new(
        "top",
        [
            DeviceEntry::from(rib_waveguide()),
            DeviceEntry::from((marker, CommonLayer::CladOpen)),
        ],
    );
    assert_eq!(device.entries().len(), 3);
    assert_eq!(
        device.layers(),
        vec![Some("ridge_si"), Some("rib_si"), Some("clad_open")]
    );
    // Member ports are not merged automatically
    assert!(device.ports().is_empty());
}

#[test]
fn test_same_layer_entries_stay_distinct() {
    let device = Device::new(
        "pair",
        [
            (Pattern::rect(1.0, 1.0).unwrap(), "ridge_si"),
            (Pattern::rect(2.0, 1.0).unwrap(), "ridge_si"),
        ],
    );
    assert_eq!(device.entries().len(), 2);
    let groups = device.polygons_by_layer();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[&Some("ridge_si".to_string())].len(), 2);
}

#[test]
fn test_transforms_apply_to_every_member() {
    let mut wg = rib_waveguide();
    wg.rotate(90.0, Point::origin());
    for entry in wg.device().entries() {
        let b = entry.pattern.bounds();
        assert!(b.height() > b.width());
    }
    let b0 = wg.port("b0").unwrap();
    assert!(b0.x.abs() < 1e-9 && (b0.y - 10.0).abs() < 1e-9);
}

#[test]
fn test_expose_port() {
    let ridge = straight(10.0).unwrap().path(0.5).unwrap();
    let mut device = Device::new("d", [(ridge, CommonLayer::RidgeSi)]);
    device.expose_port("in", 0, "a0").unwrap();
    assert_eq!(device.port("in").unwrap().x, 0.0);
    assert!(device.expose_port("out", 0, "c9").unwrap_err().is_lookup_error());
    assert!(device.expose_port("out", 4, "b0").unwrap_err().is_lookup_error());
}

#[test]
fn test_resolve_layers_against_foundry() {
    let foundry = FoundryConfig::default();
    let wg = rib_waveguide();
    let resolved = wg.device().resolve_layers(&foundry).unwrap();
    assert_eq!(resolved.len(), 2);
    assert!(resolved.contains_key("ridge_si"));

    let unknown = Device::new("x", [(Pattern::rect(1.0, 1.0).unwrap(), "not_a_layer")]);
    let err = unknown.resolve_layers(&foundry).unwrap_err();
    assert!(matches!(
        err,
        Error::Lookup(LookupError::UnknownLayer { ref layer }) if layer == "not_a_layer"
    ));

    let bare = Device::new("bare", [Pattern::rect(1.0, 1.0).unwrap()]);
    assert!(bare.resolve_layers(&foundry).unwrap_err().is_lookup_error());
}

#[test]
fn test_flatten_drops_layers_and_keeps_device_ports() {
    let wg = rib_waveguide();
    let flat = wg.device().flatten();
    assert_eq!(flat.polygons().len(), 2);
    assert!(flat.port("a0").is_ok());
}
