use photonkit_designer::{Layout, Pattern, Point, Port, Region};

fn rect_at(cx: f64, cy: f64, w: f64, h: f64) -> Pattern {
    let mut p = Pattern::rect(w, h).unwrap();
    p.translate(cx, cy);
    p
}

#[test]
fn test_rect_is_centered() {
    let p = Pattern::rect(4.0, 2.0).unwrap();
    let b = p.bounds();
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-2.0, -1.0, 2.0, 1.0));
    assert_eq!(p.size(), (4.0, 2.0));
    assert!(p.ports().is_empty());
}

#[test]
fn test_invalid_shapes_rejected() {
    assert!(Pattern::rect(0.0, 1.0).unwrap_err().is_validation_error());
    assert!(Pattern::circle(-1.0, 32).unwrap_err().is_validation_error());
    assert!(Pattern::ellipse(1.0, 2.0, 2).unwrap_err().is_validation_error());
    let collinear = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
    assert!(Pattern::polygon(collinear).unwrap_err().is_geometry_error());
}

#[test]
fn test_copy_does_not_alias() {
    let mut original = rect_at(0.0, 0.0, 2.0, 2.0);
    original.set_port("a0", Port::new(-1.0, 0.0, 180.0, 2.0));
    let mut copy = original.copy();
    copy.translate(10.0, 0.0).set_port("extra", Port::new(0.0, 0.0, 0.0, 1.0));

    assert_eq!(original.bounds().min_x, -1.0);
    assert_eq!(original.port("a0").unwrap().x, -1.0);
    assert!(original.port("extra").is_err());
    assert_eq!(copy.port("a0").unwrap().x, 9.0);
}

#[test]
fn test_compose_keeps_region_order_and_drops_ports() {
    let mut a = rect_at(0.0, 0.0, 1.0, 1.0);
    a.set_port("a0", Port::new(0.0, 0.0, 0.0, 1.0));
    let b = rect_at(5.0, 0.0, 1.0, 1.0);
    let composed = Pattern::compose([a, b]);
    assert_eq!(composed.polygons().len(), 2);
    assert!(composed.polygons()[0].bounds().unwrap().max_x < composed.polygons()[1].bounds().unwrap().min_x);
    assert!(composed.ports().is_empty());
}

#[test]
fn test_boolean_operations() {
    let a = rect_at(0.0, 0.0, 2.0, 2.0);
    let b = rect_at(1.0, 0.0, 2.0, 2.0);

    let union: f64 = a.union(&b).polygons().iter().map(Region::area).sum();
    let diff: f64 = a.difference(&b).polygons().iter().map(Region::area).sum();
    let inter: f64 = a.intersection(&b).polygons().iter().map(Region::area).sum();

    assert!((union - 6.0).abs() < 1e-9);
    assert!((diff - 2.0).abs() < 1e-9);
    assert!((inter - 2.0).abs() < 1e-9);
    assert_eq!(a.union(&b).polygons().len(), 1);
}

#[test]
fn test_boolean_keeps_own_ports() {
    let mut a = rect_at(0.0, 0.0, 2.0, 2.0);
    a.set_port("a0", Port::new(-1.0, 0.0, 180.0, 2.0));
    let b = rect_at(3.0, 0.0, 2.0, 2.0);
    assert!(a.union(&b).port("a0").is_ok());
}

#[test]
fn test_buffer_grows_and_shrinks() {
    let square = Pattern::rect(4.0, 4.0).unwrap();

    let grown = square.buffer(1.0);
    let b = grown.bounds();
    assert!((b.width() - 6.0).abs() < 1e-6);
    assert!((b.height() - 6.0).abs() < 1e-6);
    assert!(grown.ports().is_empty());

    let shrunk = square.buffer(-1.0);
    let area: f64 = shrunk.polygons().iter().map(Region::area).sum();
    assert!((area - 4.0).abs() < 1e-6);

    assert!(square.buffer(-3.0).is_empty());
}

#[test]
fn test_buffer_zero_merges_overlaps() {
    let pattern = Pattern::compose([rect_at(0.0, 0.0, 2.0, 2.0), rect_at(1.0, 0.0, 2.0, 2.0)]);
    let merged = pattern.buffer(0.0);
    assert_eq!(merged.polygons().len(), 1);
}

#[test]
fn test_centroid_is_area_weighted() {
    let big = rect_at(0.0, 0.0, 4.0, 4.0);
    let small = rect_at(10.0, 0.0, 2.0, 2.0);
    let c = Pattern::compose([big, small]).centroid().unwrap();
    // 16 * 0 + 4 * 10 over 20
    assert!((c.x - 2.0).abs() < 1e-9);
    assert!(c.y.abs() < 1e-9);
    assert!(Pattern::new().centroid().is_none());
}

#[test]
fn test_center_is_bounding_box_center() {
    let p = Pattern::compose([rect_at(0.0, 0.0, 4.0, 4.0), rect_at(10.0, 0.0, 2.0, 2.0)]);
    let c = p.center();
    assert!((c.x - 4.5).abs() < 1e-12);
}

#[test]
fn test_striped_vertical_teeth() {
    let box_ = Pattern::rect(10.0, 4.0).unwrap();
    let teeth = box_.striped(0.5, (2.0, 0.0), false).unwrap();
    // centers at -5, -3, ..., 5: half stripes at both ends
    assert_eq!(teeth.polygons().len(), 6);
    let area: f64 = teeth.polygons().iter().map(Region::area).sum();
    assert!((area - (4.0 * 0.5 + 2.0 * 0.25) * 4.0).abs() < 1e-6);
}

#[test]
fn test_striped_with_boundary_frames_the_shape() {
    let box_ = Pattern::rect(10.0, 4.0).unwrap();
    let striped = box_.striped(0.5, (2.0, 0.0), true).unwrap();
    let b = striped.bounds();
    assert!((b.width() - 10.0).abs() < 1e-6);
    assert!((b.height() - 4.0).abs() < 1e-6);
    // Frame and stripes merge into one connected region
    assert_eq!(striped.polygons().len(), 1);
}

#[test]
fn test_striped_rejects_zero_pitch() {
    let box_ = Pattern::rect(10.0, 4.0).unwrap();
    assert!(box_.striped(0.5, (0.0, 0.0), false).unwrap_err().is_validation_error());
    assert!(box_.striped(0.0, (1.0, 0.0), false).unwrap_err().is_validation_error());
}

#[test]
fn test_references_follow_the_parent() {
    let mut parent = rect_at(0.0, 0.0, 2.0, 2.0);
    parent.add_reference("child", rect_at(5.0, 0.0, 1.0, 1.0));
    parent.translate(0.0, 3.0);
    let child = parent.reference("child").unwrap();
    assert!((child.center().y - 3.0).abs() < 1e-12);
    assert!(parent.reference("missing").unwrap_err().is_lookup_error());
}

#[test]
fn test_alignment_and_stacking() {
    let anchor = rect_at(0.0, 0.0, 4.0, 2.0);

    let mut right = rect_at(20.0, 7.0, 2.0, 2.0);
    right.hstack(&anchor, false);
    let b = right.bounds();
    assert!((b.min_x - 2.0).abs() < 1e-12);
    assert!(right.center().y.abs() < 1e-12);

    let mut left = rect_at(20.0, 7.0, 2.0, 2.0);
    left.hstack(&anchor, true);
    assert!((left.bounds().max_x + 2.0).abs() < 1e-12);

    let mut above = rect_at(-3.0, -9.0, 2.0, 2.0);
    above.vstack(&anchor, true);
    assert!((above.bounds().min_y - 1.0).abs() < 1e-12);
    assert!(above.center().x.abs() < 1e-12);

    let mut below = rect_at(-3.0, 9.0, 2.0, 2.0);
    below.vstack(&anchor, false);
    assert!((below.bounds().max_y + 1.0).abs() < 1e-12);

    let mut moved = rect_at(5.0, 5.0, 1.0, 1.0);
    moved.align_with(&anchor);
    assert!(moved.center().distance_to(&anchor.center()) < 1e-12);

    moved.halign(3.0, true).valign(-1.0, false);
    let b = moved.bounds();
    assert!((b.min_x - 3.0).abs() < 1e-12);
    assert!((b.max_y + 1.0).abs() < 1e-12);
}
