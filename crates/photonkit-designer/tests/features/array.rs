use photonkit_designer::arrays::GridArrayParams;
use photonkit_designer::curves::straight;
use photonkit_designer::{Array, Bounds, Cross, Layout, Pattern};

#[test]
fn test_array_bounds_and_copies() {
    let unit = Pattern::circle(0.5, 24).unwrap();
    let array = Array::new(&unit, (4, 3), (5.0, 2.0)).unwrap();

    assert_eq!(array.pattern().polygons().len(), 12);
    assert_eq!(array.grid().total_copies(), 12);
    let (w, h) = array.size();
    assert!((w - (3.0 * 5.0 + 1.0)).abs() < 1e-9);
    assert!((h - (2.0 * 2.0 + 1.0)).abs() < 1e-9);
    assert!(array.ports().is_empty());
}

#[test]
fn test_array_column_major_order() {
    let unit = Pattern::rect(1.0, 1.0).unwrap();
    let array = Array::new(&unit, (2, 2), 3.0).unwrap();
    let centers: Vec<(f64, f64)> = array
        .pattern()
        .polygons()
        .iter()
        .map(|r| {
            let c = r.centroid().unwrap();
            (c.x.round(), c.y.round())
        })
        .collect();
    assert_eq!(centers, vec![(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)]);
}

#[test]
fn test_array_of_crossings() {
    let wg = straight(4.0).unwrap().path(0.4).unwrap();
    let cross = Cross::new(&wg).unwrap();
    let array = Array::new(cross.pattern(), (3, 3), 6.0).unwrap();
    assert_eq!(array.pattern().polygons().len(), 18);
    assert!((array.size().0 - 16.0).abs() < 1e-9);
}

#[test]
fn test_array_rejects_empty_grid_and_bad_pitch() {
    let unit = Pattern::rect(1.0, 1.0).unwrap();
    assert!(Array::new(&unit, (0, 3), 2.0).unwrap_err().is_validation_error());
    assert!(Array::new(&unit, (2, 2), (2.0, -1.0)).unwrap_err().is_validation_error());
}

#[test]
fn test_grid_bounds_prediction_matches_layout() {
    let unit = Pattern::rect(2.0, 1.0).unwrap();
    let array = Array::new(&unit, (3, 2), (4.0, 5.0)).unwrap();
    let predicted = GridArrayParams::new(3, 2, (4.0, 5.0)).calculate_bounds(unit.bounds());
    let actual = array.bounds();
    assert_eq!(predicted, actual);
    assert_eq!(predicted, Bounds::new(-1.0, -0.5, 9.0, 5.5));
}
