use std::f64::consts::PI;

use dropsize::psd::binner::{bin_measurements, digitize, equivalent_diameter, running_average};
use dropsize::psd::BinTable;
use rstest::rstest;

fn three_bins() -> BinTable {
    BinTable::new(
        vec![0.0, 1.0, 2.0],
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
    )
    .unwrap()
}

/// Area of a circle with the given diameter, the inverse of the
/// equivalent-diameter conversion.
fn area_of(diameter: f64) -> f64 {
    PI * (diameter * diameter / 4.0)
}

#[test]
fn test_equivalent_diameter_roundtrip() {
    assert!((equivalent_diameter(PI) - 2.0).abs() < 1e-12);
    assert!((equivalent_diameter(area_of(1.0)) - 1.0).abs() < 1e-12);
    assert!((equivalent_diameter(area_of(7.25)) - 7.25).abs() < 1e-12);
}

// Right-open digitization against ascending edges: slot index equals the
// number of edges at or below the value.
#[rstest]
#[case(0.5, 0)]
#[case(1.0, 1)]
#[case(1.5, 1)]
#[case(2.0, 2)]
#[case(2.9, 2)]
#[case(3.0, 3)]
#[case(99.0, 3)]
fn test_digitize(#[case] value: f64, #[case] expected: usize) {
    assert_eq!(digitize(value, &[1.0, 2.0, 3.0]), expected);
}

#[test]
fn test_binner_reference_scenario() {
    let bins = three_bins();
    let areas: Vec<f64> = [1.0, 1.0, 2.0, 2.0, 2.0, 3.0]
        .iter()
        .map(|&d| area_of(d))
        .collect();

    let moments = bin_measurements(&areas, &bins);
    assert_eq!(moments.counts, vec![0.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_binner_weights_by_slot_diameter() {
    let bins = three_bins();
    // One particle of diameter 1.5 lands in slot 1, which carries the
    // representative diameter 2 regardless of the measured value.
    let areas = vec![area_of(1.5), area_of(1.5)];

    let moments = bin_measurements(&areas, &bins);
    assert_eq!(moments.counts, vec![0.0, 2.0, 0.0, 0.0]);
    assert!((moments.surface[1] - 4.0 * PI * 1.0 * 1.0 * 2.0).abs() < 1e-9);
    assert!((moments.volume[1] - (4.0 / 3.0) * PI * 1.0 * 2.0).abs() < 1e-9);
    assert_eq!(moments.surface[0], 0.0);
    assert_eq!(moments.surface[2], 0.0);
}

#[test]
fn test_binner_overflow_slot_clamps_to_last_bin() {
    let bins = three_bins();
    let areas = vec![area_of(10.0), area_of(12.0)];

    let moments = bin_measurements(&areas, &bins);
    assert_eq!(moments.counts, vec![0.0, 0.0, 0.0, 2.0]);
    let r = 3.0 / 2.0;
    assert!((moments.surface[3] - 4.0 * PI * r * r * 2.0).abs() < 1e-9);
    assert!((moments.volume[3] - (4.0 / 3.0) * PI * r * r * r * 2.0).abs() < 1e-9);
}

#[test]
fn test_running_average() {
    assert_eq!(running_average(&[1.0, 2.0, 3.0]), vec![1.0, 1.5, 2.0]);
    assert_eq!(running_average(&[4.0]), vec![4.0]);
    assert!(running_average(&[]).is_empty());
}
