use std::f64::consts::PI;

use dropsize::error::DropsizeError;
use dropsize::psd::binner::bin_measurements;
use dropsize::psd::distribution::{build, cumulative, interpolate_cutoff, percentages};
use dropsize::psd::{BinTable, CrossingMode, MomentKind};

fn three_bins() -> BinTable {
    BinTable::new(
        vec![0.0, 1.0, 2.0],
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
    )
    .unwrap()
}

fn area_of(diameter: f64) -> f64 {
    PI * (diameter * diameter / 4.0)
}

fn scenario_cumulative() -> Vec<f64> {
    let areas: Vec<f64> = [1.0, 1.0, 2.0, 2.0, 2.0, 3.0]
        .iter()
        .map(|&d| area_of(d))
        .collect();
    let moments = bin_measurements(&areas, &three_bins());
    build(MomentKind::Number, &moments).unwrap().cumulative
}

#[test]
fn test_percentages_sum_to_hundred() {
    let pct = percentages(MomentKind::Number, &[0.0, 2.0, 3.0, 1.0]).unwrap();
    assert!((pct[1] - 100.0 / 3.0).abs() < 1e-9);
    assert!((pct[2] - 50.0).abs() < 1e-9);
    assert!((pct[3] - 100.0 / 6.0).abs() < 1e-9);
    assert!((pct.iter().sum::<f64>() - 100.0).abs() < 1e-9);
}

#[test]
fn test_percentages_reject_empty_mass() {
    let err = percentages(MomentKind::Volume, &[0.0, 0.0, 0.0]).unwrap_err();
    match err {
        DropsizeError::EmptyBinMass(kind) => assert_eq!(kind, "Volume"),
        other => panic!("Expected EmptyBinMass, got {:?}", other),
    }
}

#[test]
fn test_cumulative_is_running_sum() {
    let cum = cumulative(&[0.0, 100.0 / 3.0, 50.0, 100.0 / 6.0]);
    assert!((cum[0]).abs() < 1e-9);
    assert!((cum[1] - 100.0 / 3.0).abs() < 1e-9);
    assert!((cum[2] - 250.0 / 3.0).abs() < 1e-9);
    assert!((cum[3] - 100.0).abs() < 1e-9);
}

#[test]
fn test_scenario_d50_interpolates_between_crossing_pair() {
    let cum = scenario_cumulative();
    let d50 = interpolate_cutoff(&three_bins(), &cum, 50.0, CrossingMode::Inclusive).unwrap();

    // Crossing slot pairs (2, 33.3) with (3, 83.3); 50% sits a third in.
    assert!((d50 - 7.0 / 3.0).abs() < 1e-9);
    assert!(d50 > 2.0 && d50 < 3.0);
}

#[test]
fn test_scenario_d10() {
    let cum = scenario_cumulative();
    let d10 = interpolate_cutoff(&three_bins(), &cum, 10.0, CrossingMode::Inclusive).unwrap();
    assert!((d10 - 1.3).abs() < 1e-9);
}

#[test]
fn test_cutoff_beyond_last_bin_is_out_of_range() {
    // 90% is only reached in the at-or-above-maximum slot, which has no
    // representative diameter to interpolate against.
    let cum = scenario_cumulative();
    let err = interpolate_cutoff(&three_bins(), &cum, 90.0, CrossingMode::Inclusive).unwrap_err();
    match err {
        DropsizeError::OutOfRangeCutoff { cutoff, index } => {
            assert_eq!(cutoff, 90.0);
            assert_eq!(index, 3);
        }
        other => panic!("Expected OutOfRangeCutoff, got {:?}", other),
    }
}

#[test]
fn test_cutoff_below_first_slot_is_out_of_range() {
    let bins = three_bins();
    // All mass below the smallest representative diameter.
    let areas = vec![area_of(0.2), area_of(0.3)];
    let moments = bin_measurements(&areas, &bins);
    let dist = build(MomentKind::Number, &moments).unwrap();

    let err = interpolate_cutoff(&bins, &dist.cumulative, 50.0, CrossingMode::Inclusive).unwrap_err();
    match err {
        DropsizeError::OutOfRangeCutoff { index, .. } => assert_eq!(index, 0),
        other => panic!("Expected OutOfRangeCutoff, got {:?}", other),
    }
}

#[test]
fn test_crossing_modes_differ_on_plateau() {
    let bins = BinTable::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0, 4.0],
        vec![1.0, 2.0, 3.0, 4.0],
    )
    .unwrap();
    let cum = [0.0, 50.0, 50.0, 100.0];

    let inclusive = interpolate_cutoff(&bins, &cum, 50.0, CrossingMode::Inclusive).unwrap();
    let exclusive = interpolate_cutoff(&bins, &cum, 50.0, CrossingMode::Exclusive).unwrap();

    // Inclusive stops at the leading edge of the plateau, exclusive walks
    // past it to the next rise.
    assert!((inclusive - 2.0).abs() < 1e-9);
    assert!((exclusive - 3.0).abs() < 1e-9);
}
