// File: crates/vitals-chart/tests/series.rs
// Purpose: Series construction invariants (filtering, ordering, extents).

use vitals_chart::{Sample, Series};

#[test]
fn drops_non_finite_samples_individually() {
    let s = Series::from_samples(vec![
        (1.0, 10.0),
        (f64::NAN, 11.0),
        (2.0, f64::NEG_INFINITY),
        (f64::INFINITY, 1.0),
        (3.0, 12.0),
    ]);
    assert_eq!(s.samples(), &[Sample::new(1.0, 10.0), Sample::new(3.0, 12.0)]);
}

#[test]
fn sorts_by_time_keeping_ties_in_encounter_order() {
    let s = Series::from_samples(vec![(2.0, 1.0), (1.0, 2.0), (2.0, 3.0), (0.5, 4.0), (2.0, 5.0)]);
    let got: Vec<(f64, f64)> = s.iter().map(|p| (p.time, p.value)).collect();
    assert_eq!(got, vec![(0.5, 4.0), (1.0, 2.0), (2.0, 1.0), (2.0, 3.0), (2.0, 5.0)]);
}

#[test]
fn keeps_sample_at_time_zero() {
    let s = Series::from_samples(vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(s.len(), 2);
    assert_eq!(s.first(), Some(&Sample::new(0.0, 1.0)));
}

#[test]
fn columns_are_zipped_to_shortest() {
    let s = Series::from_columns(&[3.0, 1.0, 2.0, 9.0], &[30.0, 10.0, 20.0]);
    assert_eq!(s.times().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    assert_eq!(s.values().collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);
}

#[test]
fn extents() {
    let s: Series = vec![(5.0, -1.0), (1.0, 4.0), (3.0, 2.0)].into_iter().collect();
    assert_eq!(s.time_extent(), Some((1.0, 5.0)));
    assert_eq!(s.value_extent(), Some((-1.0, 4.0)));

    let empty = Series::new();
    assert!(empty.is_empty());
    assert_eq!(empty.time_extent(), None);
    assert_eq!(empty.value_extent(), None);
}
