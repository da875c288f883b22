use super::*;

#[test]
fn clamp_percent_bounds_values() {
    assert!((clamp_percent(75.0) - 75.0).abs() < f64::EPSILON);
    assert!(clamp_percent(-5.0).abs() < f64::EPSILON);
    assert!((clamp_percent(130.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn clamp_percent_rejects_non_finite() {
    assert!(clamp_percent(f64::NAN).abs() < f64::EPSILON);
    assert!(clamp_percent(f64::INFINITY).abs() < f64::EPSILON);
}

#[test]
fn score_percent_reads_missing_score_as_zero() {
    assert!(score_percent(None).abs() < f64::EPSILON);
    assert!((score_percent(Some(80.0)) - 80.0).abs() < f64::EPSILON);
    assert!((score_percent(Some(120.0)) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn circle_dash_empty_and_full() {
    let (circumference, empty) = circle_dash(0.0, 10.0);
    assert!((empty - circumference).abs() < 1e-9);
    let (_, full) = circle_dash(100.0, 10.0);
    assert!(full.abs() < 1e-9);
}

#[test]
fn circle_dash_three_quarters_leaves_one_quarter_offset() {
    let (circumference, offset) = circle_dash(75.0, RING_RADIUS);
    assert!((offset - circumference * 0.25).abs() < 1e-9);
}

#[test]
fn format_percent_rounds_and_clamps() {
    assert_eq!(format_percent(75.0), "75%");
    assert_eq!(format_percent(33.4), "33%");
    assert_eq!(format_percent(250.0), "100%");
}
