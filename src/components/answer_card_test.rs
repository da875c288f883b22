use super::*;

#[test]
fn candidate_labels_are_one_based() {
    assert_eq!(candidate_label(0), "答案 1");
    assert_eq!(candidate_label(3), "答案 4");
}

#[test]
fn whole_scores_render_without_decimals() {
    assert_eq!(format_score(Some(80.0)), "80");
}

#[test]
fn fractional_scores_keep_one_decimal() {
    assert_eq!(format_score(Some(92.5)), "92.5");
}

#[test]
fn missing_score_renders_zero() {
    assert_eq!(format_score(None), "0");
    assert_eq!(format_score(Some(f64::NAN)), "0");
}
