use super::*;

// =============================================================
// WorkStatus
// =============================================================

#[test]
fn work_status_deserializes_lowercase_names() {
    let parsed: WorkStatusResponse =
        serde_json::from_value(serde_json::json!({ "status": "tuning", "status_name": "模型微调中" })).unwrap();
    assert_eq!(parsed.status, WorkStatus::Tuning);
    assert_eq!(parsed.status_name, "模型微调中");
}

#[test]
fn work_status_rejects_unknown_stage() {
    let parsed = serde_json::from_value::<WorkStatusResponse>(serde_json::json!({ "status": "paused" }));
    assert!(parsed.is_err());
}

#[test]
fn work_status_step_indices_follow_pipeline_order() {
    for (expected, status) in WorkStatus::ALL.into_iter().enumerate() {
        assert_eq!(status.step_index(), expected);
    }
}

#[test]
fn work_status_as_str_matches_wire_name() {
    for status in WorkStatus::ALL {
        let wire = serde_json::to_value(status).unwrap();
        assert_eq!(wire, serde_json::Value::String(status.as_str().to_owned()));
    }
}

#[test]
fn work_status_tones_match_tag_palette() {
    assert_eq!(WorkStatus::Idle.tone(), StatusTone::Default);
    assert_eq!(WorkStatus::Generating.tone(), StatusTone::Processing);
    assert_eq!(WorkStatus::Answering.tone(), StatusTone::Processing);
    assert_eq!(WorkStatus::Grading.tone(), StatusTone::Warning);
    assert_eq!(WorkStatus::Tuning.tone(), StatusTone::Warning);
    assert_eq!(WorkStatus::Evaluating.tone(), StatusTone::Success);
}

// =============================================================
// User / auth payloads
// =============================================================

#[test]
fn user_accepts_camel_and_snake_admin_flag() {
    let camel: User = serde_json::from_value(serde_json::json!({ "username": "alice", "isAdmin": true })).unwrap();
    let snake: User = serde_json::from_value(serde_json::json!({ "username": "alice", "is_admin": true })).unwrap();
    assert!(camel.is_admin);
    assert_eq!(camel, snake);
}

#[test]
fn user_admin_flag_defaults_to_false() {
    let user: User = serde_json::from_value(serde_json::json!({ "username": "bob" })).unwrap();
    assert!(!user.is_admin);
}

#[test]
fn register_request_omits_missing_invite_code() {
    let body = RegisterRequest { username: "alice".to_owned(), password: "secret1".to_owned(), invite_code: None };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "username": "alice", "password": "secret1" })
    );
}

#[test]
fn register_request_uses_camel_case_invite_code() {
    let body = RegisterRequest {
        username: "alice".to_owned(),
        password: "secret1".to_owned(),
        invite_code: Some("ADMIN123".to_owned()),
    };
    assert_eq!(serde_json::to_value(&body).unwrap()["inviteCode"], "ADMIN123");
}

#[test]
fn login_response_reads_access_token() {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({ "access_token": "tok", "token_type": "bearer" })).unwrap();
    assert_eq!(resp.access_token, "tok");
}

// =============================================================
// Stage payloads
// =============================================================

#[test]
fn qa_pairs_default_to_empty_list() {
    let parsed: QaPairs = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(parsed.qa_pairs.is_empty());
}

#[test]
fn answer_data_exposes_candidates_in_order() {
    let parsed: AnswerData = serde_json::from_value(serde_json::json!({
        "question": "Q",
        "answer1": "A1",
        "answer2": "A2",
        "answer3": "A3",
        "answer4": "A4",
    }))
    .unwrap();
    assert_eq!(parsed.answers(), ["A1", "A2", "A3", "A4"]);
}

#[test]
fn answer_data_missing_slots_are_empty() {
    let parsed: AnswerData = serde_json::from_value(serde_json::json!({ "question": "Q", "answer1": "A1" })).unwrap();
    assert_eq!(parsed.answers(), ["A1", "", "", ""]);
}

#[test]
fn score_data_accepts_text_and_numeric_scores() {
    let parsed: ScoreData = serde_json::from_value(serde_json::json!({
        "question": "Q",
        "answer1": "A1",
        "answer2": "A2",
        "answer3": "A3",
        "answer4": "A4",
        "score1": "80",
        "score2": 65,
        "score3": "n/a",
        "score4": 92.5,
    }))
    .unwrap();
    assert_eq!(parsed.answers.question, "Q");
    assert_eq!(parsed.score_texts(), ["80", "65", "n/a", "92.5"]);
    assert_eq!(parsed.score_values(), [Some(80.0), Some(65.0), None, Some(92.5)]);
}

#[test]
fn parse_score_trims_whitespace_and_rejects_non_finite() {
    assert_eq!(parse_score(" 80 "), Some(80.0));
    assert_eq!(parse_score("NaN"), None);
    assert_eq!(parse_score("inf"), None);
    assert_eq!(parse_score(""), None);
}

#[test]
fn tuning_progress_accepts_integer_compatible_floats() {
    let parsed: TuningProgress =
        serde_json::from_value(serde_json::json!({ "progress": 75.0, "message": "epoch 3" })).unwrap();
    assert_eq!(parsed.progress, 75);
    assert_eq!(parsed.message, "epoch 3");
}

#[test]
fn tuning_progress_rounds_fractional_progress() {
    let parsed: TuningProgress = serde_json::from_value(serde_json::json!({ "progress": 75.5 })).unwrap();
    assert_eq!(parsed.progress, 76);
    let parsed: TuningProgress = serde_json::from_value(serde_json::json!({ "progress": 7.4 })).unwrap();
    assert_eq!(parsed.progress, 7);
}

#[test]
fn tuning_progress_is_bounded_to_percent_range() {
    let over: TuningProgress = serde_json::from_value(serde_json::json!({ "progress": 130 })).unwrap();
    assert_eq!(over.progress, 100);
    let under: TuningProgress = serde_json::from_value(serde_json::json!({ "progress": -2.5 })).unwrap();
    assert_eq!(under.progress, 0);
}

#[test]
fn tuning_progress_rejects_non_numeric_progress() {
    let parsed = serde_json::from_value::<TuningProgress>(serde_json::json!({ "progress": "busy" }));
    assert!(parsed.is_err());
}
