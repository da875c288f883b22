//! Wire DTOs for the workshop REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON schema field-for-field. Stage payloads
//! are snapshots: the client never mutates them, it only replaces them with
//! the next successful poll.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of candidate answers the server produces per question.
pub const CANDIDATE_COUNT: usize = 4;

/// Server-authoritative pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    /// Waiting for an input file.
    Idle,
    /// Generating questions from the corpus.
    Generating,
    /// Producing candidate answers.
    Answering,
    /// Scoring candidate answers.
    Grading,
    /// Tuning the model on graded data.
    Tuning,
    /// Evaluating the tuned model.
    Evaluating,
}

impl WorkStatus {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::Idle,
        Self::Generating,
        Self::Answering,
        Self::Grading,
        Self::Tuning,
        Self::Evaluating,
    ];

    /// Wire name of the stage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Answering => "answering",
            Self::Grading => "grading",
            Self::Tuning => "tuning",
            Self::Evaluating => "evaluating",
        }
    }

    /// Zero-based position in the step bar.
    #[must_use]
    pub fn step_index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Generating => 1,
            Self::Answering => 2,
            Self::Grading => 3,
            Self::Tuning => 4,
            Self::Evaluating => 5,
        }
    }

    /// Short title shown under the step icon.
    #[must_use]
    pub fn step_title(self) -> &'static str {
        match self {
            Self::Idle => "开始",
            Self::Generating => "出题中",
            Self::Answering => "解答中",
            Self::Grading => "打分中",
            Self::Tuning => "微调中",
            Self::Evaluating => "测评中",
        }
    }

    /// Colour family of the status tag.
    #[must_use]
    pub fn tone(self) -> StatusTone {
        match self {
            Self::Idle => StatusTone::Default,
            Self::Generating | Self::Answering => StatusTone::Processing,
            Self::Grading | Self::Tuning => StatusTone::Warning,
            Self::Evaluating => StatusTone::Success,
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual tone of the status tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Default,
    Processing,
    Warning,
    Success,
}

impl StatusTone {
    /// CSS modifier class for the tag.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "status-tag status-tag--default",
            Self::Processing => "status-tag status-tag--processing",
            Self::Warning => "status-tag status-tag--warning",
            Self::Success => "status-tag status-tag--success",
        }
    }
}

/// Response of `GET /work/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStatusResponse {
    pub status: WorkStatus,
    #[serde(default)]
    pub status_name: String,
}

/// An authenticated user as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(rename = "isAdmin", alias = "is_admin", default)]
    pub is_admin: bool,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "inviteCode", skip_serializing_if = "Option::is_none", default)]
    pub invite_code: Option<String>,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Body of `POST /files/select`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectFileRequest {
    pub file_path: String,
}

/// One generated question with its reference answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// Response of `GET /qa/current`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPairs {
    #[serde(default)]
    pub qa_pairs: Vec<QaPair>,
}

/// Candidate answers for the question currently being answered.
///
/// The server emits exactly four candidate slots; missing slots decode as
/// empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerData {
    pub question: String,
    #[serde(default)]
    pub answer1: String,
    #[serde(default)]
    pub answer2: String,
    #[serde(default)]
    pub answer3: String,
    #[serde(default)]
    pub answer4: String,
}

impl AnswerData {
    /// Candidate answers in slot order.
    #[must_use]
    pub fn answers(&self) -> [&str; CANDIDATE_COUNT] {
        [
            self.answer1.as_str(),
            self.answer2.as_str(),
            self.answer3.as_str(),
            self.answer4.as_str(),
        ]
    }
}

/// Candidate answers annotated with their grades.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreData {
    #[serde(flatten)]
    pub answers: AnswerData,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub score1: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub score2: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub score3: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub score4: String,
}

impl ScoreData {
    /// Raw score text in slot order.
    #[must_use]
    pub fn score_texts(&self) -> [&str; CANDIDATE_COUNT] {
        [
            self.score1.as_str(),
            self.score2.as_str(),
            self.score3.as_str(),
            self.score4.as_str(),
        ]
    }

    /// Scores parsed as numbers; unparseable slots are `None`.
    #[must_use]
    pub fn score_values(&self) -> [Option<f64>; CANDIDATE_COUNT] {
        self.score_texts().map(parse_score)
    }
}

/// Parse a numeric-as-text score such as `"80"` or `" 92.5 "`.
#[must_use]
pub fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Response of `GET /tuning/progress`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningProgress {
    #[serde(deserialize_with = "deserialize_percent")]
    pub progress: i32,
    #[serde(default)]
    pub message: String,
}

fn deserialize_text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Progress arrives as any JSON number; it is rounded to a whole percent and
/// bounded to `[0, 100]`.
#[allow(clippy::cast_possible_truncation)]
fn deserialize_percent<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let Some(number) = value.as_f64().filter(|n| n.is_finite()) else {
        return Err(D::Error::custom("expected number"));
    };
    Ok(number.round().clamp(0.0, 100.0) as i32)
}
