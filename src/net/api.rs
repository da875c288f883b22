//! REST API client for the workshop server.
//!
//! Every operation is a row in the call table below and goes through one
//! request helper, so the bearer header, error normalization and the 401
//! logout policy apply identically to every endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface the server's `detail` text when present and the
//! operation's localized fallback otherwise. A 401 from any call expires the
//! session (token cleared, navigation to `/login`) before the error returns.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{HttpRequest, HttpTransport, Method};
use super::session::Session;
use super::types::{
    AnswerData, Credentials, LoginResponse, QaPairs, RegisterRequest, ScoreData, SelectFileRequest, TuningProgress,
    User, WorkStatusResponse,
};
use crate::config::ClientConfig;

/// Failure of a single API operation.
///
/// `Display` is the localized message meant for the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never reached the server.
    #[error("{message}")]
    Transport { message: String, reason: String },
    /// The request body could not be serialized.
    #[error("{message}")]
    Encode { message: String, reason: String },
    /// The response body did not match the expected schema.
    #[error("{message}")]
    Decode { message: String, reason: String },
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Diagnostic detail for logs; the user-facing text is `Display`.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Server { message, .. } => message,
            Self::Transport { reason, .. } | Self::Encode { reason, .. } | Self::Decode { reason, .. } => reason,
        }
    }
}

/// Static description of one remote operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Call {
    pub method: Method,
    pub path: &'static str,
    /// Whether the bearer token is attached.
    pub authorized: bool,
    /// Localized message used when the server gives no `detail`.
    pub fallback: &'static str,
}

impl Call {
    const fn get(path: &'static str, fallback: &'static str) -> Self {
        Self { method: Method::Get, path, authorized: true, fallback }
    }

    const fn post(path: &'static str, fallback: &'static str) -> Self {
        Self { method: Method::Post, path, authorized: true, fallback }
    }

    const fn anonymous(self) -> Self {
        Self { authorized: false, ..self }
    }
}

pub(crate) const LOGIN: Call = Call::post("/auth/login", "登录失败，请检查用户名和密码").anonymous();
pub(crate) const REGISTER: Call = Call::post("/auth/register", "注册失败，请稍后重试").anonymous();
pub(crate) const CHECK_AUTH: Call = Call::get("/auth/check", "验证失败");
pub(crate) const CURRENT_USER: Call = Call::get("/auth/me", "获取用户信息失败");
pub(crate) const WORK_STATUS: Call = Call::get("/work/status", "获取工作状态失败");
pub(crate) const FILE_PATHS: Call = Call::get("/files/paths", "获取文件列表失败");
pub(crate) const SELECT_FILE: Call = Call::post("/files/select", "选择文件失败");
pub(crate) const CURRENT_QA: Call = Call::get("/qa/current", "获取题目失败");
pub(crate) const CURRENT_ANSWER: Call = Call::get("/answers/current", "获取答案失败");
pub(crate) const CURRENT_SCORE: Call = Call::get("/scores/current", "获取评分失败");
pub(crate) const TUNING_PROGRESS: Call = Call::get("/tuning/progress", "获取微调进度失败");

/// Cloneable handle shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    session: Session,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base", &self.config.api_base)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn HttpTransport>, session: Session) -> Self {
        Self { config, transport, session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `POST /auth/login`. The caller decides whether to store the token.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "登录失败，请检查用户名和密码".
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = encode(&LOGIN, credentials)?;
        self.request(&LOGIN, Some(body)).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "注册失败，请稍后重试".
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = encode(&REGISTER, request)?;
        self.execute(&REGISTER, Some(body)).await
    }

    /// `GET /auth/check`; succeeds while the stored token is valid.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "验证失败".
    pub async fn check_auth(&self) -> Result<(), ApiError> {
        self.execute(&CHECK_AUTH, None).await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取用户信息失败".
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.request(&CURRENT_USER, None).await
    }

    /// `GET /work/status`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取工作状态失败".
    pub async fn fetch_work_status(&self) -> Result<WorkStatusResponse, ApiError> {
        self.request(&WORK_STATUS, None).await
    }

    /// `GET /files/paths`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取文件列表失败".
    pub async fn list_file_paths(&self) -> Result<Vec<String>, ApiError> {
        self.request(&FILE_PATHS, None).await
    }

    /// `POST /files/select`; starts the pipeline on the chosen input.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "选择文件失败".
    pub async fn select_file_path(&self, file_path: &str) -> Result<(), ApiError> {
        let body = encode(&SELECT_FILE, &SelectFileRequest { file_path: file_path.to_owned() })?;
        self.execute(&SELECT_FILE, Some(body)).await
    }

    /// `GET /qa/current`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取题目失败".
    pub async fn fetch_current_qa_pairs(&self) -> Result<QaPairs, ApiError> {
        self.request(&CURRENT_QA, None).await
    }

    /// `GET /answers/current`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取答案失败".
    pub async fn fetch_current_answer(&self) -> Result<AnswerData, ApiError> {
        self.request(&CURRENT_ANSWER, None).await
    }

    /// `GET /scores/current`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取评分失败".
    pub async fn fetch_current_score(&self) -> Result<ScoreData, ApiError> {
        self.request(&CURRENT_SCORE, None).await
    }

    /// `GET /tuning/progress`.
    ///
    /// # Errors
    ///
    /// Returns the server's detail or "获取微调进度失败".
    pub async fn fetch_tuning_progress(&self) -> Result<TuningProgress, ApiError> {
        self.request(&TUNING_PROGRESS, None).await
    }

    async fn request<T: DeserializeOwned>(&self, call: &Call, body: Option<serde_json::Value>) -> Result<T, ApiError> {
        let text = self.send(call, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            message: call.fallback.to_owned(),
            reason: format!("{} {}: {e}", method_name(call.method), call.path),
        })
    }

    async fn execute(&self, call: &Call, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        self.send(call, body).await.map(|_| ())
    }

    async fn send(&self, call: &Call, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        let bearer = if call.authorized { self.session.token() } else { None };
        let request = HttpRequest { method: call.method, url: self.config.endpoint(call.path), bearer, body };
        let response = self.transport.send(request).await.map_err(|e| ApiError::Transport {
            message: call.fallback.to_owned(),
            reason: e.to_string(),
        })?;
        if response.status == 401 {
            self.session.expire();
        }
        if !response.is_success() {
            log::debug!("{} {} -> {}", method_name(call.method), call.path, response.status);
            return Err(ApiError::Server {
                status: response.status,
                message: error_message(&response.body, call.fallback),
            });
        }
        Ok(response.body)
    }
}

fn encode<T: Serialize>(call: &Call, value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode { message: call.fallback.to_owned(), reason: e.to_string() })
}

/// Prefer the server's `detail` string; fall back to the localized message.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
    }
}
