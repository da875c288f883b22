//! Shared pipeline status published by the work-status provider.
//!
//! DESIGN
//! ======
//! The server owns the pipeline stage; the client only mirrors the latest
//! successful `GET /work/status`. A failed poll keeps the previous value and
//! reports a message for the toast layer.

#[cfg(test)]
#[path = "work_test.rs"]
mod work_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{StatusTone, WorkStatus, WorkStatusResponse};

/// Tag label used when the server sends no display name.
pub const UNKNOWN_STATUS_LABEL: &str = "未知状态";

/// Last known pipeline status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkState {
    pub status: Option<WorkStatus>,
    pub status_name: String,
    /// True until the first fetch settles, successfully or not.
    pub loading: bool,
}

impl Default for WorkState {
    fn default() -> Self {
        Self { status: None, status_name: String::new(), loading: true }
    }
}

/// Result of folding one fetch into [`WorkState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusOutcome {
    /// Whether observers need to be notified.
    pub changed: bool,
    /// User-facing message when the fetch failed.
    pub error: Option<String>,
}

impl WorkState {
    /// Fold a fetch result into the state.
    ///
    /// Identical snapshots leave `changed` false so subscribers do not
    /// re-render.
    pub fn apply(&mut self, result: Result<WorkStatusResponse, ApiError>) -> StatusOutcome {
        match result {
            Ok(response) => {
                let next = Self { status: Some(response.status), status_name: response.status_name, loading: false };
                let changed = *self != next;
                if changed {
                    *self = next;
                }
                StatusOutcome { changed, error: None }
            }
            Err(e) => {
                let changed = self.loading;
                self.loading = false;
                StatusOutcome { changed, error: Some(e.to_string()) }
            }
        }
    }

    /// Text for the status tag.
    #[must_use]
    pub fn label(&self) -> &str {
        let name = self.status_name.trim();
        if name.is_empty() { UNKNOWN_STATUS_LABEL } else { name }
    }

    /// Highlighted step in the step bar; the first step before any status arrives.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.status.map_or(0, WorkStatus::step_index)
    }

    #[must_use]
    pub fn tone(&self) -> StatusTone {
        self.status.map(WorkStatus::tone).unwrap_or_default()
    }
}

/// Context handle exposed by `WorkProvider`.
#[derive(Clone, Copy)]
pub struct WorkContext {
    pub state: RwSignal<WorkState>,
    /// Trigger one immediate status fetch.
    pub refresh: Callback<()>,
}
