//! Idle stage: pick a corpus file and start a run.
//!
//! The file list is fetched once each time the stage becomes active. Starting
//! a run posts the selection and asks the work provider to refresh so the
//! page moves on as soon as the server reports the new stage.

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

use leptos::prelude::*;

use super::{StageHeader, use_stage_active};
use crate::components::spinner::Spinner;
use crate::components::toast::Notifier;
use crate::net::api::ApiClient;
use crate::net::types::WorkStatus;
use crate::state::stage::StageView;
use crate::state::work::WorkContext;
use crate::util::poll::{self, PollSlot};
use crate::util::task;

pub const SELECT_FILE_PROMPT: &str = "请选择文件";
pub const RUN_STARTED_MESSAGE: &str = "已开始处理";
pub const NO_FILES_MESSAGE: &str = "暂无可用文件";

/// Validate the picker value before `POST /files/select`.
///
/// # Errors
///
/// Returns the prompt to show when nothing is selected.
pub fn validate_selection(selected: &str) -> Result<String, &'static str> {
    let path = selected.trim();
    if path.is_empty() { Err(SELECT_FILE_PROMPT) } else { Ok(path.to_owned()) }
}

/// Keep the current selection if it is still offered, else pick the first path.
#[must_use]
pub fn reconcile_selection(current: &str, paths: &[String]) -> String {
    if paths.iter().any(|path| path == current) {
        current.to_owned()
    } else {
        paths.first().cloned().unwrap_or_default()
    }
}

#[component]
pub fn IdleStage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let work = expect_context::<WorkContext>();
    let notifier = expect_context::<Notifier>();
    let active = use_stage_active(WorkStatus::Idle);

    let paths = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let hint = RwSignal::new(None::<&'static str>);

    let slot = PollSlot::default();
    let effect_slot = slot.clone();
    let list_api = api.clone();
    Effect::new(move || {
        effect_slot.sync(active.get(), || {
            loading.set(true);
            let api = list_api.clone();
            poll::once(async move { api.list_file_paths().await }, move |result| {
                match result {
                    Ok(next) => {
                        selected.update(|current| *current = reconcile_selection(current, &next));
                        paths.set(next);
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                loading.set(false);
            })
        });
    });
    on_cleanup(move || slot.clear());

    let on_start = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let path = match validate_selection(&selected.get()) {
            Ok(path) => path,
            Err(prompt) => {
                hint.set(Some(prompt));
                return;
            }
        };
        hint.set(None);
        submitting.set(true);
        let api = api.clone();
        task::spawn(async move {
            match api.select_file_path(&path).await {
                Ok(()) => {
                    notifier.success(RUN_STARTED_MESSAGE);
                    work.refresh.run(());
                }
                Err(e) => notifier.error(e.to_string()),
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="stage stage--idle">
            <StageHeader view_kind=StageView::Idle />
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <form class="file-picker" on:submit=on_start.clone()>
                    <Show
                        when=move || paths.with(|p| !p.is_empty())
                        fallback=|| view! { <p class="file-picker__empty">{NO_FILES_MESSAGE}</p> }
                    >
                        <select
                            class="file-picker__select"
                            prop:value=move || selected.get()
                            on:change=move |ev| selected.set(event_target_value(&ev))
                        >
                            {move || {
                                paths
                                    .get()
                                    .into_iter()
                                    .map(|path| {
                                        let label = path.clone();
                                        view! { <option value=path>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </Show>
                    <Show when=move || hint.get().is_some()>
                        <p class="form-error">{move || hint.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        "开始"
                    </button>
                </form>
            </Show>
        </section>
    }
}
