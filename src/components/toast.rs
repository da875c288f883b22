//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and providers report outcomes through a [`Notifier`] from context;
//! the [`Toasts`] stack mounted by the app renders them and each notice
//! removes itself after the configured lifetime.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};
use crate::util::task;

/// Context handle for pushing notices.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<NoticeState>,
    lifetime: Duration,
}

impl Notifier {
    #[must_use]
    pub fn new(notices: RwSignal<NoticeState>, lifetime: Duration) -> Self {
        Self { notices, lifetime }
    }

    #[must_use]
    pub fn notices(self) -> RwSignal<NoticeState> {
        self.notices
    }

    pub fn success(self, text: impl Into<String>) {
        self.push(NoticeLevel::Success, text.into());
    }

    pub fn error(self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text.into());
    }

    pub fn info(self, text: impl Into<String>) {
        self.push(NoticeLevel::Info, text.into());
    }

    fn push(self, level: NoticeLevel, text: String) {
        let mut id = 0;
        self.notices.update(|state| id = state.push(level, text));
        let notices = self.notices;
        let lifetime = self.lifetime;
        task::spawn(async move {
            task::sleep(lifetime).await;
            notices.update(|state| {
                state.dismiss(id);
            });
        });
    }
}

/// Fixed stack of active notices; clicking one dismisses it early.
#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<Notifier>().notices();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class=notice.level.class()
                                on:click=move |_| {
                                    notices.update(|state| {
                                        state.dismiss(id);
                                    });
                                }
                            >
                                {notice.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
