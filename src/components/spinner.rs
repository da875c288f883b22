//! Loading indicator.

use leptos::prelude::*;

/// Spinning ring with an optional caption.
#[component]
pub fn Spinner(#[prop(optional, into)] label: String, #[prop(optional)] full_page: bool) -> impl IntoView {
    let caption = (!label.is_empty()).then(|| view! { <span class="spinner__label">{label}</span> });

    view! {
        <div class="spinner" class:spinner--page=full_page role="status">
            <span class="spinner__ring" aria-hidden="true"></span>
            {caption}
        </div>
    }
}
