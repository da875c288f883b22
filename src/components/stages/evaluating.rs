//! Evaluation stage. The server exposes no progress endpoint for it.

use leptos::prelude::*;

use super::StageHeader;
use crate::components::spinner::Spinner;
use crate::state::stage::StageView;

#[component]
pub fn EvaluatingStage() -> impl IntoView {
    view! {
        <section class="stage stage--evaluating">
            <Spinner />
            <StageHeader view_kind=StageView::Evaluating />
        </section>
    }
}
