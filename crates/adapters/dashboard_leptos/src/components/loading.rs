use leptos::prelude::*;

/// Spinner shown while the first response of a page is pending.
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}
