use leptos::prelude::*;

/// Shown when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>
                <a href="/">"Back to monitoring"</a>
            </p>
        </div>
    }
}
