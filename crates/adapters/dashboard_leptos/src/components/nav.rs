use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <span class="brand">"hostwatch"</span>
            <ul>
                <li><a href="/">"Monitoring"</a></li>
                <li><a href="/hosts">"Hosts"</a></li>
            </ul>
        </nav>
    }
}
