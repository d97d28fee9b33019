//! Fallback for unknown paths. The site is a single page, so point back home.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1 class="not-found__title">"404"</h1>
            <p class="card__text">"This page doesn't exist."</p>
            <a href="/" class="btn btn--primary">"Back to home"</a>
        </main>
    }
}
