//! Eyebrow + headline + blurb block shared by the content sections.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    accent: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <header class="section-header">
            <span class="section-header__eyebrow">{eyebrow}</span>
            <h2 class="section-header__title">
                {title} " " <span class="text-gradient">{accent}</span>
            </h2>
            <p class="section-header__blurb">{blurb}</p>
        </header>
    }
}
