//! "Why choose us" feature grid.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::features::{FEATURES, Feature};
use crate::content::navigation::section_id;

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <article class="card feature-card">
            <div class="feature-card__icon">
                <Icon name=feature.icon/>
            </div>
            <h3 class="card__title">{feature.title}</h3>
            <p class="card__text">{feature.description}</p>
        </article>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=section_id::FEATURES class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Why Choose Us"
                    title="EVERYTHING YOU NEED TO"
                    accent="SUCCEED"
                    blurb="We provide all the tools, guidance, and motivation you need to achieve your fitness goals."
                />
                <div class="grid grid--3">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
