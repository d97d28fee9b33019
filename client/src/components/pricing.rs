//! Membership tiers with WhatsApp inquiry links.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::IconName;
use crate::content::pricing::{OFFER_TEXT, PLANS, Plan};
use crate::util::whatsapp;
use crate::content::navigation::section_id;

#[component]
fn PricingCard(plan: &'static Plan) -> impl IntoView {
    let card_class = if plan.popular { "card pricing-card pricing-card--popular" } else { "card pricing-card" };
    let cta_class = if plan.popular { "btn btn--primary pricing-card__cta" } else { "btn btn--outline pricing-card__cta" };

    view! {
        <article class=card_class>
            <Show when=move || plan.popular>
                <span class="pricing-card__badge">"Most Popular"</span>
            </Show>
            <div class="pricing-card__icon">
                <Icon name=plan.icon/>
            </div>
            <h3 class="card__title">{plan.name}</h3>
            <p class="card__text">{plan.description}</p>
            <p class="pricing-card__price">
                <span class="pricing-card__amount text-gradient">{plan.display_price()}</span>
                <span class="pricing-card__period">"/month"</span>
            </p>
            <ul class="pricing-card__perks">
                {plan
                    .perks
                    .iter()
                    .map(|&perk| {
                        view! {
                            <li class="pricing-card__perk">
                                <Icon name=IconName::Check/>
                                <span>{perk}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a class=cta_class target="_blank" rel="noopener" href=whatsapp::plan_inquiry_link(plan)>
                "Get Started"
            </a>
        </article>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id=section_id::PRICING class="section section--tinted">
            <div class="container">
                <SectionHeader
                    eyebrow="Membership Plans"
                    title="INVEST IN YOUR"
                    accent="FUTURE"
                    blurb="Choose the plan that fits your goals. All memberships include a 7-day free trial."
                />
                <div class="offer-banner">
                    <span aria-hidden="true">"🔥"</span>
                    <span>
                        <span class="text-primary">"Limited Offer: "</span>
                        {OFFER_TEXT}
                    </span>
                </div>
                <div class="grid grid--3 pricing-grid">
                    {PLANS.iter().map(|plan| view! { <PricingCard plan=plan/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
