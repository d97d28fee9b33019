//! Full-height hero banner with headline, calls to action and stats.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconName;
use crate::content::hero::HERO_STATS;
use crate::content::navigation::section_id;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=section_id::HOME class="hero">
            <div class="hero__backdrop"></div>
            <div class="container hero__content">
                <div class="hero__badge">
                    <span class="hero__pulse"></span>
                    <span>"Now Open 24/7 — Transform Anytime"</span>
                </div>

                <h1 class="hero__title">
                    "TRANSFORM YOUR"
                    <br/>
                    <span class="text-gradient">"BODY & MIND"</span>
                </h1>

                <p class="hero__lead">
                    "Join the elite fitness community. World-class equipment, expert trainers, "
                    "and a transformative environment designed to push your limits."
                </p>

                <div class="hero__actions">
                    <a href="#pricing" class="btn btn--primary">
                        "Start Your Journey"
                        <Icon name=IconName::ArrowRight/>
                    </a>
                    <a href="#gallery" class="btn btn--outline">
                        <Icon name=IconName::Play/>
                        "Take a Tour"
                    </a>
                </div>

                <dl class="hero__stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero__stat">
                                    <dt class="hero__stat-value">{stat.value}</dt>
                                    <dd class="hero__stat-label">{stat.label}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </div>
        </section>
    }
}
