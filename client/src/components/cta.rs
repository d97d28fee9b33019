//! Closing call-to-action banner.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconName;

const TRUST_POINTS: &[&str] = &["No commitment required", "Cancel anytime", "First week free"];

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="card cta">
                    <div class="cta__icon">
                        <Icon name=IconName::Zap/>
                    </div>
                    <h2 class="cta__title">
                        "READY TO"
                        <br/>
                        <span class="text-gradient">"TRANSFORM?"</span>
                    </h2>
                    <p class="cta__lead">
                        "Join thousands who have already transformed their lives. Your journey to a stronger, "
                        "healthier you starts with a single step."
                    </p>
                    <div class="cta__actions">
                        <a href="#contact" class="btn btn--primary">
                            "Start Free Trial"
                            <Icon name=IconName::ArrowRight/>
                        </a>
                        <a href="#pricing" class="btn btn--outline">"View Pricing"</a>
                    </div>
                    <ul class="cta__trust">
                        {TRUST_POINTS.iter().map(|&point| view! { <li>"✓ " {point}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
