//! Site footer: brand blurb, quick links, opening hours, newsletter signup.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::Icon;
use crate::content::IconName;
use crate::content::brand;
use crate::content::contact::OPENING_HOURS;
use crate::content::navigation::{LEGAL_LINKS, QUICK_LINKS, SOCIAL_LINKS};
use crate::state::newsletter::NewsletterState;

#[component]
fn NewsletterForm() -> impl IntoView {
    let newsletter = RwSignal::new(NewsletterState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let subscribed = newsletter.try_update(NewsletterState::subscribe).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        {
            if subscribed {
                log::info!("newsletter subscription recorded");
            }
        }
    };

    move || {
        if newsletter.with(|n| n.subscribed) {
            view! {
                <div class="newsletter__done">
                    <p class="text-primary">"Thanks for subscribing!"</p>
                    <p class="newsletter__note">"Check your inbox for confirmation."</p>
                </div>
            }
                .into_any()
        } else {
            view! {
                <form class="newsletter__form" on:submit=on_submit>
                    <div class="newsletter__row">
                        <input
                            class="input"
                            type="email"
                            placeholder="Enter your email"
                            aria-label="Email address"
                            required=true
                            prop:value=move || newsletter.with(|n| n.email.clone())
                            on:input=move |ev| newsletter.update(|n| n.set_email(event_target_value(&ev)))
                        />
                        <button class="newsletter__submit" type="submit" aria-label="Subscribe">
                            <Icon name=IconName::Send/>
                        </button>
                    </div>
                    <p class="newsletter__note">"By subscribing, you agree to our Privacy Policy."</p>
                </form>
            }
                .into_any()
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <a href="#home" class="brand">
                        <span class="brand__mark">
                            <Icon name=IconName::Dumbbell/>
                        </span>
                        <span class="brand__name">{brand::NAME}</span>
                    </a>
                    <p class="footer__tagline">{brand::TAGLINE}</p>
                    <div class="footer__socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a class="icon-button" href=social.href aria-label=social.label>
                                        <Icon name=social.icon/>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h4 class="footer__heading">"QUICK LINKS"</h4>
                    <ul class="footer__list">
                        {QUICK_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a class="footer__link" href=link.href>
                                            <Icon name=IconName::ArrowRight/>
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"OPENING HOURS"</h4>
                    <ul class="footer__list">
                        {OPENING_HOURS
                            .iter()
                            .map(|row| {
                                view! {
                                    <li class="footer__hours">
                                        <span>{row.day}</span>
                                        <span class="text-primary">{row.hours}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="footer__access">
                        <span class="text-primary">"24/7 Access"</span>
                        <br/>
                        <span>"For all members"</span>
                    </p>
                </div>

                <div>
                    <h4 class="footer__heading">"NEWSLETTER"</h4>
                    <p class="footer__tagline">"Subscribe for fitness tips, exclusive offers, and motivation."</p>
                    <NewsletterForm/>
                </div>
            </div>

            <div class="container footer__bottom">
                <p>{brand::COPYRIGHT}</p>
                <nav class="footer__legal">
                    {LEGAL_LINKS.iter().map(|link| view! { <a href=link.href>{link.label}</a> }).collect_view()}
                </nav>
            </div>
        </footer>
    }
}
