//! Trainer roster cards.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::IconName;
use crate::content::trainers::{TRAINERS, Trainer};
use crate::content::navigation::section_id;

#[component]
fn TrainerCard(trainer: &'static Trainer) -> impl IntoView {
    let socials = [
        (IconName::Instagram, "Instagram", trainer.social.instagram),
        (IconName::Twitter, "Twitter", trainer.social.twitter),
        (IconName::Linkedin, "LinkedIn", trainer.social.linkedin),
    ];

    view! {
        <article class="trainer-card">
            <div class="trainer-card__media">
                <img src=trainer.image alt=trainer.name loading="lazy"/>
                <div class="trainer-card__socials">
                    {socials
                        .into_iter()
                        .map(|(icon, label, href)| {
                            view! {
                                <a class="icon-button" href=href aria-label=label>
                                    <Icon name=icon/>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="trainer-card__body">
                <span class="trainer-card__specialty">{trainer.specialty}</span>
                <h3 class="card__title">{trainer.name}</h3>
                <p class="trainer-card__bio">{trainer.bio}</p>
            </div>
        </article>
    }
}

#[component]
pub fn Trainers() -> impl IntoView {
    view! {
        <section id=section_id::TRAINERS class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Expert Team"
                    title="MEET YOUR"
                    accent="TRAINERS"
                    blurb="Our certified professionals are dedicated to helping you achieve your fitness goals."
                />
                <div class="grid grid--4">
                    {TRAINERS.iter().map(|trainer| view! { <TrainerCard trainer=trainer/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
