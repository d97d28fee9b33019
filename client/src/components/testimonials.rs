//! Member testimonials carousel.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::carousel_controls::{CarouselControls, responsive_carousel, slide_style, track_style};
use crate::components::icon::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::IconName;
use crate::content::testimonials::{TESTIMONIALS, Testimonial};
use crate::state::carousel::{Breakpoint, Carousel};
use crate::content::navigation::section_id;

const TESTIMONIAL_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { min_width: 768, per_view: 2 },
    Breakpoint { min_width: 1024, per_view: 3 },
];

const TESTIMONIAL_AUTOPLAY: Duration = Duration::from_millis(6000);

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, carousel: RwSignal<Carousel>) -> impl IntoView {
    view! {
        <figure class="carousel__slide" style=move || slide_style(&carousel.get())>
            <div class="card testimonial-card">
                <Icon name=IconName::Quote extra_class="testimonial-card__quote"/>
                <div class="testimonial-card__rating" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                    {(0..testimonial.rating).map(|_| view! { <Icon name=IconName::Star extra_class="icon--filled"/> }).collect_view()}
                </div>
                <blockquote class="testimonial-card__text">"\u{201c}" {testimonial.text} "\u{201d}"</blockquote>
                <figcaption class="testimonial-card__author">
                    <img src=testimonial.image alt=testimonial.name loading="lazy"/>
                    <div>
                        <h4 class="testimonial-card__name">{testimonial.name}</h4>
                        <p class="testimonial-card__role">{testimonial.role}</p>
                    </div>
                </figcaption>
            </div>
        </figure>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = responsive_carousel(TESTIMONIALS.len(), 1, TESTIMONIAL_BREAKPOINTS, TESTIMONIAL_AUTOPLAY);

    view! {
        <section id=section_id::TESTIMONIALS class="section section--tinted">
            <div class="container">
                <SectionHeader
                    eyebrow="Testimonials"
                    title="SUCCESS"
                    accent="STORIES"
                    blurb="Hear from our members who transformed their lives with 11 Fitness."
                />
                <div class="carousel">
                    <div class="carousel__viewport">
                        <div class="carousel__track" style=move || track_style(&carousel.get())>
                            {TESTIMONIALS
                                .iter()
                                .map(|testimonial| view! { <TestimonialCard testimonial=testimonial carousel=carousel/> })
                                .collect_view()}
                        </div>
                    </div>
                    <CarouselControls carousel=carousel label="testimonial"/>
                </div>
            </div>
        </section>
    }
}
