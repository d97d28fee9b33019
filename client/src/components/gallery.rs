//! Facility tour: autoplaying slider, thumbnail grid and lightbox.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::carousel_controls::{CarouselControls, responsive_carousel, slide_style, track_style};
use crate::components::lightbox::LightboxOverlay;
use crate::components::section_header::SectionHeader;
use crate::content::gallery::GALLERY_IMAGES;
use crate::state::carousel::Breakpoint;
use crate::state::lightbox::Lightbox;
use crate::content::navigation::section_id;

const SLIDER_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { min_width: 640, per_view: 2 },
    Breakpoint { min_width: 1024, per_view: 3 },
];

const SLIDER_AUTOPLAY: Duration = Duration::from_millis(5000);

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(GALLERY_IMAGES));
    let slider = responsive_carousel(GALLERY_IMAGES.len(), 1, SLIDER_BREAKPOINTS, SLIDER_AUTOPLAY);
    let open = move |index: usize| {
        lightbox.update(|l| {
            l.select(index);
        });
    };

    view! {
        <section id=section_id::GALLERY class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Our Facility"
                    title="TAKE A"
                    accent="TOUR"
                    blurb="Explore our state-of-the-art facilities designed for your ultimate fitness experience."
                />

                <div class="carousel gallery-slider">
                    <div class="carousel__viewport">
                        <div class="carousel__track" style=move || track_style(&slider.get())>
                            {GALLERY_IMAGES
                                .iter()
                                .enumerate()
                                .map(|(index, image)| {
                                    view! {
                                        <figure
                                            class="carousel__slide gallery-slide"
                                            style=move || slide_style(&slider.get())
                                            on:click=move |_| open(index)
                                        >
                                            <img src=image.url alt=image.title loading="lazy"/>
                                            <figcaption class="gallery-slide__caption">{image.title}</figcaption>
                                        </figure>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <CarouselControls carousel=slider arrows=true label="slide"/>
                </div>

                <div class="gallery-grid">
                    {GALLERY_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(index, image)| {
                            view! {
                                <button
                                    class="gallery-grid__item"
                                    aria-label=format!("View {}", image.title)
                                    on:click=move |_| open(index)
                                >
                                    <img src=image.url alt=image.title loading="lazy"/>
                                    <span class="gallery-grid__caption">{image.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <LightboxOverlay lightbox=lightbox/>
        </section>
    }
}
