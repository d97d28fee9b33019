//! Carousel wiring shared by the gallery slider and testimonials.
//!
//! SYSTEM CONTEXT
//! ==============
//! `responsive_carousel` owns the browser side effects (viewport width,
//! resize listener, autoplay loop); `CarouselControls` renders the prev/next
//! buttons and pagination dots over the same signal.

#[cfg(test)]
#[path = "carousel_controls_test.rs"]
mod carousel_controls_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconName;
use crate::state::carousel::{Breakpoint, Carousel};

/// Create a carousel signal at `base` slides per view, matching the server
/// render. In the browser it refits to the viewport once hydrated, follows
/// window resizes and autoplays every `autoplay` until unmounted.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn responsive_carousel(
    len: usize,
    base: usize,
    breakpoints: &'static [Breakpoint],
    autoplay: Duration,
) -> RwSignal<Carousel> {
    let carousel = RwSignal::new(Carousel::new(len, base));

    #[cfg(feature = "hydrate")]
    {
        let fit_viewport = move || {
            if let Some(width) = crate::util::viewport::width() {
                carousel.update(|c| c.fit_width(width, base, breakpoints));
            }
        };
        // Effects run after hydration, so the first client render keeps the
        // server's layout.
        Effect::new(fit_viewport);
        let resize = window_event_listener(leptos::ev::resize, move |_| fit_viewport());

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(autoplay).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                carousel.update(Carousel::autoplay_tick);
            }
        });
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            resize.remove();
        });
    }

    carousel
}

/// Inline style for one slide at the current per-view width.
#[must_use]
pub fn slide_style(carousel: &Carousel) -> String {
    #[allow(clippy::cast_precision_loss)]
    let basis = 100.0 / carousel.per_view() as f64;
    format!("flex: 0 0 {basis:.4}%")
}

/// Inline style translating the slide track to the current index.
#[must_use]
pub fn track_style(carousel: &Carousel) -> String {
    format!("transform: translateX(-{:.4}%)", carousel.offset_percent())
}

#[component]
pub fn CarouselControls(
    carousel: RwSignal<Carousel>,
    #[prop(optional)] arrows: bool,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="carousel__controls">
            <Show when=move || arrows>
                <button
                    class="carousel__arrow carousel__arrow--prev"
                    aria-label=format!("Previous {label}")
                    disabled=move || !carousel.get().can_prev()
                    on:click=move |_| carousel.update(Carousel::prev)
                >
                    <Icon name=IconName::ChevronLeft/>
                </button>
                <button
                    class="carousel__arrow carousel__arrow--next"
                    aria-label=format!("Next {label}")
                    disabled=move || !carousel.get().can_next()
                    on:click=move |_| carousel.update(Carousel::next)
                >
                    <Icon name=IconName::ChevronRight/>
                </button>
            </Show>
            <div class="carousel__dots" role="tablist">
                {move || {
                    let state = carousel.get();
                    (0..state.page_count())
                        .map(|page| {
                            let active = page == state.index();
                            let dot_class = if active { "carousel__dot carousel__dot--active" } else { "carousel__dot" };
                            view! {
                                <button
                                    class=dot_class
                                    role="tab"
                                    aria-selected=active.to_string()
                                    aria-label=format!("Go to {label} {}", page + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(page))
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
