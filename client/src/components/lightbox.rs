//! Full-screen overlay for a selected gallery image.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconName;
use crate::content::gallery::GalleryImage;
use crate::state::lightbox::Lightbox;
use crate::util::viewport;

/// Renders while an image is selected. Backdrop click, the close button and
/// Escape all clear the selection; clicks on the image do not.
#[component]
pub fn LightboxOverlay(lightbox: RwSignal<Lightbox<GalleryImage>>) -> impl IntoView {
    let close = move || lightbox.update(Lightbox::close);

    Effect::new(move || viewport::set_scroll_locked(lightbox.get().is_open()));

    #[cfg(feature = "hydrate")]
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && lightbox.with_untracked(Lightbox::is_open) {
            ev.prevent_default();
            close();
        }
    });

    on_cleanup(move || {
        viewport::set_scroll_locked(false);
        #[cfg(feature = "hydrate")]
        keydown.remove();
    });

    view! {
        {move || {
            lightbox
                .get()
                .selected_item()
                .map(|image| {
                    view! {
                        <div
                            class="lightbox"
                            role="dialog"
                            aria-modal="true"
                            aria-label=image.title
                            on:click=move |_| close()
                        >
                            <button
                                class="lightbox__close icon-button"
                                aria-label="Close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    close();
                                }
                            >
                                <Icon name=IconName::Close/>
                            </button>
                            <img
                                class="lightbox__image"
                                src=image.url
                                alt=image.title
                                on:click=move |ev| ev.stop_propagation()
                            />
                            <h4 class="lightbox__title">{image.title}</h4>
                        </div>
                    }
                })
        }}
    }
}
