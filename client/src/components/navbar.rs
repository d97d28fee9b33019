//! Fixed top navigation with a collapsible mobile menu.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconName;
use crate::content::brand;
use crate::content::navigation::NAV_LINKS;
use crate::state::menu::MenuState;
use crate::util::whatsapp;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let is_open = move || menu.get().open;

    view! {
        <nav class="navbar">
            <div class="container navbar__inner">
                <a href="#home" class="brand">
                    <span class="brand__mark">
                        <Icon name=IconName::Dumbbell/>
                    </span>
                    <span class="brand__name">{brand::WORDMARK}</span>
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="navbar__link">{link.label}</a> })
                        .collect_view()}
                </div>

                <a class="btn btn--primary navbar__cta" target="_blank" rel="noopener" href=whatsapp::join_link()>
                    "Join Now"
                </a>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || {
                        let name = if is_open() { IconName::Close } else { IconName::Menu };
                        view! { <Icon name=name/> }
                    }}
                </button>
            </div>

            <Show when=is_open>
                <div class="navbar__mobile">
                    <div class="container navbar__mobile-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="navbar__mobile-link"
                                        on:click=move |_| menu.update(MenuState::select_link)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            class="btn btn--primary navbar__mobile-cta"
                            target="_blank"
                            rel="noopener"
                            href=whatsapp::join_link()
                            on:click=move |_| menu.update(MenuState::select_link)
                        >
                            "Join Now"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
