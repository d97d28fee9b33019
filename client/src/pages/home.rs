//! The single marketing page: every section in fixed vertical order.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{
    contact::Contact, cta::Cta, features::Features, footer::Footer, gallery::Gallery, hero::Hero, navbar::Navbar,
    pricing::Pricing, testimonials::Testimonials, trainers::Trainers,
};
use crate::content::brand;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Transform Your Body & Mind", brand::NAME)/>
        <Meta name="description" content=brand::TAGLINE/>
        <main class="page">
            <Navbar/>
            <Hero/>
            <Features/>
            <Pricing/>
            <Trainers/>
            <Gallery/>
            <Testimonials/>
            <Contact/>
            <Cta/>
            <Footer/>
        </main>
    }
}
