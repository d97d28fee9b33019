//! Contact section: info cards, map embed and the free-trial form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form component owns a `ContactForm` signal. Submit validates
//! synchronously through the model; only a validated `ContactSubmission`
//! reaches `net::contact::submit_contact`, and its outcome is folded back
//! into the same signal.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::IconName;
use crate::content::brand;
use crate::content::contact::CONTACT_INFO;
use crate::state::contact::{ContactField, ContactForm};
use crate::content::navigation::section_id;

struct FieldSpec {
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { field: ContactField::Name, label: "Full Name", input_type: "text", placeholder: "John Doe" },
    FieldSpec {
        field: ContactField::Email,
        label: "Email Address",
        input_type: "email",
        placeholder: "john@example.com",
    },
    FieldSpec { field: ContactField::Phone, label: "Phone Number", input_type: "tel", placeholder: "+9100000-0000" },
    FieldSpec {
        field: ContactField::Message,
        label: "Your Goals",
        input_type: "textarea",
        placeholder: "Tell us about your fitness goals...",
    },
];

#[component]
fn FormField(form: RwSignal<ContactForm>, spec: &'static FieldSpec) -> impl IntoView {
    let field = spec.field;
    let id = field.input_id();
    let error = move || form.with(|f| f.error(field).map(ToString::to_string));
    let value = move || form.with(|f| f.value(field).to_owned());
    let input_class = move || if error().is_some() { "input input--invalid" } else { "input" };
    let invalid = move || error().is_some().to_string();
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));

    let control = if spec.input_type == "textarea" {
        view! {
            <textarea
                id=id
                name=id
                rows="4"
                class=input_class
                aria-invalid=invalid
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=spec.input_type
                class=input_class
                aria-invalid=invalid
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=id class="form-field__label">{spec.label}</label>
            {control}
            {move || error().map(|message| view! { <p class="form-field__error" role="alert">{message}</p> })}
        </div>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::contact::submit_contact(&submission).await {
                Ok(()) => {
                    form.update(|f| {
                        f.complete_submit();
                    });
                    log::info!("contact form submitted");
                }
                Err(e) => {
                    log::warn!("contact form submission failed: {e}");
                    form.update(|f| {
                        f.fail_submit(e.to_string());
                    });
                }
            }
        });
    };

    let on_reset = move |_| {
        form.update(|f| {
            f.reset();
        });
    };

    let is_submitting = move || form.with(ContactForm::is_submitting);
    let form_error = move || form.with(|f| f.form_error().map(str::to_owned));

    view! {
        <div class="card contact-form">
            {move || {
                if form.with(ContactForm::is_submitted) {
                    view! {
                        <div class="contact-form__done">
                            <Icon name=IconName::CheckCircle extra_class="contact-form__done-icon"/>
                            <h3 class="contact-form__done-title">"THANK YOU!"</h3>
                            <p class="card__text">
                                "We've received your message and will get back to you within 24 hours."
                            </p>
                            <button class="btn btn--outline" on:click=on_reset>
                                "Send Another Message"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <form class="contact-form__form" novalidate=true on:submit=on_submit>
                            <h3 class="contact-form__title">"BOOK A FREE TRIAL"</h3>
                            {FIELDS.iter().map(|spec| view! { <FormField form=form spec=spec/> }).collect_view()}
                            {move || form_error().map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                            <button class="btn btn--primary btn--block" type="submit" disabled=is_submitting>
                                {move || {
                                    if is_submitting() {
                                        view! { <span class="spinner" aria-label="Sending"></span> }.into_any()
                                    } else {
                                        view! {
                                            <Icon name=IconName::Send/>
                                            "Book Free Trial"
                                        }
                                            .into_any()
                                    }
                                }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=section_id::CONTACT class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Get In Touch"
                    title="START YOUR"
                    accent="JOURNEY"
                    blurb="Ready to transform? Contact us for a free consultation and facility tour."
                />
                <div class="grid grid--2 contact-layout">
                    <div class="contact-info">
                        <div class="grid grid--2">
                            {CONTACT_INFO
                                .iter()
                                .map(|info| {
                                    view! {
                                        <div class="card contact-card">
                                            <div class="feature-card__icon">
                                                <Icon name=info.icon/>
                                            </div>
                                            <h4 class="contact-card__title">{info.title}</h4>
                                            <p class="card__text">{info.content}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="card map">
                            <iframe
                                src=brand::MAP_EMBED_URL
                                title="Gym Location"
                                {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                                referrerpolicy="no-referrer-when-downgrade"
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </div>
                    <ContactFormCard/>
                </div>
            </div>
        </section>
    }
}
