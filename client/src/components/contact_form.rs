//! Contact section.
//!
//! The form relies on native browser validation (`required`, `type="email"`).
//! Submission is suppressed; delivery through Formspree is not wired yet.

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::content::{CONTACT_FIELDS, ContactField, ContactInputKind};

#[component]
fn ContactInput(field: ContactField) -> impl IntoView {
    match field.kind {
        ContactInputKind::MultiLine { rows } => view! {
            <textarea
                class="field focus-ring"
                name=field.name
                placeholder=field.placeholder
                aria-label=field.placeholder
                rows=rows.to_string()
                required=field.required
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                class="field focus-ring"
                name=field.name
                type=kind.input_type()
                placeholder=field.placeholder
                aria-label=field.placeholder
                autocomplete=field.autocomplete
                required=field.required
            />
        }
        .into_any(),
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        log::info!("contact form submitted; delivery not configured");
    };

    view! {
        <section id="contact" class="section section--ruled">
            <div class="container section__inner">
                <SectionTitle kicker="Get in touch" title="Contact" subtitle="Send a message and I’ll reply."/>

                <form class="contact-form" on:submit=on_submit>
                    {CONTACT_FIELDS.iter().map(|field| view! { <ContactInput field=*field/> }).collect_view()}
                    <button type="submit" class="button button--solid focus-ring">
                        "Send"
                    </button>
                    <p class="contact-form__note">"(This form will be wired to Formspree soon.)"</p>
                </form>
            </div>
        </section>
    }
}
