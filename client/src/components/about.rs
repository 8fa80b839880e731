//! About section: photo placeholder and background blurb.

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container section__inner about">
                <div class="about__photo-card">
                    <div class="about__photo"></div>
                    <p class="about__caption">"Drop in a headshot or a “workspace” photo later."</p>
                </div>

                <div>
                    <SectionTitle kicker="Background" title="About me"/>
                    <p class="about__text">
                        "I’m a developer with a fitness-coach background, so I’m big on discipline, "
                        "consistency, and shipping. I care about clean design, snappy UX, and building "
                        "projects that feel real (not just tutorials)."
                    </p>
                    <p class="about__text">
                        "I’m aiming for front-end roles where I can own UI, build reusable components, "
                        "and deliver polished experiences."
                    </p>
                </div>
            </div>
        </section>
    }
}
