//! Skills chip wall.

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::content::SKILLS;

#[component]
pub fn SkillsWall() -> impl IntoView {
    view! {
        <section id="skills" class="section section--banded">
            <div class="container section__inner">
                <SectionTitle kicker="Toolbox" title="Skills" subtitle="What I’m comfortable shipping with."/>
                <div class="chip-wall">
                    {SKILLS.iter().map(|skill| view! { <span class="chip">{*skill}</span> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
