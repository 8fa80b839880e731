//! Project gallery: one card per entry in `PROJECTS`, in declaration order.

use leptos::prelude::*;

use crate::components::external_link::{ExternalLink, LinkStyle};
use crate::components::section_title::SectionTitle;
use crate::content::{PROJECTS, Project};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-card__screen">
                <div class="project-card__glow"></div>
                <div class="project-card__dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>

            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>

                <div class="project-card__tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>

                <div class="project-card__actions">
                    <ExternalLink href=project.live_url variant=LinkStyle::Primary>
                        "Live"
                    </ExternalLink>
                    <ExternalLink href=project.repo_url variant=LinkStyle::Secondary>
                        "Code"
                    </ExternalLink>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container section__inner">
                <SectionTitle
                    kicker="Selected work"
                    title="Projects that show range"
                    subtitle="A few builds that demonstrate UI structure, polish, and real features."
                />
                <div class="project-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
