//! Hero section: availability aside, headline, calls to action, profile links.

use leptos::prelude::*;

use crate::components::external_link::{ExternalLink, LinkStyle};
use crate::content::{HERO_FACTS, PROFILE_LINKS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="section hero">
            <div class="container hero__outer">
                <div class="hero__frame">
                    <div class="hero__glow hero__glow--top"></div>
                    <div class="hero__glow hero__glow--bottom"></div>

                    <div class="hero__grid">
                        <aside class="hero__aside">
                            <p class="eyebrow">"Availability"</p>
                            <p class="hero__availability">"Open to Front-End roles"</p>
                            <div class="hero__facts">
                                {HERO_FACTS
                                    .iter()
                                    .map(|fact| {
                                        view! {
                                            <div class="hero-fact">
                                                <p class="hero-fact__label">{fact.label}</p>
                                                <p class="hero-fact__value">{fact.value}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </aside>

                        <div class="hero__copy">
                            <p class="hero__role">"Web Developer • Fitness Coach • Builder"</p>
                            <h1 class="hero__headline">
                                "I craft "
                                <span class="hero__headline-accent">"fast, clean"</span>
                                " front-ends that feel premium."
                            </h1>
                            <p class="hero__pitch">
                                "I build React + Tailwind projects with real-world features: responsive layouts, "
                                "accessible UI, and integrations. I care about speed, detail, and shipping."
                            </p>

                            <div class="hero__actions">
                                <a href="#projects" class="button button--solid focus-ring">"See my work"</a>
                                <a href="#contact" class="button button--ghost focus-ring">"Let’s talk"</a>
                            </div>

                            <div class="hero__profiles">
                                {PROFILE_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <ExternalLink href=link.href variant=LinkStyle::Pill>
                                                {link.label}
                                            </ExternalLink>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
