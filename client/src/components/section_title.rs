//! Kicker / heading / subtitle block shared by content sections.

use leptos::prelude::*;

#[cfg(test)]
#[path = "section_title_test.rs"]
mod section_title_test;

/// Subtitle to render, if any. Empty strings render nothing.
fn visible_text(text: Option<&'static str>) -> Option<&'static str> {
    text.filter(|t| !t.trim().is_empty())
}

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] kicker: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-title">
            {visible_text(kicker).map(|kicker| view! { <p class="section-title__kicker">{kicker}</p> })}
            <h2 class="section-title__title">{title}</h2>
            {visible_text(subtitle).map(|subtitle| view! { <p class="section-title__subtitle">{subtitle}</p> })}
        </div>
    }
}
