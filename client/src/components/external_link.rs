//! Links that open outside the page in a new browsing context.

use leptos::prelude::*;

#[cfg(test)]
#[path = "external_link_test.rs"]
mod external_link_test;

/// Visual treatment of an external link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    /// Rounded profile chip in the hero.
    Pill,
    /// Filled project action ("Live").
    Primary,
    /// Outlined project action ("Code").
    Secondary,
}

impl LinkStyle {
    pub fn class(self) -> &'static str {
        match self {
            Self::Pill => "pill-link focus-ring",
            Self::Primary => "button button--solid button--small focus-ring",
            Self::Secondary => "button button--ghost button--small focus-ring",
        }
    }
}

#[component]
pub fn ExternalLink(href: &'static str, variant: LinkStyle, children: Children) -> impl IntoView {
    view! {
        <a href=href class=variant.class() target="_blank" rel="noreferrer">
            {children()}
        </a>
    }
}
