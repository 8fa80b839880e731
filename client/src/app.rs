//! Root application component and SSR document shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{OWNER_DOMAIN_SUFFIX, OWNER_NAME};
use crate::pages::portfolio::PortfolioPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Document title, e.g. `Sergio Padilla.dev`.
pub fn site_title() -> String {
    format!("{OWNER_NAME}{OWNER_DOMAIN_SUFFIX}")
}

/// Root application component.
///
/// The site is one page; the router exists so SSR can enumerate it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=site_title()/>
        <Meta name="description" content="Front-end developer portfolio: projects, skills, and contact."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
