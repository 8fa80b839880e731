//! Footer with copyright line and back-to-top link.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, TOP_ANCHOR};
use crate::util::clock::{copyright_line, current_year};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let copyright = copyright_line(current_year(), OWNER_NAME);

    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <span>{copyright}</span>
                <a class="site-footer__top focus-ring" href=TOP_ANCHOR>
                    "Back to top"
                </a>
            </div>
        </footer>
    }
}
