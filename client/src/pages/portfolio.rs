//! Portfolio page: skip link, header, content sections, footer.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::project_gallery::ProjectGallery;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::skills_wall::SkillsWall;
use crate::content::MAIN_ANCHOR;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="page">
            <a href=MAIN_ANCHOR class="skip-link focus-ring">
                "Skip to content"
            </a>

            <SiteHeader/>

            <main id="main">
                <Hero/>
                <ProjectGallery/>
                <SkillsWall/>
                <About/>
                <ContactForm/>
            </main>

            <SiteFooter/>
        </div>
    }
}
