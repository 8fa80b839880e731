//! Reusable page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static content tables from `content`. Only
//! `site_header` holds interaction state (the mobile disclosure menu).

pub mod about;
pub mod contact_form;
pub mod external_link;
pub mod hero;
pub mod project_gallery;
pub mod section_title;
pub mod site_footer;
pub mod site_header;
pub mod skills_wall;
