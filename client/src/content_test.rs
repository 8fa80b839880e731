use super::*;

use std::collections::HashSet;

#[test]
fn nav_links_cover_the_four_section_anchors_in_order() {
    let anchors: Vec<_> = NAV_LINKS.iter().map(|link| link.target_anchor).collect();
    assert_eq!(anchors, ["#projects", "#skills", "#about", "#contact"]);
}

#[test]
fn nav_link_labels_match_sections() {
    let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
    assert_eq!(labels, ["Projects", "Skills", "About", "Contact"]);
}

#[test]
fn page_anchors_are_fragment_ids() {
    assert_eq!(TOP_ANCHOR, "#top");
    assert_eq!(MAIN_ANCHOR, "#main");
}

#[test]
fn project_titles_are_unique() {
    let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(titles.len(), PROJECTS.len());
}

#[test]
fn projects_keep_declaration_order() {
    assert_eq!(PROJECTS[0].title, "M1llion Fitness");
    assert_eq!(PROJECTS[2].title, "Networking Labs");
    assert_eq!(PROJECTS[0].tags, ["React", "Tailwind", "Formspree"]);
}

#[test]
fn every_project_has_tags_and_links() {
    for project in PROJECTS {
        assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        assert!(!project.live_url.is_empty());
        assert!(!project.repo_url.is_empty());
    }
}

#[test]
fn skills_keep_declaration_order() {
    assert_eq!(SKILLS.first(), Some(&"React"));
    assert_eq!(SKILLS.last(), Some(&"Figma"));
    assert_eq!(SKILLS.len(), 11);
}

#[test]
fn profile_links_are_github_linkedin_resume() {
    let labels: Vec<_> = PROFILE_LINKS.iter().map(|link| link.label).collect();
    assert_eq!(labels, ["GitHub", "LinkedIn", "Resume"]);
}

#[test]
fn hero_facts_have_labels_and_values() {
    assert_eq!(HERO_FACTS.len(), 3);
    assert!(HERO_FACTS.iter().all(|f| !f.label.is_empty() && !f.value.is_empty()));
}

// =============================================================
// Contact form fields
// =============================================================

#[test]
fn contact_name_and_email_are_required() {
    let required: Vec<_> = CONTACT_FIELDS.iter().filter(|f| f.required).map(|f| f.name).collect();
    assert_eq!(required, ["name", "email"]);
}

#[test]
fn contact_email_uses_native_email_validation() {
    let email = CONTACT_FIELDS.iter().find(|f| f.name == "email").unwrap();
    assert_eq!(email.kind.input_type(), Some("email"));
    assert_eq!(email.autocomplete, Some("email"));
}

#[test]
fn contact_message_is_optional_textarea() {
    let message = CONTACT_FIELDS.iter().find(|f| f.name == "message").unwrap();
    assert!(!message.required);
    assert_eq!(message.kind, ContactInputKind::MultiLine { rows: 5 });
    assert_eq!(message.kind.input_type(), None);
}

#[test]
fn contact_field_names_are_unique() {
    let names: HashSet<_> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names.len(), CONTACT_FIELDS.len());
}
