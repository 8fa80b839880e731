//! Static page content.
//!
//! Every table here is `'static` and immutable; components only read them.
//! Placeholder URLs (`#`) are kept until real profile/project links exist.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Site owner shown in the brand link, title, and footer.
pub const OWNER_NAME: &str = "Sergio Padilla";
pub const OWNER_DOMAIN_SUFFIX: &str = ".dev";

/// A project card in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
}

/// In-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target_anchor: &'static str,
}

/// External profile opened in a new browsing context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Label/value card in the hero's availability aside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroFact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactInputKind {
    Text,
    Email,
    MultiLine { rows: u8 },
}

/// One input of the contact form. Validation is left to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: ContactInputKind,
    pub autocomplete: Option<&'static str>,
    pub required: bool,
}

impl ContactInputKind {
    /// `type` attribute for `<input>`; `None` for `<textarea>`.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::MultiLine { .. } => None,
        }
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Projects", target_anchor: "#projects" },
    NavLink { label: "Skills", target_anchor: "#skills" },
    NavLink { label: "About", target_anchor: "#about" },
    NavLink { label: "Contact", target_anchor: "#contact" },
];

pub const TOP_ANCHOR: &str = "#top";
pub const MAIN_ANCHOR: &str = "#main";

pub const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink { label: "GitHub", href: "#" },
    ProfileLink { label: "LinkedIn", href: "#" },
    ProfileLink { label: "Resume", href: "#" },
];

pub const HERO_FACTS: &[HeroFact] = &[
    HeroFact { label: "Primary stack", value: "React • Tailwind • Vite" },
    HeroFact { label: "Strength", value: "UI polish + shipping" },
    HeroFact { label: "Background", value: "Fitness Coach → Developer" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "M1llion Fitness",
        description: "Landing page for a fitness brand with coaching sections, Instagram embed, and polished responsive layout.",
        tags: &["React", "Tailwind", "Formspree"],
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Restaurant Page",
        description: "Multi-section UI project showcasing layout, navigation, and reusable components.",
        tags: &["JavaScript", "CSS", "UI"],
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Networking Labs",
        description: "Course projects demonstrating IPv4/IPv6 concepts and practical configuration work.",
        tags: &["Networking", "IPv4", "IPv6"],
        live_url: "#",
        repo_url: "#",
    },
];

pub const SKILLS: &[&str] = &[
    "React",
    "Tailwind",
    "JavaScript",
    "HTML/CSS",
    "Responsive UI",
    "Accessibility",
    "Git/GitHub",
    "Vite",
    "APIs",
    "SQL (coursework)",
    "Figma",
];

pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField {
        name: "name",
        placeholder: "Your name",
        kind: ContactInputKind::Text,
        autocomplete: Some("name"),
        required: true,
    },
    ContactField {
        name: "email",
        placeholder: "Email",
        kind: ContactInputKind::Email,
        autocomplete: Some("email"),
        required: true,
    },
    ContactField {
        name: "message",
        placeholder: "Message",
        kind: ContactInputKind::MultiLine { rows: 5 },
        autocomplete: None,
        required: false,
    },
];
