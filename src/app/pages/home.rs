//! The single portfolio page.
//!
//! Every section carries `fade-in` so it animates the first time it
//! scrolls into view.

use dioxus::prelude::*;

use crate::app::anchors::AnchorLink;
use crate::app::components::{Layout, ProjectGrid, SkillList};
use crate::behavior::filter::{default_filters, default_projects};
use crate::config::PageConfig;

#[component]
pub fn HomePage(config: PageConfig) -> Element {
    let site = config.site.clone();

    rsx! {
        Layout { site: site.clone(),
            section { id: "home", class: "hero",
                div { class: "container fade-in",
                    h1 { "Hi, I'm " span { "{site.owner}" } }
                    p { class: "tagline", "{site.tagline}" }
                    AnchorLink { href: "#projects", class: "btn", "View my work" }
                }
            }
            section { id: "about", class: "section",
                div { class: "container fade-in",
                    h2 { class: "section-title", "About Me" }
                    p {
                        "I build fast, accessible websites and care about the details "
                        "between design and code."
                    }
                }
            }
            section { id: "skills", class: "section",
                div { class: "container fade-in",
                    h2 { class: "section-title", "Skills" }
                    SkillList { skills: config.skills.clone() }
                }
            }
            section { id: "projects", class: "section",
                div { class: "container fade-in",
                    h2 { class: "section-title", "Projects" }
                    ProjectGrid { filters: default_filters(), projects: default_projects() }
                }
            }
            section { id: "contact", class: "section",
                div { class: "container fade-in",
                    h2 { class: "section-title", "Contact" }
                    p { "Have a project in mind? Let's talk." }
                    AnchorLink { href: "#home", class: "btn", "Back to top" }
                }
            }
        }
    }
}
