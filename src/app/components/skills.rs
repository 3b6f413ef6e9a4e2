//! Skill list renderer.

use dioxus::prelude::*;

use crate::behavior::skills::{skill_blocks, SkillEntry};

/// Renders one block per skill into `.skills-container`, in list order.
/// The blocks are derived from props, so re-rendering never duplicates them.
#[component]
pub fn SkillList(skills: Vec<SkillEntry>) -> Element {
    let blocks = skill_blocks(&skills);

    rsx! {
        div { class: "skills-container",
            for (i, block) in blocks.into_iter().enumerate() {
                div { key: "{i}", class: "skill-item",
                    i { class: "{block.icon_class}" }
                    h3 { "{block.name}" }
                    div { class: "progress-bar",
                        div { class: "progress", style: "width: {block.progress_width}" }
                    }
                    span { class: "percentage", "{block.label}" }
                }
            }
        }
    }
}
