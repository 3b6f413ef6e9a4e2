//! Page footer with the current year.

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer(owner: String) -> Element {
    // Stamped once per mount
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer { class: "footer",
            div { class: "container",
                p {
                    "© "
                    span { id: "year", "{year}" }
                    " {owner}. All rights reserved."
                }
            }
        }
    }
}
