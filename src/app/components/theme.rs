//! Dark mode toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Shows the glyph of the theme a click would switch to.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let current = theme.get();
    let glyph = current.toggle_glyph();
    let label = if current.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        button {
            id: "darkModeToggle",
            class: "theme-toggle",
            "aria-label": label,
            onclick: move |_| theme.toggle(),
            "{glyph}"
        }
    }
}
