//! Dioxus application entry point.
//!
//! [`App`] is the browser root. [`render_page`] renders the same tree
//! through SSR for the native snapshot binary and tests.

use dioxus::prelude::*;

pub mod anchors;
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod header;
pub mod pages;
pub mod reveal;
pub mod theme;

use crate::config::PageConfig;
use pages::HomePage;
use theme::use_theme_provider;

/// Root app component for the browser build
#[component]
pub fn App() -> Element {
    rsx! {
        Root { config: PageConfig::default() }
    }
}

/// Installs the shared contexts, then renders the page.
#[component]
pub fn Root(config: PageConfig) -> Element {
    // Behavior timings for every hook and component below
    let behavior = config.behavior.clone();
    use_context_provider(|| behavior);

    // Initialize theme context at app root (handles localStorage + body class)
    use_theme_provider(&config.behavior);

    rsx! {
        HomePage { config }
    }
}

/// Render the full page to HTML without a browser.
pub fn render_page(config: PageConfig) -> String {
    dioxus::ssr::render_element(rsx! {
        Root { config }
    })
}
