//! Layout component wrapping the page with header, nav and footer.

use dioxus::prelude::*;

use super::footer::Footer;
use super::nav::Nav;
use crate::app::header::use_header_scroll;
use crate::app::reveal::use_reveal_on_scroll;
use crate::behavior::menu::MenuState;
use crate::config::{BehaviorConfig, SiteConfig};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    pub site: SiteConfig,
    /// Page content
    pub children: Element,
}

/// Main layout component. Owns the menu and header scroll state.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let config = use_context::<BehaviorConfig>();
    let menu = use_signal(MenuState::default);
    let style = use_header_scroll(&config);
    use_reveal_on_scroll(&config);

    // The scroll lock lives on <body>, outside the component tree
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        crate::app::dom::set_body_class("no-scroll", menu.read().locks_scroll());
    });

    let full_title = format!("{} | {}", props.site.owner, props.site.tagline);
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
        }
        document::Link { rel: "stylesheet", href: "/style.css" }

        Nav { owner: props.site.owner.clone(), menu, style }
        main { "data-version": "{version}", {props.children} }
        Footer { owner: props.site.owner.clone() }
    }
}
