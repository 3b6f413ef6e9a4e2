//! Smooth scrolling for in-page anchor links.

use dioxus::prelude::*;

use crate::behavior::anchor::fragment_target;
use crate::config::BehaviorConfig;

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// Link target, e.g. `#projects`
    #[props(into)]
    pub href: String,
    #[props(default, into)]
    pub class: String,
    /// Called after the link is followed (used to close the mobile menu)
    #[props(default)]
    pub onselect: Option<EventHandler<()>>,
    pub children: Element,
}

/// `<a>` that smooth-scrolls to its fragment target instead of jumping.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let config = use_context::<BehaviorConfig>();
    let href = props.href.clone();
    let onselect = props.onselect;

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |evt: MouseEvent| {
                if let Some(id) = fragment_target(&href) {
                    if smooth_scroll_to(id, config.anchor_offset) {
                        evt.prevent_default();
                    }
                }
                if let Some(handler) = onselect {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Scroll the window to the element with `id`. Returns false (leaving the
/// default navigation alone) when there is no such element.
#[cfg(target_arch = "wasm32")]
pub fn smooth_scroll_to(id: &str, header_offset: f64) -> bool {
    use crate::app::dom;
    use crate::behavior::anchor::scroll_destination;

    let Some(window) = dom::window() else {
        return false;
    };
    let Some(target) = dom::document().and_then(|d| d.get_element_by_id(id)) else {
        tracing::debug!(id, "anchor target missing");
        return false;
    };

    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(),
        header_offset,
    );
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Without a browser there is nothing to scroll.
#[cfg(not(target_arch = "wasm32"))]
pub fn smooth_scroll_to(_id: &str, _header_offset: f64) -> bool {
    false
}
