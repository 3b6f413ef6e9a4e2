//! Header navigation with the mobile menu toggle.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::anchors::AnchorLink;
use crate::app::header::header_class;
use crate::behavior::header::HeaderStyle;
use crate::behavior::menu::MenuState;

/// In-page sections linked from the navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// Owner name shown as the logo
    pub owner: String,
    pub menu: Signal<MenuState>,
    pub style: Signal<HeaderStyle>,
}

/// Fixed page header: logo, nav links, theme toggle and mobile trigger.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu = props.menu;
    let class = header_class(*props.style.read());
    let state = *menu.read();

    rsx! {
        header { class: "{class}",
            div { class: "container header-inner",
                AnchorLink { href: "#home", class: "logo", "{props.owner}" }
                nav { class: state.nav_class(),
                    ul {
                        for (href, label) in NAV_LINKS.iter() {
                            li { key: "{href}",
                                AnchorLink {
                                    href: *href,
                                    onselect: move |_| {
                                        menu.write().link_selected();
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
                ThemeToggle {}
                div {
                    class: "mobile-menu",
                    onclick: move |_| menu.write().toggle(),
                    i { class: state.icon_class() }
                }
            }
        }
    }
}
