//! In-page anchor resolution for smooth scrolling.

/// Fragment id an href points at, if it is an in-page link.
///
/// `#about` → `about`. A bare `#` and external links are not handled.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts an element just below the fixed
/// header.
///
/// `element_top` is relative to the viewport (as returned by
/// `getBoundingClientRect`), `scroll_y` is the current window offset.
pub fn scroll_destination(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}
