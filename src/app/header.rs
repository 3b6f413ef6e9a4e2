//! Scroll-driven header styling.
//!
//! Scroll events go through a [`Throttle`](crate::behavior::Throttle);
//! the trailing call is delivered by a timer that is re-armed (and the
//! old one cancelled) on every deferred event.

use dioxus::prelude::*;

use crate::behavior::header::HeaderStyle;
use crate::config::BehaviorConfig;

/// Initialize the header scroll listener. Returns the style signal the
/// header renders from.
pub fn use_header_scroll(config: &BehaviorConfig) -> Signal<HeaderStyle> {
    let style = use_signal(|| HeaderStyle {
        scrolled: false,
        hidden: false,
    });

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let config = config.clone();
        let guard: Rc<RefCell<Option<super::dom::Listener>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            match wasm::listen(&config, style) {
                Ok(Some(listener)) => *guard.borrow_mut() = Some(listener),
                Ok(None) => tracing::debug!("no window, header scroll effect disabled"),
                Err(e) => tracing::warn!("Failed to attach scroll listener: {}", e),
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;

    style
}

/// Class list for the `<header>` element.
pub fn header_class(style: HeaderStyle) -> String {
    let mut class = String::from("header");
    if style.scrolled {
        class.push_str(" scrolled");
    }
    if style.hidden {
        class.push_str(" hidden");
    }
    class
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;

    use crate::app::dom::{self, Listener, Timeout};
    use crate::behavior::header::{HeaderScroll, HeaderStyle};
    use crate::behavior::throttle::{Invocation, Throttle};
    use crate::config::BehaviorConfig;
    use crate::error::Result;

    pub fn listen(config: &BehaviorConfig, style: Signal<HeaderStyle>) -> Result<Option<Listener>> {
        let Some(window) = dom::window() else {
            return Ok(None);
        };

        let header = Rc::new(RefCell::new(HeaderScroll::new(config)));
        let throttle = Rc::new(RefCell::new(Throttle::<f64>::new(config.scroll_throttle_ms)));
        let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let listener = Listener::new(&window, "scroll", move |_| {
            let offset = dom::scroll_y();
            let invocation = throttle.borrow_mut().invoke(dom::now_ms(), offset);
            match invocation {
                Invocation::Run(offset) => evaluate(&header, style, offset),
                Invocation::Defer { delay_ms } => {
                    let header = header.clone();
                    let throttle = throttle.clone();
                    let timer = Timeout::new(delay_ms, move || {
                        let pending = throttle.borrow_mut().fire_pending(dom::now_ms());
                        if let Some(offset) = pending {
                            evaluate(&header, style, offset);
                        }
                    });
                    match timer {
                        // Replacing the slot cancels the superseded timer
                        Ok(timer) => *trailing.borrow_mut() = Some(timer),
                        Err(e) => tracing::warn!("Failed to arm scroll timer: {}", e),
                    }
                }
            }
        })?;
        Ok(Some(listener))
    }

    fn evaluate(header: &Rc<RefCell<HeaderScroll>>, mut style: Signal<HeaderStyle>, offset: f64) {
        let next = header.borrow_mut().on_scroll(offset);
        if *style.peek() != next {
            style.set(next);
        }
    }
}
