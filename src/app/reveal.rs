//! Fade-in of `.fade-in` elements as they scroll into view.

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

use crate::config::BehaviorConfig;

/// Class marking elements for the entry animation.
pub const FADE_IN: &str = "fade-in";
/// Class applied once an element has entered the viewport.
pub const ANIMATE: &str = "animate";

/// Observe every `.fade-in` element once the page is mounted.
pub fn use_reveal_on_scroll(config: &BehaviorConfig) {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let threshold = config.reveal_threshold;
        let guard: Rc<RefCell<Option<wasm::ObserverGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            match wasm::observe(threshold) {
                Ok(Some(observer)) => *guard.borrow_mut() = Some(observer),
                Ok(None) => tracing::debug!("nothing to reveal"),
                Err(e) => tracing::warn!("Failed to observe fade-in elements: {}", e),
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{ANIMATE, FADE_IN};
    use crate::app::dom;
    use crate::behavior::reveal::RevealTracker;
    use crate::error::{BehaviorError, Result};

    const KEY_ATTR: &str = "data-reveal-key";

    /// Disconnects the observer on drop
    pub struct ObserverGuard {
        observer: web_sys::IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    }

    impl Drop for ObserverGuard {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn observe(threshold: f64) -> Result<Option<ObserverGuard>> {
        let Some(document) = dom::document() else {
            return Ok(None);
        };
        let nodes = document.query_selector_all(&format!(".{}", FADE_IN))?;
        if nodes.length() == 0 {
            return Ok(None);
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(threshold)));
        let callback = {
            let tracker = tracker.clone();
            Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        let target = entry.target();
                        let Some(key) = target.get_attribute(KEY_ATTR) else {
                            continue;
                        };
                        let fire = tracker.borrow_mut().on_intersection(
                            &key,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        );
                        if fire {
                            if let Err(e) = target.class_list().add_1(ANIMATE) {
                                tracing::warn!("{}", BehaviorError::from(e));
                            }
                            observer.unobserve(&target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>)
        };

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        for i in 0..nodes.length() {
            let Some(element) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            let key = i.to_string();
            element.set_attribute(KEY_ATTR, &key)?;
            tracker.borrow_mut().observe(key);
            observer.observe(&element);
        }

        Ok(Some(ObserverGuard {
            observer,
            _callback: callback,
        }))
    }
}
