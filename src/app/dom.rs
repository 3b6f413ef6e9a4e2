//! Browser plumbing shared by the behavior hooks (wasm only).
//!
//! Listener and timer guards own their closures and detach/cancel on drop,
//! so storing a guard in a hook ties the callback's lifetime to the app.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{BehaviorError, Result};

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window()?.document()
}

/// Milliseconds since epoch, for throttling.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Add or remove a class on `<body>`. Silently skipped if there is no body.
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        tracing::debug!(class, "no <body>, skipping class toggle");
        return;
    };
    let result = if on {
        body.class_list().add_1(class)
    } else {
        body.class_list().remove_1(class)
    };
    if let Err(e) = result {
        tracing::warn!("{}", BehaviorError::from(e));
    }
}

/// Event listener that is removed when dropped.
pub struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: &web_sys::EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// One-shot timer that is cancelled when dropped.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(delay_ms: f64, callback: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let window = window().ok_or_else(|| BehaviorError::Browser("no window".into()))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.max(0.0).round() as i32,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
