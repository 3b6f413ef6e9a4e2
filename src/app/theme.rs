//! Theme management with localStorage persistence.
//!
//! Provides a theme context around [`ThemeState`]. In the browser the
//! preference lives in `localStorage` and the system signal comes from
//! `prefers-color-scheme`; elsewhere an in-memory store is used.

use dioxus::prelude::*;

use crate::behavior::theme::{Theme, ThemeState};
use crate::config::BehaviorConfig;

#[cfg(target_arch = "wasm32")]
pub use wasm::LocalStorageStore as PageStore;

#[cfg(not(target_arch = "wasm32"))]
pub use crate::behavior::theme::MemoryPreferenceStore as PageStore;

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: Signal<ThemeState<PageStore>>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        self.state.read().current()
    }

    /// Flip the theme and persist the explicit choice
    pub fn toggle(&self) {
        let mut state = self.state;
        let theme = state.write().toggle();

        #[cfg(target_arch = "wasm32")]
        wasm::apply_theme_to_dom(theme);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = theme;
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider(config: &BehaviorConfig) {
    let key = config.theme_storage_key.clone();
    let state = use_signal(move || ThemeState::new(page_store(&key), system_prefers_dark()));

    let ctx = ThemeContext { state };
    use_context_provider(|| ctx);

    // Client-side only: apply the resolved theme and follow the system signal
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let guard: Rc<RefCell<Option<super::dom::Listener>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            wasm::apply_theme_to_dom(state.peek().current());

            if guard.borrow().is_some() {
                return;
            }
            match wasm::watch_system_theme(state) {
                Ok(Some(listener)) => *guard.borrow_mut() = Some(listener),
                Ok(None) => tracing::debug!("matchMedia unavailable, theme will not follow system"),
                Err(e) => tracing::warn!("Failed to watch system theme: {}", e),
            }
        });
    }
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(target_arch = "wasm32")]
fn page_store(key: &str) -> PageStore {
    wasm::LocalStorageStore::new(key)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_store(_key: &str) -> PageStore {
    PageStore::default()
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    wasm::dark_media_query().is_some_and(|mql| mql.matches())
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
mod wasm {
    use dioxus::prelude::*;

    use crate::app::dom::{self, Listener};
    use crate::behavior::theme::{
        MemoryPreferenceStore, PreferenceStore, Theme, ThemePreference, ThemeState,
    };
    use crate::error::Result;

    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    /// `localStorage`-backed preference. Falls back to memory when storage
    /// is blocked (private browsing, sandboxed iframes).
    pub struct LocalStorageStore {
        key: String,
        fallback: MemoryPreferenceStore,
    }

    impl LocalStorageStore {
        pub fn new(key: &str) -> Self {
            Self {
                key: key.to_string(),
                fallback: MemoryPreferenceStore::default(),
            }
        }

        fn storage() -> Option<web_sys::Storage> {
            dom::window()?.local_storage().ok().flatten()
        }
    }

    impl PreferenceStore for LocalStorageStore {
        fn load(&self) -> ThemePreference {
            match Self::storage() {
                Some(storage) => {
                    ThemePreference::parse(storage.get_item(&self.key).ok().flatten().as_deref())
                }
                None => self.fallback.load(),
            }
        }

        fn save(&mut self, preference: ThemePreference) {
            let Some(storage) = Self::storage() else {
                self.fallback.save(preference);
                return;
            };
            let result = match preference.as_stored() {
                Some(value) => storage.set_item(&self.key, value),
                None => storage.remove_item(&self.key),
            };
            if let Err(e) = result {
                tracing::warn!("Failed to persist theme preference: {:?}", e);
                self.fallback.save(preference);
            }
        }
    }

    pub fn dark_media_query() -> Option<web_sys::MediaQueryList> {
        dom::window()?.match_media(DARK_QUERY).ok().flatten()
    }

    /// The toggle glyph is rendered from the signal; only `<body>` lives
    /// outside the component tree.
    pub fn apply_theme_to_dom(theme: Theme) {
        dom::set_body_class("dark-mode", theme.is_dark());
    }

    /// Re-resolve the theme whenever the system color scheme changes.
    pub fn watch_system_theme(
        mut state: Signal<ThemeState<LocalStorageStore>>,
    ) -> Result<Option<Listener>> {
        let Some(mql) = dark_media_query() else {
            return Ok(None);
        };
        let query = mql.clone();
        let listener = Listener::new(&mql, "change", move |_| {
            let theme = state.write().system_changed(query.matches());
            apply_theme_to_dom(theme);
        })?;
        Ok(Some(listener))
    }
}
