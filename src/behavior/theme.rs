//! Dark/light theme resolution with a persisted explicit choice.
//!
//! Resolution order: persisted `enabled` → dark, persisted `disabled` →
//! light, nothing persisted → follow the environment's color scheme.

/// Resolved visual theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Body class for this theme (empty for light)
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }

    /// Glyph shown on the toggle: the theme you would switch to.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Explicit user choice as stored in the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Enabled,
    Disabled,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Parse a stored value. Unrecognised values count as unset.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("enabled") => ThemePreference::Enabled,
            Some("disabled") => ThemePreference::Disabled,
            None => ThemePreference::Unset,
            Some(other) => {
                tracing::warn!(value = other, "ignoring unrecognised theme preference");
                ThemePreference::Unset
            }
        }
    }

    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            ThemePreference::Enabled => Some("enabled"),
            ThemePreference::Disabled => Some("disabled"),
            ThemePreference::Unset => None,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemePreference::Enabled,
            Theme::Light => ThemePreference::Disabled,
        }
    }
}

/// Persistence seam for the theme flag.
///
/// The browser implementation wraps `localStorage`; tests use
/// [`MemoryPreferenceStore`].
pub trait PreferenceStore {
    fn load(&self) -> ThemePreference;
    fn save(&mut self, preference: ThemePreference);
}

/// In-memory store, also used when `localStorage` is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }

    /// Raw stored value, as the browser would see it.
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Remove the stored value, as if cleared from dev tools.
    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> ThemePreference {
        ThemePreference::parse(self.value.as_deref())
    }

    fn save(&mut self, preference: ThemePreference) {
        self.value = preference.as_stored().map(str::to_string);
    }
}

/// Theme controller. Owns the store so the displayed theme and the
/// persisted flag only change together.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the initial theme from the store and the environment signal.
    pub fn new(store: S, system_dark: bool) -> Self {
        let current = match store.load() {
            ThemePreference::Enabled => Theme::Dark,
            ThemePreference::Disabled => Theme::Light,
            ThemePreference::Unset => Theme::from_dark(system_dark),
        };
        tracing::debug!(?current, "theme resolved");
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// User clicked the toggle: flip and persist the explicit choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        self.store.save(ThemePreference::for_theme(self.current));
        tracing::debug!(current = ?self.current, "theme toggled");
        self.current
    }

    /// Environment color scheme changed. Only applies while no explicit
    /// choice is persisted. Returns the theme to display.
    pub fn system_changed(&mut self, system_dark: bool) -> Theme {
        if self.store.load() == ThemePreference::Unset {
            self.current = Theme::from_dark(system_dark);
            tracing::debug!(current = ?self.current, "theme follows system");
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_choice_wins_over_system() {
        let state = ThemeState::new(MemoryPreferenceStore::with_value("enabled"), false);
        assert_eq!(state.current(), Theme::Dark);

        let state = ThemeState::new(MemoryPreferenceStore::with_value("disabled"), true);
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn unset_follows_system() {
        let state = ThemeState::new(MemoryPreferenceStore::default(), true);
        assert_eq!(state.current(), Theme::Dark);
        assert_eq!(state.store().raw(), None);
    }

    #[test]
    fn garbage_value_counts_as_unset() {
        let state = ThemeState::new(MemoryPreferenceStore::with_value("maybe"), true);
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_explicit_choice() {
        let mut state = ThemeState::new(MemoryPreferenceStore::default(), false);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.store().raw(), Some("enabled"));
        assert_eq!(state.current().body_class(), "dark-mode");
        assert_eq!(state.current().toggle_glyph(), "☀️");
    }

    #[test]
    fn toggling_twice_restores_theme_and_flag() {
        let mut state = ThemeState::new(MemoryPreferenceStore::with_value("disabled"), true);
        let before = (state.current(), state.store().raw().map(str::to_string));

        state.toggle();
        state.toggle();

        assert_eq!(
            (state.current(), state.store().raw().map(str::to_string)),
            before
        );
    }

    #[test]
    fn system_changes_ignored_after_explicit_choice() {
        let mut state = ThemeState::new(MemoryPreferenceStore::default(), false);
        assert_eq!(state.system_changed(true), Theme::Dark);

        state.toggle();
        assert_eq!(state.current(), Theme::Light);
        assert_eq!(state.system_changed(true), Theme::Light);
        assert_eq!(state.system_changed(false), Theme::Light);
    }

    #[test]
    fn clearing_flag_resumes_following_system() {
        let mut state = ThemeState::new(MemoryPreferenceStore::default(), false);
        state.toggle();
        state.store_mut().clear();

        assert_eq!(state.system_changed(false), Theme::Light);
        assert_eq!(state.system_changed(true), Theme::Dark);
    }
}
