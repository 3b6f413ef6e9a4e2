//! Mobile navigation menu state.

/// Open/closed state of the mobile navigation panel.
///
/// The nav container, the trigger icon and the body scroll lock are all
/// derived from this one flag, so they cannot drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel (trigger click).
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "mobile menu toggled");
    }

    /// A navigation link was selected. Returns true if the menu closed.
    pub fn link_selected(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        tracing::debug!("mobile menu closed by link");
        true
    }

    /// Class for the nav container.
    pub fn nav_class(&self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }

    /// Font Awesome glyph for the trigger icon.
    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }

    /// Whether the body should carry the `no-scroll` lock.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }
}
