//! Header scroll-style switcher.

use crate::config::BehaviorConfig;

/// Style hooks for the page header after a scroll evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    /// `scrolled` class present
    pub scrolled: bool,
    /// `hidden` class present
    pub hidden: bool,
}

/// Tracks the last scroll offset to derive scroll direction.
#[derive(Clone, Debug)]
pub struct HeaderScroll {
    scrolled_threshold: f64,
    hide_threshold: f64,
    last_offset: f64,
    hidden: bool,
}

impl HeaderScroll {
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            scrolled_threshold: config.header_scrolled_threshold,
            hide_threshold: config.header_hide_threshold,
            last_offset: 0.0,
            hidden: false,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Evaluate a new vertical offset and record it as the previous one.
    pub fn on_scroll(&mut self, offset: f64) -> HeaderStyle {
        if offset > self.hide_threshold {
            if offset > self.last_offset {
                self.hidden = true;
            } else if offset < self.last_offset {
                self.hidden = false;
            }
        } else {
            self.hidden = false;
        }
        self.last_offset = offset;

        HeaderStyle {
            scrolled: offset > self.scrolled_threshold,
            hidden: self.hidden,
        }
    }
}
