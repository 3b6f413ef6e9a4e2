//! Project grid filtering with timed show/hide transitions.
//!
//! Selecting a filter applies the immediate half of every transition and
//! returns the delayed half as [`CardStep`]s for the caller to schedule.
//! Each selection bumps a generation counter; steps from an older
//! selection are dropped when they fire.

use crate::config::BehaviorConfig;
use crate::error::{BehaviorError, Result};

/// Filter value that matches every card.
pub const ALL: &str = "all";

/// A filter control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub value: String,
    pub label: String,
}

impl FilterButton {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn default_filters() -> Vec<FilterButton> {
    vec![
        FilterButton::new(ALL, "All"),
        FilterButton::new("web", "Web"),
        FilterButton::new("design", "Design"),
        FilterButton::new("app", "Apps"),
    ]
}

/// A project shown in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl ProjectCard {
    pub fn new(title: &str, description: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL || self.category == filter
    }
}

pub fn default_projects() -> Vec<ProjectCard> {
    vec![
        ProjectCard::new(
            "Storefront",
            "Responsive e-commerce front end with a custom cart.",
            "web",
        ),
        ProjectCard::new(
            "Brand Refresh",
            "Logo, palette and type system for a local bakery.",
            "design",
        ),
        ProjectCard::new(
            "Habit Tracker",
            "Offline-first mobile app for daily routines.",
            "app",
        ),
        ProjectCard::new(
            "Dashboard UI",
            "Component library and layouts for an analytics tool.",
            "design",
        ),
        ProjectCard::new(
            "Blog Engine",
            "Static blog with markdown posts and full-text search.",
            "web",
        ),
    ]
}

/// Inline style state of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    /// `display: block` vs `display: none`
    pub displayed: bool,
    /// opacity 1 and no offset vs opacity 0 and shifted down
    pub revealed: bool,
}

impl Default for CardView {
    fn default() -> Self {
        Self {
            displayed: true,
            revealed: true,
        }
    }
}

impl CardView {
    pub fn opacity(&self) -> f64 {
        if self.revealed {
            1.0
        } else {
            0.0
        }
    }

    pub fn style(&self) -> String {
        let display = if self.displayed { "block" } else { "none" };
        let transform = if self.revealed {
            "translateY(0)"
        } else {
            "translateY(20px)"
        };
        format!(
            "display: {}; opacity: {}; transform: {};",
            display,
            self.opacity(),
            transform
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardChange {
    Reveal,
    Hide,
}

/// Delayed half of a card transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStep {
    pub card: usize,
    pub delay_ms: u32,
    pub generation: u64,
    pub change: CardChange,
}

#[derive(Clone, Debug)]
pub struct ProjectFilter {
    buttons: Vec<FilterButton>,
    projects: Vec<ProjectCard>,
    views: Vec<CardView>,
    active: usize,
    generation: u64,
    reveal_delay_ms: u32,
    hide_delay_ms: u32,
}

impl ProjectFilter {
    /// Build a filter over `projects`. The first button starts active; an
    /// `all` button is prepended if missing.
    pub fn new(
        mut buttons: Vec<FilterButton>,
        projects: Vec<ProjectCard>,
        config: &BehaviorConfig,
    ) -> Self {
        if !buttons.iter().any(|b| b.value == ALL) {
            buttons.insert(0, FilterButton::new(ALL, "All"));
        }
        let active = buttons.iter().position(|b| b.value == ALL).unwrap_or(0);
        let views = vec![CardView::default(); projects.len()];
        Self {
            buttons,
            projects,
            views,
            active,
            generation: 0,
            reveal_delay_ms: config.filter_reveal_delay_ms,
            hide_delay_ms: config.filter_hide_delay_ms,
        }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn projects(&self) -> &[ProjectCard] {
        &self.projects
    }

    pub fn views(&self) -> &[CardView] {
        &self.views
    }

    pub fn active_value(&self) -> &str {
        &self.buttons[self.active].value
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// Activate the control with `value` and start every card's transition.
    pub fn select(&mut self, value: &str) -> Result<Vec<CardStep>> {
        let index = self
            .buttons
            .iter()
            .position(|b| b.value == value)
            .ok_or_else(|| BehaviorError::UnknownFilter(value.to_string()))?;

        self.active = index;
        self.generation += 1;
        tracing::debug!(filter = value, generation = self.generation, "project filter selected");

        let mut steps = Vec::with_capacity(self.projects.len());
        for (card, project) in self.projects.iter().enumerate() {
            let view = &mut self.views[card];
            if project.matches(value) {
                view.displayed = true;
                steps.push(CardStep {
                    card,
                    delay_ms: self.reveal_delay_ms,
                    generation: self.generation,
                    change: CardChange::Reveal,
                });
            } else {
                view.revealed = false;
                steps.push(CardStep {
                    card,
                    delay_ms: self.hide_delay_ms,
                    generation: self.generation,
                    change: CardChange::Hide,
                });
            }
        }
        Ok(steps)
    }

    /// Apply a delayed step. Returns false if a newer selection superseded it.
    pub fn apply(&mut self, step: CardStep) -> bool {
        if step.generation != self.generation {
            return false;
        }
        let Some(view) = self.views.get_mut(step.card) else {
            return false;
        };
        match step.change {
            CardChange::Reveal => view.revealed = true,
            CardChange::Hide => view.displayed = false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ProjectFilter {
        ProjectFilter::new(
            default_filters(),
            default_projects(),
            &BehaviorConfig::default(),
        )
    }

    fn run_all(f: &mut ProjectFilter, mut steps: Vec<CardStep>) {
        steps.sort_by_key(|s| s.delay_ms);
        for step in steps {
            f.apply(step);
        }
    }

    #[test]
    fn starts_with_all_active_and_everything_visible() {
        let f = filter();
        assert_eq!(f.active_value(), ALL);
        assert!(f.views().iter().all(|v| *v == CardView::default()));
    }

    #[test]
    fn exactly_one_active_button() {
        let mut f = filter();
        f.select("design").expect("known filter");
        let active: Vec<_> = (0..f.buttons().len()).filter(|i| f.is_active(*i)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(f.active_value(), "design");
    }

    #[test]
    fn hide_fades_first_then_removes() {
        let mut f = filter();
        let steps = f.select("app").expect("known filter");

        // Storefront is web: faded immediately, still displayed
        assert!(f.views()[0].displayed);
        assert!(!f.views()[0].revealed);

        let hide = steps.iter().find(|s| s.card == 0).copied().expect("step for card 0");
        assert_eq!(hide.change, CardChange::Hide);
        assert_eq!(hide.delay_ms, 300);
        assert!(f.apply(hide));
        assert!(!f.views()[0].displayed);
    }

    #[test]
    fn reveal_displays_first_then_fades_in() {
        let mut f = filter();
        let steps = f.select("app").expect("known filter");
        run_all(&mut f, steps);
        let steps = f.select("web").expect("known filter");

        // Storefront was hidden by "app"; now displayed but not yet opaque
        assert!(f.views()[0].displayed);
        assert!(!f.views()[0].revealed);
        let reveal = steps.iter().find(|s| s.card == 0).copied().expect("step for card 0");
        assert_eq!(reveal.delay_ms, 35);
        f.apply(reveal);
        assert!(f.views()[0].revealed);
    }

    #[test]
    fn stale_steps_are_ignored() {
        let mut f = filter();
        let old = f.select("app").expect("known filter");
        f.select(ALL).expect("known filter");

        for step in old {
            assert!(!f.apply(step));
        }
        assert!(f.views().iter().all(|v| v.displayed));
    }

    #[test]
    fn unknown_filter_leaves_state_alone() {
        let mut f = filter();
        let err = f.select("games").unwrap_err();
        assert!(matches!(err, BehaviorError::UnknownFilter(v) if v == "games"));
        assert_eq!(f.active_value(), ALL);
    }

    #[test]
    fn all_button_is_added_when_missing() {
        let f = ProjectFilter::new(
            vec![FilterButton::new("web", "Web")],
            default_projects(),
            &BehaviorConfig::default(),
        );
        assert_eq!(f.buttons()[0].value, ALL);
        assert_eq!(f.active_value(), ALL);
    }

    #[test]
    fn style_reflects_view() {
        let hidden = CardView {
            displayed: false,
            revealed: false,
        };
        assert_eq!(
            hidden.style(),
            "display: none; opacity: 0; transform: translateY(20px);"
        );
        assert_eq!(
            CardView::default().style(),
            "display: block; opacity: 1; transform: translateY(0);"
        );
    }
}
