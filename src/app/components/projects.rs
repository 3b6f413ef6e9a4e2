//! Project grid with category filter buttons.

use dioxus::prelude::*;

use crate::behavior::filter::{CardStep, FilterButton, ProjectCard, ProjectFilter};
use crate::config::BehaviorConfig;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectGridProps {
    pub filters: Vec<FilterButton>,
    pub projects: Vec<ProjectCard>,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let config = use_context::<BehaviorConfig>();
    let mut filter = use_signal(|| {
        ProjectFilter::new(props.filters.clone(), props.projects.clone(), &config)
    });
    let timers = use_card_timers();

    let state = filter.read();

    rsx! {
        div { class: "filter-buttons",
            for (i, button) in state.buttons().iter().enumerate() {
                button {
                    key: "{button.value}",
                    class: button_class(state.is_active(i)),
                    "data-filter": "{button.value}",
                    onclick: {
                        let value = button.value.clone();
                        let timers = timers.clone();
                        move |_| {
                            let selected = filter.write().select(&value);
                            match selected {
                                Ok(steps) => schedule_steps(filter, steps, &timers),
                                Err(e) => tracing::warn!("{}", e),
                            }
                        }
                    },
                    "{button.label}"
                }
            }
        }
        div { class: "projects-grid",
            for (project, view) in state.projects().iter().zip(state.views().iter()) {
                div {
                    key: "{project.title}",
                    class: "project-card",
                    "data-category": "{project.category}",
                    style: view.style(),
                    h3 { "{project.title}" }
                    p { "{project.description}" }
                    span { class: "category", "{project.category}" }
                }
            }
        }
    }
}

fn button_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

#[cfg(target_arch = "wasm32")]
type CardTimers = std::rc::Rc<std::cell::RefCell<Vec<crate::app::dom::Timeout>>>;

#[cfg(not(target_arch = "wasm32"))]
type CardTimers = ();

#[cfg(target_arch = "wasm32")]
fn use_card_timers() -> CardTimers {
    use_hook(|| std::rc::Rc::new(std::cell::RefCell::new(Vec::new())))
}

#[cfg(not(target_arch = "wasm32"))]
fn use_card_timers() -> CardTimers {}

/// Arm one timer per delayed card step. Timers from the previous selection
/// are cancelled; any that already fired are rejected by generation.
#[cfg(target_arch = "wasm32")]
fn schedule_steps(filter: Signal<ProjectFilter>, steps: Vec<CardStep>, timers: &CardTimers) {
    use crate::app::dom::Timeout;

    let mut armed = timers.borrow_mut();
    armed.clear();
    for step in steps {
        let mut filter = filter;
        match Timeout::new(f64::from(step.delay_ms), move || {
            filter.write().apply(step);
        }) {
            Ok(timer) => armed.push(timer),
            Err(e) => {
                tracing::warn!("Failed to arm card timer, applying now: {}", e);
                filter.write().apply(step);
            }
        }
    }
}

/// No timers outside the browser: apply steps in delay order.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_steps(mut filter: Signal<ProjectFilter>, mut steps: Vec<CardStep>, _timers: &CardTimers) {
    steps.sort_by_key(|s| s.delay_ms);
    for step in steps {
        filter.write().apply(step);
    }
}
