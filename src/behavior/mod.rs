//! Page behavior as plain state objects.
//!
//! Nothing in here touches the browser. The `app` module owns the DOM glue
//! and drives these types from events, which keeps every rule testable on
//! the host.

pub mod anchor;
pub mod filter;
pub mod header;
pub mod menu;
pub mod reveal;
pub mod skills;
pub mod theme;
pub mod throttle;

pub use filter::{CardStep, CardView, FilterButton, ProjectCard, ProjectFilter};
pub use header::{HeaderScroll, HeaderStyle};
pub use menu::MenuState;
pub use reveal::RevealTracker;
pub use skills::{SkillBlock, SkillEntry};
pub use theme::{MemoryPreferenceStore, PreferenceStore, Theme, ThemePreference, ThemeState};
pub use throttle::{Invocation, Throttle};
