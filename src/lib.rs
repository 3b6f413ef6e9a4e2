//! Portfolio Page
//!
//! Interactive behavior for a single-page personal portfolio:
//! - Mobile navigation menu with body scroll lock
//! - Header styling and auto-hide driven by (throttled) scrolling
//! - Dark/light theme with a persisted choice and system fallback
//! - Skill list and filterable project grid
//! - Smooth scrolling to in-page anchors
//! - One-shot fade-in of sections entering the viewport
//!
//! `behavior` holds the rules as plain state objects; `app` is the Dioxus
//! UI that drives them from browser events.

pub mod app;
pub mod behavior;
pub mod config;
pub mod error;

pub use error::{BehaviorError, Result};
