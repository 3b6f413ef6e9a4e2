//! Shared UI components for the portfolio page.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod theme;

pub use footer::Footer;
pub use layout::Layout;
pub use nav::Nav;
pub use projects::ProjectGrid;
pub use skills::SkillList;
pub use theme::ThemeToggle;
