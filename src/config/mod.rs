//! Configuration management
//!
//! The browser build always runs with [`PageConfig::default`]. The native
//! snapshot binary layers an optional file (named by
//! `PORTFOLIO_CONFIG`) and `PORTFOLIO__*` environment overrides on top.

use serde::Deserialize;

use crate::behavior::skills::{default_skills, SkillEntry};
use crate::error::{BehaviorError, Result};

/// Timings and thresholds for the page behaviors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Offset past which the header gets `scrolled`
    pub header_scrolled_threshold: f64,
    /// Offset past which the header hides on scroll down
    pub header_hide_threshold: f64,
    /// Minimum time between header evaluations
    pub scroll_throttle_ms: f64,
    /// Fixed header height subtracted from anchor destinations
    pub anchor_offset: f64,
    /// Delay between displaying a card and fading it in
    pub filter_reveal_delay_ms: u32,
    /// Delay between fading a card out and removing it
    pub filter_hide_delay_ms: u32,
    /// Visible fraction that counts as "entered the viewport"
    pub reveal_threshold: f64,
    /// localStorage key for the theme flag
    pub theme_storage_key: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            header_scrolled_threshold: 50.0,
            header_hide_threshold: 100.0,
            scroll_throttle_ms: 100.0,
            anchor_offset: 80.0,
            filter_reveal_delay_ms: 35,
            filter_hide_delay_ms: 300,
            reveal_threshold: 0.1,
            theme_storage_key: "darkMode".to_string(),
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.header_hide_threshold < self.header_scrolled_threshold {
            return Err(BehaviorError::Config(format!(
                "header_hide_threshold ({}) must not be below header_scrolled_threshold ({})",
                self.header_hide_threshold, self.header_scrolled_threshold
            )));
        }
        if self.scroll_throttle_ms <= 0.0 {
            return Err(BehaviorError::Config(
                "scroll_throttle_ms must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(BehaviorError::Config(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if self.theme_storage_key.is_empty() {
            return Err(BehaviorError::Config(
                "theme_storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Who the page is about.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Alex Morgan".to_string(),
            tagline: "Front-end developer & designer".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub site: SiteConfig,
    pub behavior: BehaviorConfig,
    pub skills: Vec<SkillEntry>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            behavior: BehaviorConfig::default(),
            skills: default_skills(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<()> {
        self.behavior.validate()?;
        for skill in &self.skills {
            skill.validate()?;
        }
        Ok(())
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load the page config: defaults, then the optional file, then env.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> anyhow::Result<PageConfig> {
    let mut builder = ::config::Config::builder();

    if let Ok(path) = std::env::var("PORTFOLIO_CONFIG") {
        tracing::debug!("Reading config file {}", path);
        builder = builder.add_source(::config::File::with_name(&path).required(false));
    }

    // PORTFOLIO__BEHAVIOR__ANCHOR_OFFSET=96, PORTFOLIO__SITE__OWNER=..., etc.
    builder = builder.add_source(
        ::config::Environment::with_prefix("PORTFOLIO")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config: PageConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
