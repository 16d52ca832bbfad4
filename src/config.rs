//! Navigation bar configuration.
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a working bar. `from_json` parses and validates in one go.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::constants::*;
use crate::shared::errors::{NavbarError, Result};

/// Spring constants for indicator motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

/// Scroll-driven header collapse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    pub progress_end: f64,
    pub expanded_height: f64,
    pub collapsed_height: f64,
    pub top_offset_y: f64,
    pub bottom_offset_y: f64,
    pub bottom_offset_x: f64,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            progress_end: COLLAPSE_PROGRESS_END,
            expanded_height: EXPANDED_HEIGHT,
            collapsed_height: COLLAPSED_HEIGHT,
            top_offset_y: TOP_OFFSET_Y,
            bottom_offset_y: BOTTOM_OFFSET_Y,
            bottom_offset_x: BOTTOM_OFFSET_X,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub items: Vec<String>,
    pub spring: SpringConfig,
    pub collapse: CollapseConfig,
    pub log_level: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            items: DEFAULT_NAV_ITEMS.iter().map(|s| s.to_string()).collect(),
            spring: SpringConfig::default(),
            collapse: CollapseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl NavbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavbarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(NavbarError::InvalidConfig("items must not be empty".to_string()));
        }

        // Labels double as render keys
        let mut seen = HashSet::new();
        for label in &self.items {
            if label.trim().is_empty() {
                return Err(NavbarError::InvalidConfig("item labels must not be blank".to_string()));
            }
            if !seen.insert(label.as_str()) {
                return Err(NavbarError::InvalidConfig(format!("duplicate item label: {}", label)));
            }
        }

        if !(self.spring.stiffness > 0.0) {
            return Err(NavbarError::InvalidConfig("spring.stiffness must be > 0".to_string()));
        }
        if !(self.spring.mass > 0.0) {
            return Err(NavbarError::InvalidConfig("spring.mass must be > 0".to_string()));
        }
        if !(self.spring.damping >= 0.0) {
            return Err(NavbarError::InvalidConfig("spring.damping must be >= 0".to_string()));
        }
        if !(self.collapse.progress_end > 0.0) {
            return Err(NavbarError::InvalidConfig("collapse.progress_end must be > 0".to_string()));
        }

        Ok(())
    }

    /// Parsed `log_level`, defaulting to INFO for unknown names
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
