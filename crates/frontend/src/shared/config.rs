//! Runtime configuration for the dashboard
//!
//! Read once at start-up from an optional JSON block in the host page:
//! `<script id="onboarding-config" type="application/json">{ ... }</script>`.
//! A missing block means defaults; a malformed one means defaults plus a warning.

use contracts::dashboards::d100_onboarding::{DashboardData, DashboardInput};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "onboarding-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document is not available")]
    MissingDom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub input: DashboardInput,
    /// "error" | "warn" | "info" | "debug" | "trace"
    pub log_level: Option<String>,
    /// Replaces the built-in mock collections when present
    pub data: Option<DashboardData>,
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Level for `console_log`, `Debug` unless configured otherwise.
    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|s| log::Level::from_str(s).ok())
            .unwrap_or(log::Level::Debug)
    }

    pub fn data(&self) -> DashboardData {
        self.data.clone().unwrap_or_default()
    }

    /// Loads config from the host page.
    ///
    /// Returns the error separately so it can be logged once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        match read_config_block() {
            Ok(Some(raw)) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
            Ok(None) => (Self::default(), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

fn read_config_block() -> Result<Option<String>, ConfigError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ConfigError::MissingDom)?;

    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty()))
}
