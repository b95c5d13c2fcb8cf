use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the header (default: "Shopping List").
    #[serde(default = "default_title")]
    pub title: String,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// List behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// What to do when an added item's quantity does not parse.
    #[serde(default)]
    pub add_quantity_policy: AddQuantityPolicy,
}

/// Handling of unparseable quantity text when adding an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AddQuantityPolicy {
    /// Refuse to add the item.
    #[default]
    Reject,
    /// Add the item with a quantity of 1.
    #[serde(rename = "default")]
    #[value(name = "default")]
    UseDefault,
}

fn default_title() -> String {
    "Shopping List".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
