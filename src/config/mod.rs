mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AddQuantityPolicy, Config, ListConfig, UiConfig};
