mod settings;

pub use settings::{Config, ConfigError, EditMode, TomlConfig, EXAMPLE_CONFIG};
