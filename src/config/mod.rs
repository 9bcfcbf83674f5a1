mod settings;


pub use settings::{default_config_path, ConfigError, Settings, APP_NAME, CONFIG_FILE};
