use config::{Config, ConfigError, File};

use crate::settings::types::{Environment, Settings};

pub mod types;

/// Layers `settings/base.yaml`, `settings/{APP_ENVIRONMENT}.yaml` and `APP_*`
/// environment variables, in that order. A `.env` file is loaded first if present.
pub fn get_settings() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let settings_directory = base_path.join("settings");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = Config::builder()
        .add_source(File::from(settings_directory.join("base.yaml")))
        .add_source(File::from(settings_directory.join(environment_filename)).required(false))
        // E.g. 'APP_APPLICATION__PORT=5001' would set 'Settings.application.port'
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
