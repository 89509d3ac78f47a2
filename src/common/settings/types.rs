use serde::Deserialize;

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub secret: SecretSettings,
    pub email: EmailSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                port: 8080,
                posts_per_page: 10,
                max_log_files: 14,
                ..Default::default()
            },
            database: DatabaseSettings {
                max_connections: 10,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub posts_per_page: u64,
    pub max_log_files: usize,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Deserialize, Clone, Default)]
pub struct SecretSettings {
    pub hmac_secret: String,
}

impl std::fmt::Debug for SecretSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSettings")
            .field("hmac_secret", &"********")
            .finish()
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct EmailSettings {
    pub host: String,
    pub host_user: String,
    #[serde(default)]
    pub host_user_password: String,
    pub sender: String,
}

pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'development' or 'production'.",
                other
            )),
        }
    }
}
