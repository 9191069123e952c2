use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{
    CONFIG_DIR, DEFAULT_ASSETS_DIR, DEFAULT_TOKEN_TTL_IN_SECONDS,
    env::{APP_ENVIRONMENT_ENV_VAR, CONFIG_ENV_PREFIX, DATABASE_URL_ENV_VAR, JWT_SECRET_ENV_VAR},
    prod,
};
use crate::tokens::JwtAuthConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    #[serde(default)]
    pub postgres: Option<PostgresSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
    pub assets_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    /// Token lifetime in seconds
    pub time_to_live: i64,
}

impl From<&JwtSetting> for JwtAuthConfig {
    fn from(setting: &JwtSetting) -> Self {
        JwtAuthConfig {
            jwt_secret: setting.secret.clone(),
            token_ttl_in_seconds: setting.time_to_live,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

/// Origins allowed to make cross-origin requests. Empty means CORS is off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AuthServiceSetting {
    /// Load settings from `config/base.json`, `config/<APP_ENVIRONMENT>.json`,
    /// `WARDEN__*` variables and the `JWT_SECRET` / `DATABASE_URL` variables,
    /// later sources overriding earlier ones. A `.env` file is honoured.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var(APP_ENVIRONMENT_ENV_VAR).unwrap_or_else(|_| "local".to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins"),
            )
            .set_override_option("auth.jwt.secret", std::env::var(JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("postgres.url", std::env::var(DATABASE_URL_ENV_VAR).ok())?;

        Self::from_builder(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.assets_dir", DEFAULT_ASSETS_DIR)?
            .set_default("auth.jwt.time_to_live", DEFAULT_TOKEN_TTL_IN_SECONDS)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt.secret.expose_secret().is_empty() {
            return Err(ConfigError::Message(
                "auth.jwt.secret must not be empty".to_string(),
            ));
        }
        if self.auth.jwt.time_to_live <= 0 {
            return Err(ConfigError::Message(format!(
                "auth.jwt.time_to_live must be positive, got {}",
                self.auth.jwt.time_to_live
            )));
        }
        Ok(())
    }

    pub fn jwt_auth_config(&self) -> JwtAuthConfig {
        JwtAuthConfig::from(&self.auth.jwt)
    }
}
