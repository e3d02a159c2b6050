use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub activities: ActivitySettings,
    pub outbox: OutboxSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySettings {
    /// Topic written on every outbox row.
    pub topic: String,
    /// Load/decide/append cycles a command may run before a version conflict is surfaced.
    pub max_attempts: u32,
    /// JSON catalog to seed from instead of the built-in one.
    pub seed_file: Option<String>,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            topic: "activities.v1".to_string(),
            max_attempts: 5,
            seed_file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutboxSettings {
    pub relay_interval_ms: u64,
}

impl Settings {
    /// Defaults, then `config/default` and `config/{APP_ENVIRONMENT}`, then
    /// `ACTIVITIES__*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let defaults = ActivitySettings::default();
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.static_dir", "static")?
            .set_default("activities.topic", defaults.topic)?
            .set_default("activities.max_attempts", i64::from(defaults.max_attempts))?
            .set_default("outbox.relay_interval_ms", 1000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(Environment::with_prefix("ACTIVITIES").separator("__")))
    }
}
