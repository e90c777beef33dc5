use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

/// Environment variables honoured for compatibility with older deployments.
const LEGACY_PORT_VAR: &str = "TODO_PORT";
const LEGACY_PASSWORD_VAR: &str = "TODO_PASSWORD";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub tasks: TaskConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Shared password protecting the task API. `None` disables authentication.
    pub password: Option<String>,
}

impl AuthConfig {
    /// Returns the configured password, treating an empty value as unset.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Maximum number of tasks returned by a listing or search.
    pub limit: usize,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder holding only the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 7540)?
            .set_default("logging.level", "info")?
            .set_default("tasks.limit", 50)?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values; the legacy
    /// `TODO_PORT` and `TODO_PASSWORD` variables override both.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_with(config::File::with_name("config.toml").required(false))
    }

    /// ## Summary
    /// Same layering as [`Settings::load`] with `file` in place of `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_with<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Ok(Self::defaults()?
            // TOML file
            .add_source(file)
            // Env
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .set_override_option("server.port", legacy_var(LEGACY_PORT_VAR))?
            .set_override_option("auth.password", legacy_var(LEGACY_PASSWORD_VAR))?
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

fn legacy_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, ".env file not loaded, relying on process environment");
    }

    Settings::load()
}
