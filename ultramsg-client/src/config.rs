//! Client configuration.

use std::path::Path;

use config::{Config as ConfigLoader, ConfigError, Environment, File, Source};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.ultramsg.com";

/// Connection settings for one gateway instance.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub instance_id: String,
    pub token: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout applied by the HTTP transport.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    pub fn new(instance_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            token: token.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }

    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (ULTRAMSG__KEY format, e.g. ULTRAMSG__TOKEN)
    /// 2. ultramsg.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(File::with_name("ultramsg").required(false), environment())
    }

    /// Same as [`ClientConfig::load`] but with an explicit, required file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(File::from(path).required(true), environment())
    }

    fn load_with<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = ConfigLoader::builder()
            .set_default("base_url", default_base_url())?
            .set_default("timeout_secs", default_timeout() as i64)?
            .add_source(file)
            .add_source(env)
            .build()?;

        config.try_deserialize()
    }
}

/// Env values stay strings: a numeric-looking token or instance id must not
/// be reparsed. `timeout_secs` is converted during deserialization.
fn environment() -> Environment {
    Environment::with_prefix("ULTRAMSG").separator("__")
}
