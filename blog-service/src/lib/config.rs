use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Minimum JWT secret length in bytes. HS256 keys shorter than the hash
/// output weaken the MAC, so startup refuses them.
const MIN_JWT_SECRET_BYTES: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Config {
    /// Read configuration from `config/*.toml`, letting environment
    /// variables win over files.
    ///
    /// Sources, strongest first:
    /// 1. Environment variables with `__` path separators
    ///    (`DATABASE__URL`, `JWT__SECRET`, ...)
    /// 2. `config/{RUN_MODE}.toml`, with RUN_MODE defaulting to `development`
    /// 3. `config/default.toml`
    ///
    /// There is no baked-in signing secret. JWT__SECRET (or a config file
    /// entry) must provide one, otherwise loading fails and the service
    /// refuses to start.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        // Later sources override earlier ones
        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes, got {}",
                MIN_JWT_SECRET_BYTES,
                self.jwt.secret.len()
            )));
        }

        Ok(())
    }
}
