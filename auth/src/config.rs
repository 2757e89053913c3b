use std::env;
use std::str::FromStr;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

/// Authentication configuration, loaded once at process start and treated
/// as immutable thereafter.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Signing secret shared by issuance and verification.
    pub secret: String,
    /// Signing algorithm name, e.g. "HS256".
    pub algorithm: String,
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, JWT__ALGORITHM)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A missing secret fails the load; there is no usable fallback.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("jwt.algorithm", "HS256")?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: AuthConfig = configuration.try_deserialize()?;

        Ok(config)
    }

    /// Parse the configured algorithm name.
    ///
    /// # Errors
    /// Fails with a `ConfigError` on an unknown algorithm name.
    pub fn signing_algorithm(&self) -> Result<Algorithm, ConfigError> {
        Algorithm::from_str(&self.jwt.algorithm).map_err(|_| {
            ConfigError::Message(format!(
                "Unknown signing algorithm: {}",
                self.jwt.algorithm
            ))
        })
    }
}
