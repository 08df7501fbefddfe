use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Request body limit in bytes, applies to uploads
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Ok(envy::from_env::<Config>()?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Allowed CORS origins, trimmed, empty entries dropped
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "dev" || env == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "prod" || env == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
            service_name: default_service_name(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_cors_origins() -> String {
    "http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "synapse-api".to_string()
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_frontend() {
        let config = Config::default();
        assert_eq!(config.server_address(), "0.0.0.0:8000");
        assert_eq!(config.allowed_origins(), vec!["http://localhost:3000"]);
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = Config {
            cors_origins: " https://app.example.com, ,http://localhost:3000 ".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.allowed_origins(),
            vec!["https://app.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn env_vars_override_defaults() {
        let vars = vec![
            ("PORT".to_string(), "9100".to_string()),
            ("ENVIRONMENT".to_string(), "Production".to_string()),
            ("MAX_UPLOAD_BYTES".to_string(), "1024".to_string()),
        ];
        let config: Config = match envy::from_iter(vars) {
            Ok(config) => config,
            Err(e) => panic!("config should parse: {e}"),
        };
        assert_eq!(config.port, 9100);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.is_production());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
