//! Gateway configuration
//!
//! All settings come from the environment, read once at startup.

use std::env;

use crate::gateway::error::GatewayError;

/// Default listening port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the gateway process
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Database connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Listening port (`PORT`)
    pub port: u16,
    /// When `true`, records are scoped by the client-supplied `userId`
    /// (`USER_SCOPING`)
    pub user_scoping: bool,
    /// When set, CORS is restricted to this single origin
    /// (`CORS_ALLOWED_ORIGIN`); unset means open to all origins
    pub cors_allowed_origin: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:gateway.db".to_string(),
            port: DEFAULT_PORT,
            user_scoping: false,
            cors_allowed_origin: None,
        }
    }
}

impl GatewayConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, GatewayError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = url;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| GatewayError::Config(format!("invalid PORT value: {}", port)))?;
        }
        if let Ok(scoping) = env::var("USER_SCOPING") {
            config.user_scoping = matches!(scoping.as_str(), "1" | "true" | "TRUE");
        }
        if let Ok(origin) = env::var("CORS_ALLOWED_ORIGIN") {
            if !origin.is_empty() {
                config.cors_allowed_origin = Some(origin);
            }
        }

        Ok(config)
    }

    /// Socket address string for the listener.
    pub fn socket_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
