//! Gateway configuration from environment variables.

use std::env;

/// Runtime configuration for the gateway binary.
///
/// Environment variables:
/// - `GATEWAY_ADDR` - bind address (default `127.0.0.1:8080`)
/// - `GATEWAY_API_TOKEN` - bearer token; when unset, the gateway runs
///   open with no security collaborator
/// - `GATEWAY_API_USER` - user the token resolves to (default `local`)
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to bind the listener to.
    pub addr: String,
    /// Bearer token for the single-shot boundary, if any.
    pub api_token: Option<String>,
    /// User identity the token authenticates as.
    pub api_user: String,
}

impl GatewayConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            addr: env::var("GATEWAY_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            api_token: env::var("GATEWAY_API_TOKEN").ok().filter(|t| !t.is_empty()),
            api_user: env::var("GATEWAY_API_USER").unwrap_or_else(|_| "local".to_string()),
        }
    }
}
