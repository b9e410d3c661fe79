//! Relay configuration, read once at startup

use std::net::SocketAddr;
use log::{debug, warn};
use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "EDEN_API_KEY";
pub const API_URL_VAR: &str = "EDEN_API_URL";
pub const BIND_VAR: &str = "RELAY_BIND";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Everything the relay needs from its environment.
///
/// Built once and handed to the provider client and the server; nothing
/// reads the process environment after this.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig
{   /// Bearer token for the provider (not validated locally)
    pub api_key: Option<String>
  , /// Provider text generation endpoint
    pub api_url: String
  , /// Address the front door listens on
    pub bind: SocketAddr
}

impl RelayConfig
{   /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
      F: Fn(&str) -> Option<String>
    {   let api_key = lookup(API_KEY_VAR)
          .filter(|key| !key.is_empty());
        if api_key.is_none()
        {   warn!(
              "{} is not set; provider calls will fail authentication",
              API_KEY_VAR
            );
        }

        let api_url = lookup(API_URL_VAR)
          .unwrap_or_else(||
            crate::providers::eden::EDEN_API_URL.to_string()
          );

        let bind_value = lookup(BIND_VAR)
          .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value.parse::<SocketAddr>()
          .map_err(|e| ConfigError::InvalidBind {
            value: bind_value.clone(),
            reason: e.to_string(),
          })?;

        debug!("Relay config: api_url={} bind={}", api_url, bind);
        Ok(RelayConfig
        {   api_key
          , api_url
          , bind
        })
    }
}
