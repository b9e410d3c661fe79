use std::net::SocketAddr;
use thiserror::Error;

/// Failures of the single outbound provider call.
///
/// The `Display` text of the first four variants is exactly what the
/// caller sees in the `response` field, so it must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError
{   /// Provider answered with a non-2xx status
    #[error("HTTP error: {detail}")]
    Http
    {   status: u16
      , detail: String
      , body: String
    }
  , /// Connection, DNS or other transport failure
    #[error("Request error: {0}")]
    Request(String)
  , /// Body was not valid JSON
    #[error("Error: Unable to decode the JSON response.")]
    Decode(String)
  , /// Provider key absent or status other than success
    #[error("Error: Unable to process the request.")]
    Unprocessable(String)
  , /// Provider entry present but not shaped as expected
    #[error("malformed provider result: {0}")]
    Malformed(String)
}

impl ProviderError
{   /// Whether this failure is reported to the caller as a normal
    /// `response` string instead of an HTTP error status.
    pub fn is_absorbed(&self) -> bool
    {   !matches!(self, ProviderError::Malformed(_))
    }
}

/// Configuration could not be built from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError
{   #[error("invalid bind address {value:?}: {reason}")]
    InvalidBind
    {   value: String
      , reason: String
    }
}

/// Startup and serving failures of the relay process
#[derive(Debug, Error)]
pub enum RelayError
{   #[error(transparent)]
    Config(#[from] ConfigError)
  , #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind
    {   addr: SocketAddr
      , #[source]
        source: std::io::Error
    }
  , #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error)
}
