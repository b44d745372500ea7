//! Connection settings for [`ServiceClient`](super::ServiceClient).

use std::time::Duration;

use crate::error::{Argument, Result, WordVecError};

/// Address used when none is given.
pub const DEFAULT_ADDRESS: &str = "localhost:50051";

/// Where and how long to wait for the word-vector service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port`, optionally prefixed with `http://`.
    pub address: String,
    /// Bound on establishing the channel (default: 5s).
    pub connect_timeout: Duration,
    /// Bound on a single call (default: 30s).
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// URI for the plaintext channel.
    ///
    /// Bare `host:port` addresses get an `http://` scheme. TLS is not
    /// supported, so `https://` is a configuration error.
    pub fn endpoint_uri(&self) -> Result<String> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(WordVecError::MissingArgument(Argument::Address));
        }
        match address.split_once("://") {
            None => Ok(format!("http://{address}")),
            Some(("http", _)) => Ok(address.to_string()),
            Some((scheme, _)) => Err(WordVecError::Configuration(format!(
                "unsupported scheme '{scheme}' in address {address} (only plaintext http is supported)"
            ))),
        }
    }
}
