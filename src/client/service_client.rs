//! [`ServiceClient`] — [`VectorService`] implementation that talks to the
//! word-vector service over gRPC.
//!
//! Proto ↔ native conversions and status mapping live in [`crate::server::convert`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, warn};

use crate::server::proto;
use crate::server::proto::word_vector_client::WordVectorClient;
use crate::{Result, VectorQuery, VectorResult, VectorService, WordVecError, telemetry};

use super::ClientConfig;

/// A [`VectorService`] client connected to a remote word-vector service.
///
/// The channel is plaintext HTTP/2 and carries no credentials.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    inner: WordVectorClient<Channel>,
    request_timeout: Duration,
}

impl ServiceClient {
    /// Connect to the service at `address` with default timeouts.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("localhost:50051").await?;
    /// ```
    pub async fn connect(address: impl Into<String>) -> Result<Self> {
        Self::connect_with(&ClientConfig::new(address)).await
    }

    /// Connect using explicit [`ClientConfig`] settings.
    pub async fn connect_with(config: &ClientConfig) -> Result<Self> {
        let uri = config.endpoint_uri()?;
        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| WordVecError::Configuration(format!("invalid address {uri}: {e}")))?
            .connect_timeout(config.connect_timeout);

        debug!(%uri, "connecting to word vector service");
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| WordVecError::Transport(format!("failed to connect to {uri}: {e}")))?;
        Ok(Self {
            inner: WordVectorClient::new(channel),
            request_timeout: config.request_timeout,
        })
    }

    /// Record request outcome metrics (counter + histogram).
    fn record_request(start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl VectorService for ServiceClient {
    async fn get_vector(&self, query: &VectorQuery) -> Result<VectorResult> {
        let start = Instant::now();
        let request = proto::GetVectorRequest::from(query);
        let mut client = self.inner.clone();
        let call = tokio::time::timeout(self.request_timeout, client.get_vector(request));
        let response = match call.await {
            Ok(response) => response.map_err(WordVecError::from),
            Err(_elapsed) => Err(WordVecError::Timeout),
        };
        Self::record_request(start, response.is_ok());

        let result = VectorResult::from(response?.into_inner());
        if !result.is_found() {
            metrics::counter!(telemetry::LOOKUP_MISSES_TOTAL).increment(1);
            warn!(word = query.word(), "word not in service vocabulary");
        } else {
            debug!(word = query.word(), index = result.index, "word vector received");
        }
        Ok(result)
    }
}
