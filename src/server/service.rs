//! gRPC service adapter.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use crate::{VectorQuery, VectorService};

use super::proto;
use super::proto::word_vector_server::WordVector;

/// gRPC service that serves any [`VectorService`] implementation.
pub struct WordVectorService<S: VectorService> {
    inner: Arc<S>,
}

impl<S: VectorService> WordVectorService<S> {
    /// Create a new service wrapping the given lookup backend.
    pub fn new(inner: Arc<S>) -> Self {
        Self { inner }
    }

    /// Wrap into the generated tonic server, ready for `add_service`.
    pub fn into_server(self) -> proto::word_vector_server::WordVectorServer<Self>
    where
        S: 'static,
    {
        proto::word_vector_server::WordVectorServer::new(self)
    }
}

#[tonic::async_trait]
impl<S: VectorService + 'static> WordVector for WordVectorService<S> {
    async fn get_vector(
        &self,
        request: Request<proto::GetVectorRequest>,
    ) -> Result<Response<proto::GetVectorReply>, Status> {
        let query = VectorQuery::try_from(request.into_inner())?;
        debug!(word = query.word(), "GetVector");
        let result = self.inner.get_vector(&query).await?;
        Ok(Response::new(result.into()))
    }
}
