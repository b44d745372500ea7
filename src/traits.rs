//! Core VectorService trait

use async_trait::async_trait;

use crate::{Result, VectorQuery, VectorResult};

/// The word-vector lookup capability.
///
/// Abstracts over where vectors come from, so the CLI can talk to a remote
/// service, an in-memory [`Vocabulary`](crate::Vocabulary), or a test double
/// through the same call.
#[async_trait]
pub trait VectorService: Send + Sync {
    /// Look up the vector of a single word.
    ///
    /// Unknown words are not an error: implementations answer with
    /// [`VectorResult::not_found`].
    async fn get_vector(&self, query: &VectorQuery) -> Result<VectorResult>;
}

#[async_trait]
impl<S: VectorService + ?Sized> VectorService for std::sync::Arc<S> {
    async fn get_vector(&self, query: &VectorQuery) -> Result<VectorResult> {
        (**self).get_vector(query).await
    }
}
