//! Client library for connecting to a word-vector service.
//!
//! Provides [`ServiceClient`], which implements [`VectorService`](crate::VectorService)
//! by forwarding lookups to a remote service over gRPC.

mod config;
mod service_client;

pub use config::{ClientConfig, DEFAULT_ADDRESS};
pub use service_client::ServiceClient;
