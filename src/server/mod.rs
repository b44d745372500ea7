//! gRPC contract and service adapter.
//!
//! This module provides:
//! - Generated protobuf types (`proto`) used by both server and client
//! - Type conversions between native and proto types (`convert`)
//! - The gRPC service adapter (`service`, server-only)

pub mod convert;
#[cfg(feature = "server")]
pub mod service;

/// Re-exported generated proto types.
pub mod proto {
    tonic::include_proto!("wordvector");
}

#[cfg(feature = "server")]
pub use service::WordVectorService;
