//! wordvec - client for a gRPC word-vector lookup service
//!
//! The service answers `GetVector(word)` with the word's index in its
//! vocabulary and its feature values. This crate exposes that capability as
//! the [`VectorService`] trait, a gRPC implementation of it
//! ([`client::ServiceClient`], `client` feature), an adapter that serves any
//! implementation over gRPC ([`server::WordVectorService`], `server` feature),
//! and an in-memory [`Vocabulary`].
//!
//! # Example
//!
//! ```rust,no_run
//! use wordvec::client::ServiceClient;
//! use wordvec::{VectorQuery, VectorService};
//!
//! #[tokio::main]
//! async fn main() -> wordvec::Result<()> {
//!     let client = ServiceClient::connect("localhost:50051").await?;
//!     let result = client.get_vector(&VectorQuery::new("cat")?).await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub mod cli;
#[cfg(feature = "client")]
pub mod client;
pub mod error;
#[cfg(any(feature = "server", feature = "client"))]
pub mod server;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;
pub mod vocabulary;

// Re-export main types at crate root
pub use error::{Argument, Result, WordVecError};
pub use traits::VectorService;
pub use types::{VectorQuery, VectorResult};
pub use version::{LONG_VERSION, PKG_VERSION, version_string};
pub use vocabulary::Vocabulary;
