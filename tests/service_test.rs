//! Integration tests for the gRPC round-trip.
//!
//! Starts an in-process word-vector server and connects with a
//! [`ServiceClient`], validating the full path through proto conversions.

#![cfg(all(feature = "server", feature = "client"))]

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use clap::Parser;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use wordvec::cli::{self, Args, OutputFormat};
use wordvec::client::{ClientConfig, ServiceClient};
use wordvec::server::WordVectorService;
use wordvec::server::proto;
use wordvec::{Result, VectorQuery, VectorResult, VectorService, Vocabulary, WordVecError};

/// Serves `{cat, 42, [0.1, 0.2]}` for every word.
struct CatService;

#[async_trait]
impl VectorService for CatService {
    async fn get_vector(&self, _query: &VectorQuery) -> Result<VectorResult> {
        Ok(VectorResult::new("cat", 42, vec![0.1, 0.2]))
    }
}

/// Takes longer than any test timeout.
struct StalledService;

#[async_trait]
impl VectorService for StalledService {
    async fn get_vector(&self, _query: &VectorQuery) -> Result<VectorResult> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(VectorResult::not_found())
    }
}

/// Start a test server on an ephemeral port and return its address (`host:port`).
async fn start_test_server<S: VectorService + 'static>(service: S) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = WordVectorService::new(Arc::new(service)).into_server();

    tokio::spawn(async move {
        Server::builder()
            .add_service(server)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr.to_string()
}

/// An address nothing is listening on.
fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

#[tokio::test]
async fn test_client_connect() {
    let addr = start_test_server(CatService).await;
    let client = ServiceClient::connect(&addr).await;
    assert!(client.is_ok(), "failed to connect: {:?}", client.err());
}

#[tokio::test]
async fn test_get_vector_round_trip() {
    let addr = start_test_server(CatService).await;
    let client = ServiceClient::connect(&addr).await.unwrap();

    let result = client
        .get_vector(&VectorQuery::new("cat").unwrap())
        .await
        .unwrap();

    assert_eq!(result, VectorResult::new("cat", 42, vec![0.1, 0.2]));
}

#[tokio::test]
async fn test_cli_prints_mock_reply() {
    let addr = start_test_server(CatService).await;
    let args =
        Args::try_parse_from(["wordvec", "--address", addr.as_str(), "--word", "cat"]).unwrap();

    let outcome = cli::run(&args, |config| async move {
        ServiceClient::connect_with(&config).await
    })
    .await
    .unwrap();

    let text = outcome.render(OutputFormat::Text).unwrap();
    assert!(text.contains("cat 42 [0.1, 0.2]"), "got: {text}");
}

#[tokio::test]
async fn test_vocabulary_over_grpc() {
    let vocabulary: Vocabulary = [("the", vec![0.0, 1.0]), ("cat", vec![0.6, 0.8])]
        .into_iter()
        .collect();
    let addr = start_test_server(vocabulary).await;
    let client = ServiceClient::connect(format!("http://{addr}")).await.unwrap();

    let cat = client
        .get_vector(&VectorQuery::new("cat").unwrap())
        .await
        .unwrap();
    assert_eq!(cat.index, 1);

    let missing = client
        .get_vector(&VectorQuery::new("unicorn").unwrap())
        .await
        .unwrap();
    assert!(!missing.is_found());
    assert_eq!(missing.to_string(), " -1 []");
}

#[tokio::test]
async fn test_empty_word_rejected_by_server() {
    let addr = start_test_server(CatService).await;
    let mut raw = proto::word_vector_client::WordVectorClient::connect(format!("http://{addr}"))
        .await
        .unwrap();

    let status = raw
        .get_vector(proto::GetVectorRequest {
            word: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert!(matches!(
        WordVecError::from(status),
        WordVecError::InvalidInput(_)
    ));
}

#[tokio::test]
async fn test_unreachable_address_fails_fast() {
    let config = ClientConfig::new(closed_address()).connect_timeout(Duration::from_secs(2));

    let started = Instant::now();
    let err = ServiceClient::connect_with(&config).await.unwrap_err();

    assert!(matches!(err, WordVecError::Transport(_)), "got {err:?}");
    assert!(err.is_transport_failure());
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_request_timeout_is_enforced() {
    let addr = start_test_server(StalledService).await;
    let config = ClientConfig::new(addr).request_timeout(Duration::from_millis(200));
    let client = ServiceClient::connect_with(&config).await.unwrap();

    let err = client
        .get_vector(&VectorQuery::new("cat").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, WordVecError::Timeout), "got {err:?}");
    assert!(err.is_transport_failure());
}
