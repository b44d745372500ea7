//! wordvec — word vector service client
//!
//! Looks up one word and prints `word index [features]`.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use wordvec::cli::{self, Args, Outcome};
use wordvec::client::ServiceClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    // Logs go to stderr so stdout only carries the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(version = wordvec::version_string(), "wordvec starting");

    let outcome = cli::run(&args, |config| async move {
        ServiceClient::connect_with(&config).await
    })
    .await?;

    println!("{}", outcome.render(args.format)?);

    // Missing arguments are reported on stdout and still exit 0; existing
    // callers rely on it.
    if let Outcome::Rejected(err) = &outcome {
        debug!(%err, "invocation rejected");
    }
    Ok(ExitCode::SUCCESS)
}
