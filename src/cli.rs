//! Command-line surface of the `wordvec` client.
//!
//! [`run`] performs the whole invocation: validate the arguments, connect,
//! issue one lookup. Connecting goes through an injected factory so that a
//! rejected invocation provably never touches the network.

use std::future::Future;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::client::{ClientConfig, DEFAULT_ADDRESS};
use crate::error::{Argument, Result, WordVecError};
use crate::{VectorQuery, VectorResult, VectorService};

/// Query a word-vector service for a single word
#[derive(Debug, Parser)]
#[command(name = "wordvec")]
#[command(version = crate::PKG_VERSION)]
#[command(long_version = crate::LONG_VERSION.as_str())]
#[command(about = "Word vector service client")]
pub struct Args {
    /// Service address (host:port)
    #[arg(long, env = "WORDVEC_ADDRESS", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Word to query
    #[arg(long)]
    pub word: Option<String>,

    /// Seconds to wait for the connection
    #[arg(long, env = "WORDVEC_CONNECT_TIMEOUT", default_value_t = 5)]
    pub connect_timeout: u64,

    /// Seconds to wait for the reply
    #[arg(long, env = "WORDVEC_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `word index [features]`
    #[default]
    Text,
    /// One JSON object
    Json,
}

impl Args {
    /// Check the arguments without any I/O.
    ///
    /// The address is checked before the word. A whitespace-only address
    /// counts as missing.
    pub fn validate(&self) -> Result<(ClientConfig, VectorQuery)> {
        if self.address.trim().is_empty() {
            return Err(WordVecError::MissingArgument(Argument::Address));
        }
        let query = VectorQuery::new(self.word.clone().unwrap_or_default())?;
        let config = ClientConfig::new(&self.address)
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .request_timeout(Duration::from_secs(self.timeout));
        Ok((config, query))
    }
}

/// What an invocation produced.
#[derive(Debug)]
pub enum Outcome {
    /// Arguments were rejected before any network I/O.
    Rejected(WordVecError),
    /// The service answered.
    Found(VectorResult),
}

impl Outcome {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match (self, format) {
            (Outcome::Rejected(err), _) => Ok(err.to_string()),
            (Outcome::Found(result), OutputFormat::Text) => Ok(result.to_string()),
            (Outcome::Found(result), OutputFormat::Json) => Ok(serde_json::to_string(result)?),
        }
    }
}

/// Validate `args`, then connect with `connect` and look up the word once.
///
/// Missing arguments come back as [`Outcome::Rejected`] without calling
/// `connect`. Connection and call failures are returned as errors.
pub async fn run<C, Fut, S>(args: &Args, connect: C) -> Result<Outcome>
where
    C: FnOnce(ClientConfig) -> Fut,
    Fut: Future<Output = Result<S>>,
    S: VectorService,
{
    let (config, query) = match args.validate() {
        Ok(validated) => validated,
        Err(err @ WordVecError::MissingArgument(_)) => return Ok(Outcome::Rejected(err)),
        Err(err) => return Err(err),
    };

    let service = connect(config).await?;
    let result = service.get_vector(&query).await?;
    Ok(Outcome::Found(result))
}
