//! Build provenance reported by `wordvec --version`.
//!
//! Git and build metadata are embedded by `vergen-gitcl` in `build.rs`.
//! Builds outside a checkout fall back to `unknown`.

use std::sync::LazyLock;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

const BUILD_TIMESTAMP: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(ts) => ts,
    None => "unknown",
};

fn git_dirty() -> bool {
    option_env!("VERGEN_GIT_DIRTY") == Some("true")
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

/// `{version}+{branch}.{sha}`, with `.dirty` appended for unclean trees.
///
/// Example: `0.1.0+main.abc1234`
pub fn version_string() -> String {
    let dirty_suffix = if git_dirty() { ".dirty" } else { "" };
    format!(
        "{PKG_VERSION}+{GIT_BRANCH}.{}{dirty_suffix}",
        short_sha(GIT_SHA)
    )
}

/// Multi-line text for `--version`; `-V` keeps the bare package version.
pub static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}\ncommit: {GIT_SHA}\nbuilt:  {BUILD_TIMESTAMP}\nproto:  wordvector.WordVector",
        version_string()
    )
});
