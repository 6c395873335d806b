//! Manifest retrieval failures.
//!
//! Every variant collapses to the same fallback path; the distinction only
//! feeds logging and status text.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// The request could not be sent or its body could not be read.
    #[error("manifest request failed: {0}")]
    Network(String),
    /// The server answered with a non-OK status.
    #[error("manifest HTTP {0}")]
    Status(u16),
    /// The body was not a usable manifest document.
    #[error("manifest parse failed: {0}")]
    Parse(String),
}
