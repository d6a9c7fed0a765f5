//! Error types for source-map extraction, validation, and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding or validating a source map value.
#[derive(Error, Debug)]
pub enum MapError {
    /// The supplied value is not parseable JSON.
    #[error("sourcemap must be a valid object or JSON text: {0}")]
    Json(#[from] serde_json::Error),

    /// `sources`/`sourcesContent` missing or length-mismatched. The
    /// visualization cannot be built without original content per file.
    #[error("sourcemap does not contain sourcesContent for every source")]
    MissingSourceContents,

    /// Inline `data:` payload is not valid base64.
    #[error("inline sourcemap payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Errors raised while locating a source map inside a generated file.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Zero or more than one `sourceMappingURL` comment in the file.
    #[error("saw an unexpected number of sourceMappingURL comments ({found} found)")]
    CommentCount { found: usize },

    /// The comment references a separate file rather than inline data.
    /// The caller resolves this by reading the referenced file itself.
    #[error("sourceMappingURL points to a different file: {reference}")]
    ExternalFile { reference: String },

    /// The comment was inline but its payload did not decode.
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Umbrella error for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("configuration error: {0}")]
    Config(String),
}
