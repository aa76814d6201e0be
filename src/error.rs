//! Error types for caravel-ops operations.

use thiserror::Error;

/// Result type alias using [`OpsError`].
pub type Result<T> = std::result::Result<T, OpsError>;

/// Errors that can occur while managing a Caravel deployment.
///
/// Three families matter to callers: input validation (user-facing, never
/// retried, aborts the current command), remote parameter-store failures
/// (surfaced verbatim, never retried), and the `NotImplemented` stubs.
/// All errors implement `std::error::Error` and can be chained with `source()`.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Parameter name does not match the allowed grammar.
    #[error(
        "invalid parameter name {0:?}: names may only contain the characters \
         [a-zA-Z0-9_.-] and can be nested with leading slashes (e.g. /foo/bar)"
    )]
    InvalidParameterName(String),

    /// Parameter name nests deeper than the backend allows.
    #[error("parameter names cannot be nested more than 15 levels deep (found {0} separators)")]
    TooManyLevels(usize),

    /// Setup input did not normalize to a 12-digit AWS account ID.
    #[error("Invalid AWS account ID.")]
    InvalidAccountId,

    /// Setup input did not look like an AWS region code.
    #[error("Invalid region code.")]
    InvalidRegionCode,

    /// Setup input did not contain an IAM access key ID.
    #[error("Invalid access key ID.")]
    InvalidAccessKeyId,

    /// Setup input did not contain an IAM secret access key.
    #[error("Invalid secret access key.")]
    InvalidSecretAccessKey,

    /// The backend has no parameter under the requested name.
    #[error("parameter not found: {0}")]
    ParameterNotFound(String),

    /// Any other failure reported by the parameter-store backend.
    #[error("parameter store error: {0}")]
    Remote(String),

    /// Command exists in the tree but has no implementation yet.
    #[error("the {0} command has not been implemented yet")]
    NotImplemented(&'static str),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error (catch-all).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
