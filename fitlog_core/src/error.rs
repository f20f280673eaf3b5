//! Error types for the fitlog_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad or missing user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Registration attempted with a username that already exists
    #[error("Username '{0}' already exists")]
    DuplicateUser(String),

    /// Unknown username or wrong password.
    ///
    /// A single variant covers both cases so callers cannot leak which
    /// usernames exist.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Stored password hash is not a recognizable bcrypt hash
    #[error("Stored password hash is invalid: {0}")]
    CorruptHash(String),

    /// Persisted user store could not be parsed.
    ///
    /// Recoverable: callers fall back to an empty store, but the next save
    /// overwrites the damaged file.
    #[error("User store {path:?} is corrupted: {detail}")]
    StoreCorrupt { path: PathBuf, detail: String },

    /// Calculator input was non-finite or non-positive
    #[error("Invalid calculation input: {0}")]
    InvalidInput(String),
}
