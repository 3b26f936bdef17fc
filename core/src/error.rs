//! Error types for the contract-test toolkit.
//!
//! # Design
//! `Transport` gets a dedicated variant because callers frequently distinguish
//! "the network call itself failed after every retry" from local problems such
//! as an unreadable fixture file or a schema mismatch. HTTP error statuses are
//! deliberately NOT errors: they come back inside an ordinary `Envelope` for
//! the caller to assert on.

use std::fmt;

/// Errors returned by the client, config, and schema layers.
#[derive(Debug)]
pub enum ClientError {
    /// The transport failed (connect, timeout, broken stream) and the retry
    /// budget is spent.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialize(String),

    /// A response body could not be converted into the expected type.
    Decode(String),

    /// The YAML configuration document could not be parsed.
    Config(String),

    /// A fixture or schema file could not be read.
    File { path: String, message: String },

    /// The instance does not conform to the JSON Schema at `path`.
    Schema { path: String, messages: Vec<String> },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {msg}"),
            ClientError::Serialize(msg) => write!(f, "serialization failed: {msg}"),
            ClientError::Decode(msg) => write!(f, "decoding failed: {msg}"),
            ClientError::Config(msg) => write!(f, "invalid configuration: {msg}"),
            ClientError::File { path, message } => {
                write!(f, "cannot read {path}: {message}")
            }
            ClientError::Schema { path, messages } => {
                write!(f, "schema validation against {path} failed: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for ClientError {}
