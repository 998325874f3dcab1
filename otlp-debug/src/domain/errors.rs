//! Structured error types for otlp-debug
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::net::SocketAddr;
use thiserror::Error;

/// The payload is not a well-formed profiles export.
#[derive(Error, Debug)]
#[error("Failed to decode profiles export: {0}")]
pub struct DecodeError(#[from] pub prost::DecodeError);

/// Failures turning a request body into a decoded export.
///
/// All variants are client-input conditions.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported content encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Failed to decompress request body: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("Decompressed body exceeds {limit} bytes")]
    InflatedTooLarge { limit: usize },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_encoding_display() {
        let err = IngestError::UnsupportedEncoding("br".to_string());
        assert_eq!(err.to_string(), "Unsupported content encoding: br");
    }

    #[test]
    fn test_bind_error_mentions_address() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:4040".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert!(err.to_string().contains("127.0.0.1:4040"));
        assert!(err.to_string().contains("address in use"));
    }
}
