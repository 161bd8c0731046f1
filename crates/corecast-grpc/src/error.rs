//! Transport-level error types.

use thiserror::Error;
use tonic::metadata::errors::InvalidMetadataValue;

/// Errors raised while building or opening the gRPC channel.
#[derive(Debug, Error)]
pub enum GrpcError {
    /// The configured address is not a valid URI.
    #[error("invalid server address \"{address}\": {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// TLS could not be configured for the endpoint.
    #[error("TLS setup failed: {0}")]
    Tls(#[source] tonic::transport::Error),

    /// The connection could not be established.
    #[error("cannot connect to {uri}: {source}")]
    Connect {
        uri: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// The bearer credential contains characters not allowed in a header.
    #[error("authorization token is not a valid header value")]
    InvalidAuthorization(#[from] InvalidMetadataValue),
}
