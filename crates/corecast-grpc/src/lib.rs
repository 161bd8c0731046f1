//! corecast-grpc: tonic transport for CoreCast.
//!
//! Turns [`ServerSettings`](corecast_core::ServerSettings) into a connected
//! channel and implements [`CoreCastApi`](corecast_core::CoreCastApi) on it.
//!
//! # Features
//! - TLS with webpki roots, or plaintext for local servers
//! - HTTP/2 keepalive and large flow-control windows for long-lived streams
//! - Optional gzip / zstd message compression
//! - Bearer credential on every subscribe call

pub mod channel;
pub mod client;
pub mod error;

pub use channel::{bearer_header, connect, endpoint_uri, GrpcClientConfig};
pub use client::GrpcCoreCast;
pub use error::GrpcError;
