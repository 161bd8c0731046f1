//! Channel construction from [`ServerSettings`].

use std::time::Duration;

use tonic::codec::CompressionEncoding;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::debug;

use corecast_core::{Compression, ServerSettings};

use crate::error::GrpcError;

const MIB: usize = 1024 * 1024;

/// HTTP/2 and message sizing applied to every connection.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    pub stream_window: u32,
    pub connection_window: u32,
    pub keep_alive_interval: Duration,
    pub keep_alive_timeout: Duration,
    /// Keep pinging while no stream is active.
    pub keep_alive_while_idle: bool,
    pub buffer_size: usize,
    pub connect_timeout: Duration,
    /// Limit for a single encoded or decoded message.
    pub max_message_size: usize,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            stream_window: (16 * MIB) as u32,
            connection_window: (128 * MIB) as u32,
            keep_alive_interval: Duration::from_secs(15),
            keep_alive_timeout: Duration::from_secs(5),
            keep_alive_while_idle: true,
            buffer_size: 4 * MIB,
            connect_timeout: Duration::from_secs(10),
            max_message_size: 64 * MIB,
        }
    }
}

/// Full URI for `server.address`: `http://` when insecure, `https://`
/// otherwise. An address that already has a scheme is kept as-is.
pub fn endpoint_uri(server: &ServerSettings) -> String {
    let address = server.address.trim();
    if address.contains("://") {
        return address.to_string();
    }
    let scheme = if server.insecure { "http" } else { "https" };
    format!("{scheme}://{address}")
}

/// Builds the endpoint without connecting.
pub fn endpoint(server: &ServerSettings, config: &GrpcClientConfig) -> Result<Endpoint, GrpcError> {
    let uri = endpoint_uri(server);
    let mut endpoint = Endpoint::from_shared(uri).map_err(|source| GrpcError::InvalidAddress {
        address: server.address.clone(),
        source,
    })?;

    if server.insecure {
        debug!(mode = "insecure", "grpc transport");
    } else {
        debug!(mode = "tls", "grpc transport");
        endpoint = endpoint
            .tls_config(ClientTlsConfig::new().with_webpki_roots())
            .map_err(GrpcError::Tls)?;
    }

    Ok(endpoint
        .initial_stream_window_size(config.stream_window)
        .initial_connection_window_size(config.connection_window)
        .http2_keep_alive_interval(config.keep_alive_interval)
        .keep_alive_timeout(config.keep_alive_timeout)
        .keep_alive_while_idle(config.keep_alive_while_idle)
        .buffer_size(config.buffer_size)
        .connect_timeout(config.connect_timeout))
}

/// Dials the server and waits for the connection to come up.
pub async fn connect(server: &ServerSettings, config: &GrpcClientConfig) -> Result<Channel, GrpcError> {
    let endpoint = endpoint(server, config)?;
    let uri = endpoint.uri().to_string();
    debug!(uri = %uri, "dialing grpc");
    let channel = endpoint
        .connect()
        .await
        .map_err(|source| GrpcError::Connect { uri, source })?;
    debug!("grpc connection established");
    Ok(channel)
}

/// `Bearer <token>` header value, marked sensitive.
pub fn bearer_header(token: &str) -> Result<MetadataValue<Ascii>, GrpcError> {
    let mut value = format!("Bearer {token}").parse::<MetadataValue<Ascii>>()?;
    value.set_sensitive(true);
    Ok(value)
}

pub(crate) fn encoding(compression: Compression) -> Option<CompressionEncoding> {
    match compression {
        Compression::None => None,
        Compression::Gzip => Some(CompressionEncoding::Gzip),
        Compression::Zstd => Some(CompressionEncoding::Zstd),
    }
}
