//! Settings document: server connection, selected stream type and filters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Unfilled authorization value shipped in the sample config.
pub const TOKEN_PLACEHOLDER: &str = "ory_at_";

/// Default location of the settings document.
pub const DEFAULT_CONFIG_PATH: &str = "./configs/config.yaml";

/// Top-level settings, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub stream: StreamSettings,
    #[serde(default)]
    pub filters: FilterSet,
}

/// Connection parameters handed to the transport.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// `host:port`, or a full URI with scheme.
    pub address: String,
    /// Plaintext transport instead of TLS.
    #[serde(default)]
    pub insecure: bool,
    /// Bearer credential, sent as `authorization: Bearer <value>`.
    #[serde(default)]
    pub authorization: Option<String>,
    #[serde(default)]
    pub compression: Compression,
}

impl ServerSettings {
    /// The credential exactly as configured, unless it is absent or blank.
    pub fn bearer(&self) -> Option<&str> {
        self.authorization
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

// Hand-written so the credential never reaches a log line.
impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("address", &self.address)
            .field("insecure", &self.insecure)
            .field("has_auth", &self.bearer().is_some())
            .field("compression", &self.compression)
            .finish()
    }
}

/// Message compression for requests and accepted responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Zstd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSettings {
    /// One of the supported stream tags; checked by the dispatcher.
    #[serde(rename = "type")]
    pub stream_type: String,
}

/// Identifier lists for every filterable field. Each feed reads a fixed subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub programs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pools: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tokens: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub traders: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub senders: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub receivers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub addresses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub signers: Vec<String>,
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

impl Settings {
    /// Read, parse and validate the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        settings.log_summary(path);
        Ok(settings)
    }

    /// Parse and validate an in-memory document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
                path: "<inline>".into(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.address.trim().is_empty() {
            return Err(ConfigError::Missing { option: "server.address" });
        }
        if self.stream.stream_type.trim().is_empty() {
            return Err(ConfigError::Missing { option: "stream.type" });
        }
        match self.server.bearer().map(str::trim) {
            Some(TOKEN_PLACEHOLDER) => {
                return Err(ConfigError::PlaceholderToken {
                    placeholder: TOKEN_PLACEHOLDER,
                })
            }
            Some(_) => {}
            None => warn!(
                address = %self.server.address,
                "server.authorization is empty; the server may reject the subscription"
            ),
        }
        Ok(())
    }

    fn log_summary(&self, path: &Path) {
        let f = &self.filters;
        debug!(
            path = %path.display(),
            address = %self.server.address,
            insecure = self.server.insecure,
            has_auth = self.server.bearer().is_some(),
            compression = ?self.server.compression,
            stream = %self.stream.stream_type,
            programs = f.programs.len(),
            pools = f.pools.len(),
            tokens = f.tokens.len(),
            traders = f.traders.len(),
            senders = f.senders.len(),
            receivers = f.receivers.len(),
            addresses = f.addresses.len(),
            signers = f.signers.len(),
            "settings loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
server:
  address: "corecast.bitquery.io"
  authorization: "ory_at_realtoken"
  insecure: false
stream:
  type: "dex_trades"
filters:
  programs:
    - "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8"
  tokens:
    - "So11111111111111111111111111111111111111112"
  traders: []
  pools:
"#;

    #[test]
    fn parses_sample_document() {
        let s = Settings::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(s.server.address, "corecast.bitquery.io");
        assert!(!s.server.insecure);
        assert_eq!(s.server.bearer(), Some("ory_at_realtoken"));
        assert_eq!(s.server.compression, Compression::None);
        assert_eq!(s.stream.stream_type, "dex_trades");
        assert_eq!(s.filters.programs.len(), 1);
        assert_eq!(s.filters.tokens, vec!["So11111111111111111111111111111111111111112"]);
    }

    #[test]
    fn missing_and_null_filters_are_empty() {
        let s = Settings::from_yaml_str(SAMPLE).unwrap();
        assert!(s.filters.traders.is_empty());
        assert!(s.filters.pools.is_empty());
        assert!(s.filters.senders.is_empty());
        assert!(s.filters.signers.is_empty());
    }

    #[test]
    fn filters_section_is_optional() {
        let raw = "server:\n  address: localhost:50051\n  insecure: true\nstream:\n  type: balances\n";
        let s = Settings::from_yaml_str(raw).unwrap();
        assert_eq!(s.filters, FilterSet::default());
        assert!(s.server.insecure);
        assert_eq!(s.server.bearer(), None);
    }

    #[test]
    fn placeholder_token_is_rejected() {
        let raw = "server:\n  address: a:1\n  authorization: ory_at_\nstream:\n  type: dex_trades\n";
        let err = Settings::from_yaml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderToken { .. }));
    }

    #[test]
    fn credential_is_kept_verbatim() {
        let raw = "server:\n  address: a:1\n  authorization: \" tok \"\nstream:\n  type: dex_trades\n";
        let s = Settings::from_yaml_str(raw).unwrap();
        assert_eq!(s.server.bearer(), Some(" tok "));

        let blank = "server:\n  address: a:1\n  authorization: \"  \"\nstream:\n  type: dex_trades\n";
        assert_eq!(Settings::from_yaml_str(blank).unwrap().server.bearer(), None);

        let padded = "server:\n  address: a:1\n  authorization: \" ory_at_ \"\nstream:\n  type: dex_trades\n";
        assert!(matches!(
            Settings::from_yaml_str(padded).unwrap_err(),
            ConfigError::PlaceholderToken { .. }
        ));
    }

    #[test]
    fn empty_address_is_rejected() {
        let raw = "server:\n  address: \"\"\nstream:\n  type: dex_trades\n";
        let err = Settings::from_yaml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { option: "server.address" }));
    }

    #[test]
    fn unknown_stream_type_passes_loading() {
        let raw = "server:\n  address: a:1\nstream:\n  type: unknown_type\n";
        let s = Settings::from_yaml_str(raw).unwrap();
        assert_eq!(s.stream.stream_type, "unknown_type");
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = Settings::from_yaml_str("server: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn compression_option() {
        let raw = "server:\n  address: a:1\n  compression: zstd\nstream:\n  type: transfers\n";
        let s = Settings::from_yaml_str(raw).unwrap();
        assert_eq!(s.server.compression, Compression::Zstd);
    }

    #[test]
    fn debug_output_hides_credential() {
        let s = Settings::from_yaml_str(SAMPLE).unwrap();
        let shown = format!("{:?}", s.server);
        assert!(!shown.contains("realtoken"));
        assert!(shown.contains("has_auth: true"));
    }
}
