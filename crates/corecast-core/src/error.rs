//! Error types for settings loading and feed dispatch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the settings document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the settings shape.
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required option is present but empty.
    #[error("missing required option `{option}`")]
    Missing { option: &'static str },

    /// The authorization value is still the template placeholder.
    #[error(
        "server.authorization is still the placeholder \"{placeholder}\"; \
         generate a token at https://docs.bitquery.io/docs/authorisation/how-to-generate/"
    )]
    PlaceholderToken { placeholder: &'static str },
}

/// Errors raised by the subscription dispatcher.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The selected stream type has no registered feed.
    #[error("unknown stream type \"{tag}\"; supported: {supported}")]
    UnknownStreamType { tag: String, supported: String },

    /// The subscribe call failed (transport error or remote rejection).
    #[error("{tag} subscribe failed: {status}")]
    Subscribe {
        tag: &'static str,
        #[source]
        status: tonic::Status,
    },
}

impl DispatchError {
    /// Returns `true` if the failure happened before any network activity.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::UnknownStreamType { .. })
    }
}
