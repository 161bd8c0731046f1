//! corecast-core: subscription construction and event consumption for the
//! CoreCast Solana streaming service.
//!
//! # Overview
//!
//! A run loads [`Settings`], picks one feed by its `stream.type` tag, sends
//! exactly one subscribe request and renders every message it receives
//! until the stream ends or the run is cancelled. The crate is
//! transport-agnostic: the subscribe calls go through [`CoreCastApi`].
//!
//! - [`Settings`] / [`FilterSet`]: the settings document
//! - [`address_filter`]: optional address filter from an identifier list
//! - [`Feed`]: one stream kind: request shape, subscribe call, summary
//! - [`Dispatcher`]: tag → feed registry
//! - [`consume`]: the receive loop, with cancellation
//! - [`ConfigError`] / [`DispatchError`]: structured error types

pub mod api;
pub mod config;
pub mod consumer;
pub mod dispatch;
pub mod error;
pub mod feed;
pub mod filter;
pub mod render;

pub use api::{CoreCastApi, EventStream};
pub use config::{Compression, FilterSet, ServerSettings, Settings, StreamSettings};
pub use consumer::{consume, ConsumeOptions, ConsumeReport, StreamEnd};
pub use dispatch::{Dispatcher, FeedHandler, StreamHandler};
pub use error::{ConfigError, DispatchError};
pub use feed::Feed;
pub use filter::address_filter;
pub use render::{b58, EventSummary};
