//! corecast-proto: wire types for the `solana_corecast.CoreCast` service.
//!
//! The message layout follows the published CoreCast schema package
//! (`solana_corecast` requests, `solana_messages` payloads). Bindings are
//! written by hand in the shape `tonic-build` would generate, so the crate
//! builds without `protoc`.
//!
//! # Schema provenance
//!
//! Field numbers are reconstructed by hand to match these schema files:
//!
//! - `solana/corecast/corecast.proto`
//! - `solana/corecast/request.proto`
//! - `solana/corecast/stream_message.proto`
//! - `solana/dex_block_message.proto`
//! - `solana/block_message.proto`
//! - `solana/token_block_message.proto`
//! - `solana/parsed_idl_block_message.proto`
//!
//! The files ship in the `bitquery-corecast-proto` distribution. No schema
//! version is pinned here. On a decode mismatch, diff the `tag = "N"` attributes against the current
//! files, or regenerate with `tonic-build` from them.
//!
//! - [`request`]: `AddressFilter` and the six subscribe requests
//! - [`message`]: block / transaction context and the six event messages
//! - [`client`]: [`CoreCastClient`], one server-streaming call per feed

pub mod client;
mod codec;
pub mod message;
pub mod request;

pub use client::CoreCastClient;
pub use message::{
    BalanceUpdateTxMessage, DexOrderEventMessage, DexPoolEventMessage, DexTradeEventMessage,
    ParsedIdlTransactionMessage, TransferTxMessage,
};
pub use request::{
    AddressFilter, SubscribeBalanceUpdateRequest, SubscribeOrdersRequest, SubscribePoolsRequest,
    SubscribeTradesRequest, SubscribeTransactionsRequest, SubscribeTransfersRequest,
};
