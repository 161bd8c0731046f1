//! Subscribe requests (`solana_corecast` package).
//!
//! Every filter field is an optional [`AddressFilter`]. An absent field
//! places no constraint on that dimension; a present one restricts the
//! feed to events touching at least one of the listed addresses.
//!
//! Tags follow `solana/corecast/request.proto`;
//! see the crate docs for provenance.

/// A list of base-58 addresses a subscription is restricted to.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AddressFilter {
    #[prost(string, repeated, tag = "1")]
    pub addresses: Vec<String>,
}

/// Filters for the `DexTrades` feed.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeTradesRequest {
    #[prost(message, optional, tag = "1")]
    pub program: Option<AddressFilter>,
    #[prost(message, optional, tag = "2")]
    pub pool: Option<AddressFilter>,
    #[prost(message, optional, tag = "3")]
    pub token: Option<AddressFilter>,
    #[prost(message, optional, tag = "4")]
    pub trader: Option<AddressFilter>,
}

/// Filters for the `DexOrders` feed.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeOrdersRequest {
    #[prost(message, optional, tag = "1")]
    pub program: Option<AddressFilter>,
    #[prost(message, optional, tag = "2")]
    pub pool: Option<AddressFilter>,
    #[prost(message, optional, tag = "3")]
    pub token: Option<AddressFilter>,
    #[prost(message, optional, tag = "4")]
    pub trader: Option<AddressFilter>,
}

/// Filters for the `DexPools` feed.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribePoolsRequest {
    #[prost(message, optional, tag = "1")]
    pub program: Option<AddressFilter>,
    #[prost(message, optional, tag = "2")]
    pub pool: Option<AddressFilter>,
    #[prost(message, optional, tag = "3")]
    pub token: Option<AddressFilter>,
}

/// Filters for the `Transactions` feed.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeTransactionsRequest {
    #[prost(message, optional, tag = "1")]
    pub program: Option<AddressFilter>,
    #[prost(message, optional, tag = "2")]
    pub signer: Option<AddressFilter>,
}

/// Filters for the `Transfers` feed.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeTransfersRequest {
    #[prost(message, optional, tag = "1")]
    pub sender: Option<AddressFilter>,
    #[prost(message, optional, tag = "2")]
    pub receiver: Option<AddressFilter>,
    #[prost(message, optional, tag = "3")]
    pub token: Option<AddressFilter>,
}

/// Filters for the `Balances` feed.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeBalanceUpdateRequest {
    #[prost(message, optional, tag = "1")]
    pub address: Option<AddressFilter>,
    #[prost(message, optional, tag = "2")]
    pub token: Option<AddressFilter>,
}
