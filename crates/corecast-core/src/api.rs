//! The `CoreCastApi` trait: the six subscribe calls, transport-agnostic.
//!
//! `corecast-grpc` implements this over a tonic channel; tests implement it
//! with scripted in-memory streams.

use async_trait::async_trait;
use futures::stream::BoxStream;
use tonic::Status;

use corecast_proto::{
    BalanceUpdateTxMessage, DexOrderEventMessage, DexPoolEventMessage, DexTradeEventMessage,
    ParsedIdlTransactionMessage, SubscribeBalanceUpdateRequest, SubscribeOrdersRequest,
    SubscribePoolsRequest, SubscribeTradesRequest, SubscribeTransactionsRequest,
    SubscribeTransfersRequest, TransferTxMessage,
};

/// Inbound messages of one subscription. An `Err` item ends consumption.
pub type EventStream<M> = BoxStream<'static, Result<M, Status>>;

/// One subscribe call per method; each opens a server stream.
#[async_trait]
pub trait CoreCastApi: Send {
    async fn dex_trades(
        &mut self,
        request: SubscribeTradesRequest,
    ) -> Result<EventStream<DexTradeEventMessage>, Status>;

    async fn dex_orders(
        &mut self,
        request: SubscribeOrdersRequest,
    ) -> Result<EventStream<DexOrderEventMessage>, Status>;

    async fn dex_pools(
        &mut self,
        request: SubscribePoolsRequest,
    ) -> Result<EventStream<DexPoolEventMessage>, Status>;

    async fn transactions(
        &mut self,
        request: SubscribeTransactionsRequest,
    ) -> Result<EventStream<ParsedIdlTransactionMessage>, Status>;

    async fn transfers(
        &mut self,
        request: SubscribeTransfersRequest,
    ) -> Result<EventStream<TransferTxMessage>, Status>;

    async fn balances(
        &mut self,
        request: SubscribeBalanceUpdateRequest,
    ) -> Result<EventStream<BalanceUpdateTxMessage>, Status>;
}
