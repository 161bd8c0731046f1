//! gRPC client for the `solana_corecast.CoreCast` service.
//!
//! Mirrors the structure `tonic-build` generates for a service with six
//! server-streaming methods.

#![allow(clippy::wildcard_imports)]
use tonic::codec::{CompressionEncoding, Streaming};
use tonic::codegen::*;

use crate::codec::ProstCodec;
use crate::message::{
    BalanceUpdateTxMessage, DexOrderEventMessage, DexPoolEventMessage, DexTradeEventMessage,
    ParsedIdlTransactionMessage, TransferTxMessage,
};
use crate::request::{
    SubscribeBalanceUpdateRequest, SubscribeOrdersRequest, SubscribePoolsRequest,
    SubscribeTradesRequest, SubscribeTransactionsRequest, SubscribeTransfersRequest,
};

/// Fully qualified service name.
pub const SERVICE: &str = "solana_corecast.CoreCast";

/// Client for the `CoreCast` service.
#[derive(Debug, Clone)]
pub struct CoreCastClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl CoreCastClient<tonic::transport::Channel> {
    /// Create a client over a pre-built tonic `Channel`.
    pub fn new(channel: tonic::transport::Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }
}

impl<T> CoreCastClient<T>
where
    T: tonic::client::GrpcService<tonic::body::Body>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
{
    /// Compress requests with `encoding`.
    pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
        self.inner = self.inner.send_compressed(encoding);
        self
    }

    /// Advertise that responses compressed with `encoding` are accepted.
    pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
        self.inner = self.inner.accept_compressed(encoding);
        self
    }

    /// Limit the size of a single decoded message.
    pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
        self.inner = self.inner.max_decoding_message_size(limit);
        self
    }

    /// Limit the size of a single encoded message.
    pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
        self.inner = self.inner.max_encoding_message_size(limit);
        self
    }

    pub async fn dex_trades(
        &mut self,
        request: impl tonic::IntoRequest<SubscribeTradesRequest>,
    ) -> Result<tonic::Response<Streaming<DexTradeEventMessage>>, tonic::Status> {
        self.server_streaming(request, "/solana_corecast.CoreCast/DexTrades", "DexTrades")
            .await
    }

    pub async fn dex_orders(
        &mut self,
        request: impl tonic::IntoRequest<SubscribeOrdersRequest>,
    ) -> Result<tonic::Response<Streaming<DexOrderEventMessage>>, tonic::Status> {
        self.server_streaming(request, "/solana_corecast.CoreCast/DexOrders", "DexOrders")
            .await
    }

    pub async fn dex_pools(
        &mut self,
        request: impl tonic::IntoRequest<SubscribePoolsRequest>,
    ) -> Result<tonic::Response<Streaming<DexPoolEventMessage>>, tonic::Status> {
        self.server_streaming(request, "/solana_corecast.CoreCast/DexPools", "DexPools")
            .await
    }

    pub async fn transactions(
        &mut self,
        request: impl tonic::IntoRequest<SubscribeTransactionsRequest>,
    ) -> Result<tonic::Response<Streaming<ParsedIdlTransactionMessage>>, tonic::Status> {
        self.server_streaming(
            request,
            "/solana_corecast.CoreCast/Transactions",
            "Transactions",
        )
        .await
    }

    pub async fn transfers(
        &mut self,
        request: impl tonic::IntoRequest<SubscribeTransfersRequest>,
    ) -> Result<tonic::Response<Streaming<TransferTxMessage>>, tonic::Status> {
        self.server_streaming(request, "/solana_corecast.CoreCast/Transfers", "Transfers")
            .await
    }

    pub async fn balances(
        &mut self,
        request: impl tonic::IntoRequest<SubscribeBalanceUpdateRequest>,
    ) -> Result<tonic::Response<Streaming<BalanceUpdateTxMessage>>, tonic::Status> {
        self.server_streaming(request, "/solana_corecast.CoreCast/Balances", "Balances")
            .await
    }

    async fn server_streaming<Req, Resp>(
        &mut self,
        request: impl tonic::IntoRequest<Req>,
        path: &'static str,
        method: &'static str,
    ) -> Result<tonic::Response<Streaming<Resp>>, tonic::Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::new(
                tonic::Code::Unknown,
                format!("Service was not ready: {}", e.into()),
            )
        })?;
        let codec = ProstCodec::<Req, Resp>::default();
        let path = http::uri::PathAndQuery::from_static(path);
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(tonic::GrpcMethod::new(SERVICE, method));
        self.inner.server_streaming(req, path, codec).await
    }
}
