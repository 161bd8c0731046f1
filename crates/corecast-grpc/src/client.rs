//! [`CoreCastApi`] over a tonic channel.

use async_trait::async_trait;
use futures::StreamExt;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;
use tonic::{Request, Status};

use corecast_core::{CoreCastApi, EventStream, ServerSettings};
use corecast_proto::{
    BalanceUpdateTxMessage, CoreCastClient, DexOrderEventMessage, DexPoolEventMessage,
    DexTradeEventMessage, ParsedIdlTransactionMessage, SubscribeBalanceUpdateRequest,
    SubscribeOrdersRequest, SubscribePoolsRequest, SubscribeTradesRequest,
    SubscribeTransactionsRequest, SubscribeTransfersRequest, TransferTxMessage,
};

use crate::channel::{self, bearer_header, GrpcClientConfig};
use crate::error::GrpcError;

/// CoreCast client bound to one channel and credential.
///
/// Dropping it releases the channel.
#[derive(Clone)]
pub struct GrpcCoreCast {
    client: CoreCastClient<Channel>,
    authorization: Option<MetadataValue<Ascii>>,
}

impl GrpcCoreCast {
    /// Wraps an existing channel, applying message limits and compression.
    pub fn new(
        channel: Channel,
        server: &ServerSettings,
        config: &GrpcClientConfig,
    ) -> Result<Self, GrpcError> {
        let authorization = server.bearer().map(bearer_header).transpose()?;

        let mut client = CoreCastClient::new(channel)
            .max_decoding_message_size(config.max_message_size)
            .max_encoding_message_size(config.max_message_size);
        if let Some(encoding) = channel::encoding(server.compression) {
            client = client.send_compressed(encoding).accept_compressed(encoding);
        }
        if authorization.is_some() {
            tracing::debug!("authorization metadata attached");
        }

        Ok(Self { client, authorization })
    }

    /// Dials `server` and builds the client.
    pub async fn connect(server: &ServerSettings, config: &GrpcClientConfig) -> Result<Self, GrpcError> {
        let channel = channel::connect(server, config).await?;
        Self::new(channel, server, config)
    }

    fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        if let Some(value) = &self.authorization {
            request.metadata_mut().insert("authorization", value.clone());
        }
        request
    }
}

#[async_trait]
impl CoreCastApi for GrpcCoreCast {
    async fn dex_trades(
        &mut self,
        request: SubscribeTradesRequest,
    ) -> Result<EventStream<DexTradeEventMessage>, Status> {
        let request = self.request(request);
        Ok(self.client.dex_trades(request).await?.into_inner().boxed())
    }

    async fn dex_orders(
        &mut self,
        request: SubscribeOrdersRequest,
    ) -> Result<EventStream<DexOrderEventMessage>, Status> {
        let request = self.request(request);
        Ok(self.client.dex_orders(request).await?.into_inner().boxed())
    }

    async fn dex_pools(
        &mut self,
        request: SubscribePoolsRequest,
    ) -> Result<EventStream<DexPoolEventMessage>, Status> {
        let request = self.request(request);
        Ok(self.client.dex_pools(request).await?.into_inner().boxed())
    }

    async fn transactions(
        &mut self,
        request: SubscribeTransactionsRequest,
    ) -> Result<EventStream<ParsedIdlTransactionMessage>, Status> {
        let request = self.request(request);
        Ok(self.client.transactions(request).await?.into_inner().boxed())
    }

    async fn transfers(
        &mut self,
        request: SubscribeTransfersRequest,
    ) -> Result<EventStream<TransferTxMessage>, Status> {
        let request = self.request(request);
        Ok(self.client.transfers(request).await?.into_inner().boxed())
    }

    async fn balances(
        &mut self,
        request: SubscribeBalanceUpdateRequest,
    ) -> Result<EventStream<BalanceUpdateTxMessage>, Status> {
        let request = self.request(request);
        Ok(self.client.balances(request).await?.into_inner().boxed())
    }
}
