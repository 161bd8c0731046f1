//! `dex_pools`: liquidity changes in DEX pools.

use futures::future::BoxFuture;
use tonic::Status;
use tracing::info;

use corecast_proto::{DexPoolEventMessage, SubscribePoolsRequest};

use super::Feed;
use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::filter::address_filter;
use crate::render::{self, b58, EventSummary};

pub struct Pools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEventSummary {
    pub slot: u64,
    /// Signed change of the base reserve.
    pub base_change: i64,
    pub quote_change: i64,
    pub program: String,
    pub base_mint: String,
    pub quote_mint: String,
    pub pool: String,
}

impl Feed for Pools {
    type Request = SubscribePoolsRequest;
    type Message = DexPoolEventMessage;
    type Summary = PoolEventSummary;

    const TAG: &'static str = "dex_pools";
    const LABEL: &'static str = "pools";

    fn build_request(filters: &FilterSet) -> SubscribePoolsRequest {
        SubscribePoolsRequest {
            program: address_filter(&filters.programs),
            pool: address_filter(&filters.pools),
            token: address_filter(&filters.tokens),
        }
    }

    fn open(
        api: &mut dyn CoreCastApi,
        request: SubscribePoolsRequest,
    ) -> BoxFuture<'_, Result<EventStream<DexPoolEventMessage>, Status>> {
        api.dex_pools(request)
    }

    fn summarize(msg: &DexPoolEventMessage) -> PoolEventSummary {
        let evt = msg.pool_event.as_ref();
        let market = evt.and_then(|e| e.market.as_ref());

        PoolEventSummary {
            slot: render::slot_of(msg.block.as_ref()),
            base_change: evt
                .and_then(|e| e.base_currency.as_ref())
                .map_or(0, |s| s.change_amount),
            quote_change: evt
                .and_then(|e| e.quote_currency.as_ref())
                .map_or(0, |s| s.change_amount),
            program: evt
                .and_then(|e| e.dex.as_ref())
                .map(|d| b58(&d.program_address))
                .unwrap_or_default(),
            base_mint: render::mint_of(market.and_then(|m| m.base_currency.as_ref())),
            quote_mint: render::mint_of(market.and_then(|m| m.quote_currency.as_ref())),
            pool: market.map(|m| b58(&m.market_address)).unwrap_or_default(),
        }
    }
}

impl EventSummary for PoolEventSummary {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn emit(&self) {
        info!(
            base_change = self.base_change,
            quote_change = self.quote_change,
            program = %self.program,
            base_mint = %self.base_mint,
            quote_mint = %self.quote_mint,
            pool = %self.pool,
            "PoolEvent"
        );
    }
}
