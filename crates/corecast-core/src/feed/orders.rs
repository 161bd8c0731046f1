//! `dex_orders`: limit order placements and updates on order-book DEXes.

use futures::future::BoxFuture;
use tonic::Status;
use tracing::info;

use corecast_proto::{DexOrderEventMessage, SubscribeOrdersRequest};

use super::Feed;
use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::filter::address_filter;
use crate::render::{self, b58, EventSummary};

pub struct Orders;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub slot: u64,
    pub order_id: String,
    pub buy_side: bool,
    pub limit_price: u64,
    pub limit_amount: u64,
    pub account: String,
    pub pool: String,
    pub program: String,
    pub base_mint: String,
    pub quote_mint: String,
}

impl Feed for Orders {
    type Request = SubscribeOrdersRequest;
    type Message = DexOrderEventMessage;
    type Summary = OrderSummary;

    const TAG: &'static str = "dex_orders";
    const LABEL: &'static str = "orders";

    fn build_request(filters: &FilterSet) -> SubscribeOrdersRequest {
        SubscribeOrdersRequest {
            program: address_filter(&filters.programs),
            pool: address_filter(&filters.pools),
            token: address_filter(&filters.tokens),
            trader: address_filter(&filters.traders),
        }
    }

    fn open(
        api: &mut dyn CoreCastApi,
        request: SubscribeOrdersRequest,
    ) -> BoxFuture<'_, Result<EventStream<DexOrderEventMessage>, Status>> {
        api.dex_orders(request)
    }

    fn summarize(msg: &DexOrderEventMessage) -> OrderSummary {
        let event = msg.order.as_ref();
        let order = event.and_then(|e| e.order.as_ref());
        let market = event.and_then(|e| e.market.as_ref());

        OrderSummary {
            slot: render::slot_of(msg.block.as_ref()),
            order_id: order.map(|o| b58(&o.order_id)).unwrap_or_default(),
            buy_side: order.is_some_and(|o| o.buy_side),
            limit_price: order.map_or(0, |o| o.limit_price),
            limit_amount: order.map_or(0, |o| o.limit_amount),
            account: order.map(|o| b58(&o.account)).unwrap_or_default(),
            pool: market.map(|m| b58(&m.market_address)).unwrap_or_default(),
            program: event
                .and_then(|e| e.dex.as_ref())
                .map(|d| b58(&d.program_address))
                .unwrap_or_default(),
            base_mint: render::mint_of(market.and_then(|m| m.base_currency.as_ref())),
            quote_mint: render::mint_of(market.and_then(|m| m.quote_currency.as_ref())),
        }
    }
}

impl EventSummary for OrderSummary {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn emit(&self) {
        info!(
            order_id = %self.order_id,
            buy_side = self.buy_side,
            limit_price = self.limit_price,
            limit_amount = self.limit_amount,
            account = %self.account,
            pool = %self.pool,
            program = %self.program,
            base_mint = %self.base_mint,
            quote_mint = %self.quote_mint,
            "Order"
        );
    }
}
