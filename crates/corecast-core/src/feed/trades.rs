//! `dex_trades`: swaps executed on DEX programs.

use futures::future::BoxFuture;
use tonic::Status;
use tracing::info;

use corecast_proto::{DexTradeEventMessage, SubscribeTradesRequest};

use super::Feed;
use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::filter::address_filter;
use crate::render::{self, b58, EventSummary};

pub struct Trades;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeSummary {
    pub slot: u64,
    pub success: bool,
    pub signature: String,
    pub sell_mint: String,
    pub buy_mint: String,
    pub sell_amount: u64,
    pub buy_amount: u64,
    /// Buy side's account, or the sell side's when there is no buy side.
    pub account: String,
    pub pool: String,
    pub program: String,
}

impl Feed for Trades {
    type Request = SubscribeTradesRequest;
    type Message = DexTradeEventMessage;
    type Summary = TradeSummary;

    const TAG: &'static str = "dex_trades";
    const LABEL: &'static str = "trades";

    fn build_request(filters: &FilterSet) -> SubscribeTradesRequest {
        SubscribeTradesRequest {
            program: address_filter(&filters.programs),
            pool: address_filter(&filters.pools),
            token: address_filter(&filters.tokens),
            trader: address_filter(&filters.traders),
        }
    }

    fn open(
        api: &mut dyn CoreCastApi,
        request: SubscribeTradesRequest,
    ) -> BoxFuture<'_, Result<EventStream<DexTradeEventMessage>, Status>> {
        api.dex_trades(request)
    }

    fn summarize(msg: &DexTradeEventMessage) -> TradeSummary {
        let tx = msg.transaction.as_ref();
        let trade = msg.trade.as_ref();
        let buy = trade.and_then(|t| t.buy.as_ref());
        let sell = trade.and_then(|t| t.sell.as_ref());
        let account = match buy {
            Some(side) => side.account.as_ref(),
            None => sell.and_then(|s| s.account.as_ref()),
        };

        TradeSummary {
            slot: render::slot_of(msg.block.as_ref()),
            success: render::success_of(tx),
            signature: render::signature_of(tx),
            sell_mint: render::mint_of(sell.and_then(|s| s.currency.as_ref())),
            buy_mint: render::mint_of(buy.and_then(|s| s.currency.as_ref())),
            sell_amount: sell.map_or(0, |s| s.amount),
            buy_amount: buy.map_or(0, |s| s.amount),
            account: render::account_of(account),
            pool: trade
                .and_then(|t| t.market.as_ref())
                .map(|m| b58(&m.market_address))
                .unwrap_or_default(),
            program: trade
                .and_then(|t| t.dex.as_ref())
                .map(|d| b58(&d.program_address))
                .unwrap_or_default(),
        }
    }
}

impl EventSummary for TradeSummary {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn emit(&self) {
        info!(
            slot = self.slot,
            success = self.success,
            signature = %self.signature,
            sell = %self.sell_mint,
            buy = %self.buy_mint,
            sell_amount = self.sell_amount,
            buy_amount = self.buy_amount,
            account = %self.account,
            pool = %self.pool,
            program = %self.program,
            "Swap"
        );
    }
}
