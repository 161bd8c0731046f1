//! `balances`: per-account balance changes within a transaction.

use futures::future::BoxFuture;
use tonic::Status;
use tracing::info;

use corecast_proto::{BalanceUpdateTxMessage, SubscribeBalanceUpdateRequest};

use super::Feed;
use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::filter::address_filter;
use crate::render::{self, EventSummary};

pub struct Balances;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSummary {
    pub slot: u64,
    pub tx_index: u32,
    pub signature: String,
    /// Account at `account_index` in the transaction header, `""` when the
    /// index is out of range.
    pub address: String,
    pub mint: String,
    pub pre: u64,
    pub post: u64,
}

impl Feed for Balances {
    type Request = SubscribeBalanceUpdateRequest;
    type Message = BalanceUpdateTxMessage;
    type Summary = BalanceSummary;

    const TAG: &'static str = "balances";
    const LABEL: &'static str = "balances";

    fn build_request(filters: &FilterSet) -> SubscribeBalanceUpdateRequest {
        SubscribeBalanceUpdateRequest {
            address: address_filter(&filters.addresses),
            token: address_filter(&filters.tokens),
        }
    }

    fn open(
        api: &mut dyn CoreCastApi,
        request: SubscribeBalanceUpdateRequest,
    ) -> BoxFuture<'_, Result<EventStream<BalanceUpdateTxMessage>, Status>> {
        api.balances(request)
    }

    fn summarize(msg: &BalanceUpdateTxMessage) -> BalanceSummary {
        let tx = msg.transaction.as_ref();
        let event = msg.balance_update.as_ref();
        let update = event.and_then(|e| e.balance_update.as_ref());

        let address = update
            .zip(tx.and_then(|t| t.header.as_ref()))
            .and_then(|(u, h)| h.accounts.get(u.account_index as usize));

        BalanceSummary {
            slot: render::slot_of(msg.block.as_ref()),
            tx_index: render::tx_index_of(tx),
            signature: render::signature_of(tx),
            address: render::account_of(address),
            mint: render::mint_of(event.and_then(|e| e.currency.as_ref())),
            pre: update.map_or(0, |u| u.pre_balance),
            post: update.map_or(0, |u| u.post_balance),
        }
    }
}

impl EventSummary for BalanceSummary {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn emit(&self) {
        info!(
            slot = self.slot,
            tx_index = self.tx_index,
            sign = %self.signature,
            address = %self.address,
            mint = %self.mint,
            pre = self.pre,
            post = self.post,
            "BalanceUpdate"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fixtures::*;
    use corecast_proto::message::{BalanceUpdate, BalanceUpdateEvent};

    fn message(account_index: u32) -> BalanceUpdateTxMessage {
        BalanceUpdateTxMessage {
            block: block(300),
            transaction: tx(6, &[9; 64], true, vec![account(60, true), account(61, false)]),
            balance_update: Some(BalanceUpdateEvent {
                balance_update: Some(BalanceUpdate {
                    account_index,
                    pre_balance: 10,
                    post_balance: 15,
                }),
                currency: currency(62),
            }),
        }
    }

    #[test]
    fn request_reads_addresses_and_tokens_only() {
        let req = Balances::build_request(&filters_all());
        assert_eq!(req.address.unwrap().addresses, vec!["A"]);
        assert_eq!(req.token.unwrap().addresses, vec!["T"]);
    }

    #[test]
    fn resolves_address_by_index() {
        let s = Balances::summarize(&message(1));
        assert_eq!(s.slot, 300);
        assert_eq!(s.tx_index, 6);
        assert_eq!(s.address, b58_of(61));
        assert_eq!(s.mint, b58_of(62));
        assert_eq!((s.pre, s.post), (10, 15));
    }

    #[test]
    fn out_of_range_index_renders_empty_address() {
        let s = Balances::summarize(&message(2));
        assert_eq!(s.address, "");
        // The rest of the event is still rendered.
        assert_eq!(s.mint, b58_of(62));
        assert_eq!(s.post, 15);
    }

    #[test]
    fn missing_header_renders_empty_address() {
        let mut msg = message(0);
        if let Some(tx) = msg.transaction.as_mut() {
            tx.header = None;
        }
        assert_eq!(Balances::summarize(&msg).address, "");
    }
}
