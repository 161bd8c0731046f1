//! `transfers`: native and token transfers.

use futures::future::BoxFuture;
use tonic::Status;
use tracing::info;

use corecast_proto::{SubscribeTransfersRequest, TransferTxMessage};

use super::Feed;
use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::filter::address_filter;
use crate::render::{self, EventSummary};

pub struct Transfers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSummary {
    pub slot: u64,
    pub tx_index: u32,
    pub signature: String,
    pub mint: String,
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
    pub instruction_index: u32,
}

impl Feed for Transfers {
    type Request = SubscribeTransfersRequest;
    type Message = TransferTxMessage;
    type Summary = TransferSummary;

    const TAG: &'static str = "transfers";
    const LABEL: &'static str = "transfers";

    fn build_request(filters: &FilterSet) -> SubscribeTransfersRequest {
        SubscribeTransfersRequest {
            sender: address_filter(&filters.senders),
            receiver: address_filter(&filters.receivers),
            token: address_filter(&filters.tokens),
        }
    }

    fn open(
        api: &mut dyn CoreCastApi,
        request: SubscribeTransfersRequest,
    ) -> BoxFuture<'_, Result<EventStream<TransferTxMessage>, Status>> {
        api.transfers(request)
    }

    fn summarize(msg: &TransferTxMessage) -> TransferSummary {
        let tx = msg.transaction.as_ref();
        let t = msg.transfer.as_ref();

        TransferSummary {
            slot: render::slot_of(msg.block.as_ref()),
            tx_index: render::tx_index_of(tx),
            signature: render::signature_of(tx),
            mint: render::mint_of(t.and_then(|t| t.currency.as_ref())),
            sender: render::account_of(t.and_then(|t| t.sender.as_ref())),
            receiver: render::account_of(t.and_then(|t| t.receiver.as_ref())),
            amount: t.map_or(0, |t| t.amount),
            instruction_index: t.map_or(0, |t| t.instruction_index),
        }
    }
}

impl EventSummary for TransferSummary {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn emit(&self) {
        info!(
            slot = self.slot,
            tx_index = self.tx_index,
            sign = %self.signature,
            mint = %self.mint,
            sender = %self.sender,
            receiver = %self.receiver,
            amount = self.amount,
            instruction_index = self.instruction_index,
            "Transfer"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fixtures::*;
    use crate::render::b58;
    use corecast_proto::message::Transfer;

    #[test]
    fn request_reads_senders_receivers_tokens_only() {
        let req = Transfers::build_request(&filters_all());
        assert_eq!(req.sender.unwrap().addresses, vec!["S"]);
        assert_eq!(req.receiver.unwrap().addresses, vec!["V"]);
        assert_eq!(req.token.unwrap().addresses, vec!["T"]);
    }

    #[test]
    fn summary_renders_parties_and_amount() {
        let msg = TransferTxMessage {
            block: block(1_000),
            transaction: tx(12, &[5; 64], true, vec![]),
            transfer: Some(Transfer {
                instruction_index: 3,
                amount: 2_000_000_000,
                currency: currency(50),
                sender: Some(account(51, true)),
                receiver: Some(account(52, false)),
            }),
        };
        let s = Transfers::summarize(&msg);
        assert_eq!(s.slot, 1_000);
        assert_eq!(s.tx_index, 12);
        assert_eq!(s.signature, b58(&[5; 64]));
        assert_eq!(s.mint, b58_of(50));
        assert_eq!(s.sender, b58_of(51));
        assert_eq!(s.receiver, b58_of(52));
        assert_eq!(s.amount, 2_000_000_000);
        assert_eq!(s.instruction_index, 3);
    }
}
