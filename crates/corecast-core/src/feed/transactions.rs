//! `transactions`: transactions with IDL-parsed instructions.

use futures::future::BoxFuture;
use tonic::Status;
use tracing::info;

use corecast_proto::{ParsedIdlTransactionMessage, SubscribeTransactionsRequest};

use super::Feed;
use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::filter::address_filter;
use crate::render::{self, b58, EventSummary};

pub struct Transactions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub slot: u64,
    pub signature: String,
    pub instructions: usize,
    /// Accounts in the header flagged as signers.
    pub signers: usize,
    pub signer: String,
    pub success: bool,
}

impl Feed for Transactions {
    type Request = SubscribeTransactionsRequest;
    type Message = ParsedIdlTransactionMessage;
    type Summary = TransactionSummary;

    const TAG: &'static str = "transactions";
    const LABEL: &'static str = "transactions";

    fn build_request(filters: &FilterSet) -> SubscribeTransactionsRequest {
        SubscribeTransactionsRequest {
            program: address_filter(&filters.programs),
            signer: address_filter(&filters.signers),
        }
    }

    fn open(
        api: &mut dyn CoreCastApi,
        request: SubscribeTransactionsRequest,
    ) -> BoxFuture<'_, Result<EventStream<ParsedIdlTransactionMessage>, Status>> {
        api.transactions(request)
    }

    fn summarize(msg: &ParsedIdlTransactionMessage) -> TransactionSummary {
        let tx = msg.transaction.as_ref();
        let header = tx.and_then(|t| t.header.as_ref());

        TransactionSummary {
            slot: render::slot_of(msg.block.as_ref()),
            signature: tx.map(|t| b58(&t.signature)).unwrap_or_default(),
            instructions: tx.map_or(0, |t| t.parsed_idl_instructions.len()),
            signers: header.map_or(0, |h| h.accounts.iter().filter(|a| a.is_signer).count()),
            signer: header.map(|h| b58(&h.signer)).unwrap_or_default(),
            success: tx
                .and_then(|t| t.status.as_ref())
                .is_some_and(|s| s.success),
        }
    }
}

impl EventSummary for TransactionSummary {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn emit(&self) {
        info!(
            slot = self.slot,
            signature = %self.signature,
            instructions = self.instructions,
            signers = self.signers,
            signer = %self.signer,
            status = self.success,
            "ParsedTransaction"
        );
    }
}
