//! Stream kinds. Each [`Feed`] ties together one subscribe request, the
//! filter fields it reads, the subscribe call that opens it and the
//! summary rendered for every message it yields.

use std::fmt;

use futures::future::BoxFuture;
use tonic::Status;

use crate::api::{CoreCastApi, EventStream};
use crate::config::FilterSet;
use crate::render::EventSummary;

pub mod balances;
pub mod orders;
pub mod pools;
pub mod trades;
pub mod transactions;
pub mod transfers;

pub use balances::{BalanceSummary, Balances};
pub use orders::{OrderSummary, Orders};
pub use pools::{PoolEventSummary, Pools};
pub use trades::{TradeSummary, Trades};
pub use transactions::{TransactionSummary, Transactions};
pub use transfers::{TransferSummary, Transfers};

/// One stream kind.
///
/// Implementors are zero-sized markers; all behaviour lives in associated
/// items so the dispatcher can hold a `FeedHandler<F>` per kind.
pub trait Feed: Send + Sync + 'static {
    type Request: fmt::Debug + Send + 'static;
    type Message: Send + 'static;
    type Summary: EventSummary;

    /// Value of `stream.type` that selects this feed.
    const TAG: &'static str;

    /// Human label used in log lines, e.g. `"trades"`.
    const LABEL: &'static str;

    /// Builds the subscribe request from the filter fields this feed reads.
    fn build_request(filters: &FilterSet) -> Self::Request;

    /// Issues the subscribe call for this feed.
    fn open(
        api: &mut dyn CoreCastApi,
        request: Self::Request,
    ) -> BoxFuture<'_, Result<EventStream<Self::Message>, Status>>;

    fn summarize(message: &Self::Message) -> Self::Summary;
}
