//! Dispatcher integration tests against an in-memory `CoreCastApi`.
//!
//! The fake records every subscribe request it receives and answers with a
//! scripted stream: `messages` default-valued events followed by an
//! optional terminal error.

use std::time::Duration;

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;
use tonic::Status;

use corecast_core::{
    ConsumeOptions, CoreCastApi, DispatchError, Dispatcher, EventStream, Settings, StreamEnd,
};
use corecast_proto::{
    AddressFilter, BalanceUpdateTxMessage, DexOrderEventMessage, DexPoolEventMessage,
    DexTradeEventMessage, ParsedIdlTransactionMessage, SubscribeBalanceUpdateRequest,
    SubscribeOrdersRequest, SubscribePoolsRequest, SubscribeTradesRequest,
    SubscribeTransactionsRequest, SubscribeTransfersRequest, TransferTxMessage,
};

// ─── Fake transport ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Issued {
    Trades(SubscribeTradesRequest),
    Orders(SubscribeOrdersRequest),
    Pools(SubscribePoolsRequest),
    Transactions(SubscribeTransactionsRequest),
    Transfers(SubscribeTransfersRequest),
    Balances(SubscribeBalanceUpdateRequest),
}

#[derive(Default)]
struct FakeApi {
    issued: Vec<Issued>,
    messages: usize,
    stream_error: Option<Status>,
    reject: Option<Status>,
}

impl FakeApi {
    fn replying(messages: usize) -> Self {
        Self { messages, ..Default::default() }
    }

    fn answer<M: Default + Send + 'static>(&mut self) -> Result<EventStream<M>, Status> {
        if let Some(status) = self.reject.clone() {
            return Err(status);
        }
        let mut items: Vec<Result<M, Status>> =
            (0..self.messages).map(|_| Ok(M::default())).collect();
        if let Some(status) = self.stream_error.clone() {
            items.push(Err(status));
        }
        Ok(stream::iter(items).boxed())
    }
}

#[async_trait]
impl CoreCastApi for FakeApi {
    async fn dex_trades(
        &mut self,
        request: SubscribeTradesRequest,
    ) -> Result<EventStream<DexTradeEventMessage>, Status> {
        self.issued.push(Issued::Trades(request));
        self.answer()
    }

    async fn dex_orders(
        &mut self,
        request: SubscribeOrdersRequest,
    ) -> Result<EventStream<DexOrderEventMessage>, Status> {
        self.issued.push(Issued::Orders(request));
        self.answer()
    }

    async fn dex_pools(
        &mut self,
        request: SubscribePoolsRequest,
    ) -> Result<EventStream<DexPoolEventMessage>, Status> {
        self.issued.push(Issued::Pools(request));
        self.answer()
    }

    async fn transactions(
        &mut self,
        request: SubscribeTransactionsRequest,
    ) -> Result<EventStream<ParsedIdlTransactionMessage>, Status> {
        self.issued.push(Issued::Transactions(request));
        self.answer()
    }

    async fn transfers(
        &mut self,
        request: SubscribeTransfersRequest,
    ) -> Result<EventStream<TransferTxMessage>, Status> {
        self.issued.push(Issued::Transfers(request));
        self.answer()
    }

    async fn balances(
        &mut self,
        request: SubscribeBalanceUpdateRequest,
    ) -> Result<EventStream<BalanceUpdateTxMessage>, Status> {
        self.issued.push(Issued::Balances(request));
        self.answer()
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn settings(yaml: &str) -> Settings {
    Settings::from_yaml_str(yaml).expect("valid settings")
}

fn filter(ids: &[&str]) -> Option<AddressFilter> {
    Some(AddressFilter {
        addresses: ids.iter().map(|s| s.to_string()).collect(),
    })
}

const ALL_FILTERS: &str = r#"
server:
  address: localhost:50051
  insecure: true
  authorization: test-token
stream:
  type: TAG
filters:
  programs: [P1]
  pools: [L1, L2]
  tokens: [T1]
  traders: [R1]
  senders: [S1]
  receivers: [V1]
  addresses: [A1]
  signers: [G1]
"#;

async fn run_tag(tag: &str, api: &mut FakeApi) -> Result<corecast_core::ConsumeReport, DispatchError> {
    let s = settings(&ALL_FILTERS.replace("TAG", tag));
    Dispatcher::with_defaults()
        .dispatch(
            &s.stream.stream_type,
            api,
            &s.filters,
            ConsumeOptions::default(),
            &CancellationToken::new(),
        )
        .await
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn dex_trades_with_single_token_filter() {
    let s = settings(
        r#"
server:
  address: corecast.bitquery.io
  authorization: real-token
stream:
  type: dex_trades
filters:
  tokens: ["TOKEN_A"]
"#,
    );
    let mut api = FakeApi::replying(2);
    let report = Dispatcher::with_defaults()
        .dispatch(
            &s.stream.stream_type,
            &mut api,
            &s.filters,
            ConsumeOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        api.issued,
        vec![Issued::Trades(SubscribeTradesRequest {
            program: None,
            pool: None,
            token: filter(&["TOKEN_A"]),
            trader: None,
        })]
    );
    assert_eq!(report.received, 2);
    assert_eq!(report.end, StreamEnd::Closed);
}

#[tokio::test]
async fn each_tag_reads_only_its_filter_fields() {
    let cases = vec![
        (
            "dex_trades",
            Issued::Trades(SubscribeTradesRequest {
                program: filter(&["P1"]),
                pool: filter(&["L1", "L2"]),
                token: filter(&["T1"]),
                trader: filter(&["R1"]),
            }),
        ),
        (
            "dex_orders",
            Issued::Orders(SubscribeOrdersRequest {
                program: filter(&["P1"]),
                pool: filter(&["L1", "L2"]),
                token: filter(&["T1"]),
                trader: filter(&["R1"]),
            }),
        ),
        (
            "dex_pools",
            Issued::Pools(SubscribePoolsRequest {
                program: filter(&["P1"]),
                pool: filter(&["L1", "L2"]),
                token: filter(&["T1"]),
            }),
        ),
        (
            "transactions",
            Issued::Transactions(SubscribeTransactionsRequest {
                program: filter(&["P1"]),
                signer: filter(&["G1"]),
            }),
        ),
        (
            "transfers",
            Issued::Transfers(SubscribeTransfersRequest {
                sender: filter(&["S1"]),
                receiver: filter(&["V1"]),
                token: filter(&["T1"]),
            }),
        ),
        (
            "balances",
            Issued::Balances(SubscribeBalanceUpdateRequest {
                address: filter(&["A1"]),
                token: filter(&["T1"]),
            }),
        ),
    ];

    for (tag, expected) in cases {
        let mut api = FakeApi::replying(1);
        let report = run_tag(tag, &mut api).await.unwrap();
        assert_eq!(api.issued, vec![expected], "tag {tag}");
        assert_eq!(report.received, 1, "tag {tag}");
    }
}

#[tokio::test]
async fn unknown_type_fails_without_subscribing() {
    let mut api = FakeApi::replying(1);
    let err = run_tag("unknown_type", &mut api).await.unwrap_err();

    assert!(api.issued.is_empty());
    match err {
        DispatchError::UnknownStreamType { tag, supported } => {
            assert_eq!(tag, "unknown_type");
            assert_eq!(
                supported,
                "dex_trades|dex_orders|dex_pools|transactions|transfers|balances"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn rejected_subscribe_is_a_dispatch_error() {
    let mut api = FakeApi {
        reject: Some(Status::invalid_argument("at least one filter must be specified")),
        ..Default::default()
    };
    let err = run_tag("transfers", &mut api).await.unwrap_err();

    assert_eq!(api.issued.len(), 1);
    assert!(matches!(
        err,
        DispatchError::Subscribe { tag: "transfers", ref status }
            if status.code() == tonic::Code::InvalidArgument
    ));
}

#[tokio::test]
async fn empty_filters_are_sent_unchanged() {
    let s = settings("server:\n  address: a:1\nstream:\n  type: balances\n");
    let mut api = FakeApi::replying(0);
    let report = Dispatcher::with_defaults()
        .dispatch(
            "balances",
            &mut api,
            &s.filters,
            ConsumeOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        api.issued,
        vec![Issued::Balances(SubscribeBalanceUpdateRequest::default())]
    );
    assert_eq!(report.end, StreamEnd::Closed);
}

#[tokio::test]
async fn stream_failure_after_messages_is_not_fatal() {
    let mut api = FakeApi {
        messages: 3,
        stream_error: Some(Status::unavailable("transport drop")),
        ..Default::default()
    };
    let report = run_tag("transactions", &mut api).await.unwrap();

    assert_eq!(report.received, 3);
    assert!(matches!(report.end, StreamEnd::Failed(_)));
}

#[tokio::test]
async fn cancelled_run_reports_cancelled() {
    let s = settings(&ALL_FILTERS.replace("TAG", "dex_pools"));
    let cancel = CancellationToken::new();
    cancel.cancel();
    let mut api = FakeApi::replying(10);

    let report = Dispatcher::with_defaults()
        .dispatch("dex_pools", &mut api, &s.filters, ConsumeOptions::default(), &cancel)
        .await
        .unwrap();

    assert!(api.issued.is_empty());
    assert_eq!(report.received, 0);
    assert_eq!(report.end, StreamEnd::Cancelled);
}

/// Subscribe calls that never resolve, like a server holding the response
/// headers until the first matching event.
struct StalledApi;

#[async_trait]
impl CoreCastApi for StalledApi {
    async fn dex_trades(
        &mut self,
        _: SubscribeTradesRequest,
    ) -> Result<EventStream<DexTradeEventMessage>, Status> {
        future::pending().await
    }

    async fn dex_orders(
        &mut self,
        _: SubscribeOrdersRequest,
    ) -> Result<EventStream<DexOrderEventMessage>, Status> {
        future::pending().await
    }

    async fn dex_pools(
        &mut self,
        _: SubscribePoolsRequest,
    ) -> Result<EventStream<DexPoolEventMessage>, Status> {
        future::pending().await
    }

    async fn transactions(
        &mut self,
        _: SubscribeTransactionsRequest,
    ) -> Result<EventStream<ParsedIdlTransactionMessage>, Status> {
        future::pending().await
    }

    async fn transfers(
        &mut self,
        _: SubscribeTransfersRequest,
    ) -> Result<EventStream<TransferTxMessage>, Status> {
        future::pending().await
    }

    async fn balances(
        &mut self,
        _: SubscribeBalanceUpdateRequest,
    ) -> Result<EventStream<BalanceUpdateTxMessage>, Status> {
        future::pending().await
    }
}

#[tokio::test]
async fn cancel_interrupts_pending_subscribe() {
    let s = settings(&ALL_FILTERS.replace("TAG", "dex_trades"));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let mut api = StalledApi;
    let report = tokio::time::timeout(
        Duration::from_secs(2),
        Dispatcher::with_defaults().dispatch(
            "dex_trades",
            &mut api,
            &s.filters,
            ConsumeOptions::default(),
            &cancel,
        ),
    )
    .await
    .expect("dispatch returns after cancellation")
    .unwrap();

    assert_eq!(report.received, 0);
    assert_eq!(report.end, StreamEnd::Cancelled);
}
