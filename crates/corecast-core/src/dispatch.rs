//! Subscription dispatcher: maps a stream-type tag to its feed, issues the
//! one subscribe call of the run and hands the stream to the consumer loop.

use std::marker::PhantomData;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::api::CoreCastApi;
use crate::config::FilterSet;
use crate::consumer::{consume, ConsumeOptions, ConsumeReport, StreamEnd};
use crate::error::DispatchError;
use crate::feed::{Balances, Feed, Orders, Pools, Trades, Transactions, Transfers};

/// A registered stream kind, type-erased so the dispatcher can hold all six.
#[async_trait]
pub trait StreamHandler: Send + Sync {
    /// The `stream.type` value this handler answers to.
    fn tag(&self) -> &'static str;

    /// Subscribes and consumes until the stream ends.
    async fn run(
        &self,
        api: &mut dyn CoreCastApi,
        filters: &FilterSet,
        opts: ConsumeOptions,
        cancel: &CancellationToken,
    ) -> Result<ConsumeReport, DispatchError>;
}

/// [`StreamHandler`] for any [`Feed`].
pub struct FeedHandler<F>(PhantomData<fn() -> F>);

impl<F> FeedHandler<F> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Default for FeedHandler<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<F: Feed> StreamHandler for FeedHandler<F> {
    fn tag(&self) -> &'static str {
        F::TAG
    }

    async fn run(
        &self,
        api: &mut dyn CoreCastApi,
        filters: &FilterSet,
        opts: ConsumeOptions,
        cancel: &CancellationToken,
    ) -> Result<ConsumeReport, DispatchError> {
        let request = F::build_request(filters);
        info!(request = ?request, "{} subscribe", F::LABEL);

        // The subscribe call may not resolve until the first event arrives.
        let opened = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("{} cancelled before the stream opened", F::LABEL);
                return Ok(ConsumeReport { received: 0, end: StreamEnd::Cancelled });
            }
            opened = F::open(api, request) => opened,
        };
        let stream = opened.map_err(|status| DispatchError::Subscribe { tag: F::TAG, status })?;

        Ok(consume::<F>(stream, cancel, opts).await)
    }
}

/// Registry of stream handlers, looked up by tag.
pub struct Dispatcher {
    handlers: Vec<Box<dyn StreamHandler>>,
}

impl Dispatcher {
    pub fn empty() -> Self {
        Self { handlers: Vec::new() }
    }

    /// All six CoreCast feeds.
    pub fn with_defaults() -> Self {
        Self::empty()
            .register(FeedHandler::<Trades>::new())
            .register(FeedHandler::<Orders>::new())
            .register(FeedHandler::<Pools>::new())
            .register(FeedHandler::<Transactions>::new())
            .register(FeedHandler::<Transfers>::new())
            .register(FeedHandler::<Balances>::new())
    }

    /// Adds a handler. A later handler with an existing tag is never reached.
    pub fn register(mut self, handler: impl StreamHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn get(&self, tag: &str) -> Option<&dyn StreamHandler> {
        self.handlers
            .iter()
            .find(|h| h.tag() == tag)
            .map(|h| h.as_ref())
    }

    /// Registered tags joined with `|`, in registration order.
    pub fn supported(&self) -> String {
        self.handlers
            .iter()
            .map(|h| h.tag())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Like [`get`](Self::get), but an unknown tag is an error naming the
    /// supported set.
    pub fn resolve(&self, tag: &str) -> Result<&dyn StreamHandler, DispatchError> {
        self.get(tag).ok_or_else(|| DispatchError::UnknownStreamType {
            tag: tag.to_string(),
            supported: self.supported(),
        })
    }

    /// Runs the feed selected by `tag`. An unknown tag fails before any
    /// call is made on `api`.
    pub async fn dispatch(
        &self,
        tag: &str,
        api: &mut dyn CoreCastApi,
        filters: &FilterSet,
        opts: ConsumeOptions,
        cancel: &CancellationToken,
    ) -> Result<ConsumeReport, DispatchError> {
        self.resolve(tag)?.run(api, filters, opts, cancel).await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
