//! The receive loop shared by every feed.
//!
//! One loop runs per process. It renders messages in delivery order until
//! the stream ends, a receive fails, or the run's cancellation token fires.
//! None of these endings is an error for the caller.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::api::EventStream;
use crate::feed::Feed;
use crate::render::EventSummary;

/// Per-run switches for the consumer loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumeOptions {
    /// Log each message's slot with its wall-clock receive time.
    pub measure_latency: bool,
}

/// Why the consumer loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEnd {
    /// The server finished the stream.
    Closed,
    /// A receive failed: transport drop or remote error.
    Failed(String),
    /// The run's cancellation token fired.
    Cancelled,
}

impl fmt::Display for StreamEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed by server"),
            Self::Failed(status) => write!(f, "failed: {status}"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumeReport {
    /// Messages rendered before the stream ended.
    pub received: u64,
    pub end: StreamEnd,
}

/// Drains `stream`, rendering each message as `F`'s summary.
pub async fn consume<F: Feed>(
    mut stream: EventStream<F::Message>,
    cancel: &CancellationToken,
    opts: ConsumeOptions,
) -> ConsumeReport {
    info!(feed = F::LABEL, "streaming {}; press Ctrl+C to stop", F::LABEL);
    let mut received = 0u64;

    let end = loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break StreamEnd::Cancelled,

            next = stream.next() => match next {
                Some(Ok(msg)) => {
                    received += 1;
                    let summary = F::summarize(&msg);
                    if opts.measure_latency {
                        info!(
                            slot = summary.slot(),
                            received_at = %Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
                            "received"
                        );
                    }
                    summary.emit();
                }
                Some(Err(status)) => break StreamEnd::Failed(status.to_string()),
                None => break StreamEnd::Closed,
            },
        }
    };

    debug!(feed = F::LABEL, received, end = %end, "stream end");
    ConsumeReport { received, end }
}
