//! corecast — subscribe to one CoreCast feed and log every event.
//!
//! ```bash
//! corecast --config ./configs/config.yaml
//! corecast --config prod.yaml --log-level debug --json
//! corecast --measure-latency
//! ```
//!
//! Exit status is 0 when the stream ends or the run is interrupted, 1 on a
//! config, connection, subscribe or unknown-stream-type failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use corecast_core::config::DEFAULT_CONFIG_PATH;
use corecast_core::{ConsumeOptions, Dispatcher, Settings};
use corecast_grpc::{GrpcClientConfig, GrpcCoreCast};

mod logging;
mod shutdown;

#[derive(Parser)]
#[command(
    name = "corecast",
    about = "Stream Solana DEX, transfer and balance events from CoreCast",
    version
)]
struct Cli {
    /// Path to the YAML settings document
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log filter directive, e.g. "debug" or "info,corecast_core=trace"
    #[arg(long, value_parser = logging::parse_directives)]
    log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    json: bool,

    /// Log each message's slot with its receive timestamp
    #[arg(long)]
    measure_latency: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref(), cli.json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let dispatcher = Dispatcher::with_defaults();
    let handler = dispatcher.resolve(&settings.stream.stream_type)?;

    let cancel = CancellationToken::new();
    let watcher = shutdown::spawn_watcher(cancel.clone());

    let transport = GrpcClientConfig::default();
    let connected = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            info!("interrupted while connecting");
            let _ = watcher.await;
            return Ok(());
        }
        connected = GrpcCoreCast::connect(&settings.server, &transport) => connected,
    };
    let mut api = match connected {
        Ok(api) => api,
        Err(e) => {
            cancel.cancel();
            let _ = watcher.await;
            return Err(e).context("connecting to CoreCast");
        }
    };

    let opts = ConsumeOptions {
        measure_latency: cli.measure_latency,
    };
    let outcome = handler.run(&mut api, &settings.filters, opts, &cancel).await;

    // Stop the watcher and release the channel on every path.
    cancel.cancel();
    let _ = watcher.await;
    drop(api);

    let report = outcome?;
    debug!(received = report.received, end = %report.end, "stream finished");
    info!(received = report.received, "done");
    Ok(())
}
