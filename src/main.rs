use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pingwatch::{LandmarkSampler, LogSink, Monitor};

#[derive(Parser, Debug)]
#[command(name = "pingwatch")]
#[command(about = "Log connectivity periods to a landmark, ignoring outages caused by a down local interface")]
struct Args {
    /// Address of the landmark to probe
    #[arg(short, long, default_value = "8.8.8.8")]
    landmark: String,

    /// Local interface whose liveness gates the probe
    #[arg(short, long, default_value = "en0")]
    iface: String,

    /// Echo probe timeout in seconds
    #[arg(short, long, default_value = "3")]
    timeout: u64,

    /// Seconds between sampling ticks
    #[arg(short, long, default_value = "1")]
    period: u64,

    /// Trace every sampling tick on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path of the append-only report log
    #[arg(short, long, default_value = "ping-monitor.log")]
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // A log file that cannot be opened makes the whole run pointless,
    // so this fails before the first probe.
    let sink = LogSink::open(&args.output).await?;
    let sampler = LandmarkSampler::new(
        &args.landmark,
        &args.iface,
        Duration::from_secs(args.timeout),
    );
    let mut monitor = Monitor::new(
        Box::new(sampler),
        sink,
        Duration::from_secs(args.period),
    );

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(wait_for_shutdown(stop_tx));

    info!(landmark = %args.landmark, iface = %args.iface, "monitoring");
    monitor.run(stop_rx).await
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pingwatch=debug" } else { "pingwatch=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Raise the stop flag on SIGINT or SIGTERM.
///
/// The monitor finishes its tick in progress and flushes before
/// exiting; a forced kill bypasses the flush path entirely.
#[cfg(unix)]
async fn wait_for_shutdown(stop: watch::Sender<bool>) {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(_) => {
            let _ = tokio::signal::ctrl_c().await;
        }
    }
    info!("shutdown requested");
    let _ = stop.send(true);
}

#[cfg(not(unix))]
async fn wait_for_shutdown(stop: watch::Sender<bool>) {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
    let _ = stop.send(true);
}
