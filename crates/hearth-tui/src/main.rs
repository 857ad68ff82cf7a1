//! Hearth TUI entry point.

use std::path::PathBuf;

use clap::Parser;
use hearth_tui::runtime::Runtime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Hearth terminal chat client
#[derive(Parser, Debug)]
#[command(name = "hearth-tui")]
#[command(about = "Terminal UI for Hearth chat")]
#[command(version)]
struct Args {
    /// Nick used for self-mention highlighting and outgoing messages
    #[arg(short, long, default_value = "guest")]
    nick: String,

    /// Append logs to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::sync::Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let runtime = Runtime::with_sim(args.nick)?;
    Ok(runtime.run().await?)
}
