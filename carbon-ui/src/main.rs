use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{debug, info};

use carbon_core::{GenerationSession, MemoryImageHost};
use carbon_ui::logging;
use carbon_ui::{App, ConfigOverrides, EstimatorConfig};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Carbon credit estimator for a single tree.
///
/// Walks through uploading a reference photo and tree photos, simulates a
/// 3D model, and reports the tree's measurements and carbon credits.
/// Commands are read from stdin; type `help` once running.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the simulated 3D model generation, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log filter, e.g. `debug` or `carbon_core=trace`. `RUST_LOG` wins.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not write log records to stderr.
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            processing_delay_ms: self.delay_ms,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            quiet: self.quiet,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = EstimatorConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?
        .apply(cli.overrides());

    logging::init_from_config(&config);
    debug!(?config, "Configuration loaded");

    let session = GenerationSession::new(MemoryImageHost::new(), config.session_config());
    let app = App::new(session);

    info!(
        delay_ms = config.processing_delay_ms,
        "Carbon credits estimator started"
    );
    app.run(BufReader::new(tokio::io::stdin()), std::io::stdout())
        .await
        .context("command loop failed")?;

    Ok(())
}
