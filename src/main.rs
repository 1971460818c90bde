//! # lotline Main Entry Point
//!
//! Terminal auction storefront.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::sync::Mutex;

use anyhow::{Context, Result};
use lotline::cmd_args::CommandLineArgs;
use lotline::config::{get_config_path, StoreConfig};
use lotline::io::{TerminalEventStream, TerminalRenderStream};
use lotline::services::HttpAuctionApi;
use lotline::AppController;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const LOG_ENV_VAR: &str = "LOTLINE_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        anyhow::bail!("lotline needs an interactive terminal");
    }

    let config_path = get_config_path();
    let config = StoreConfig::load(&config_path, cmd_args.profile())?
        .with_api_origin(cmd_args.api_origin());

    init_tracing_subscriber(&config, cmd_args.verbose())?;
    tracing::info!(
        "starting with profile '{}' from '{}', api origin {}",
        cmd_args.profile(),
        config_path,
        config.api_origin
    );

    let api = HttpAuctionApi::new(&config.api_origin, config.request_timeout)?;
    let mut controller = AppController::with_io_streams(
        api,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;

    controller.run().await
}

fn init_tracing_subscriber(config: &StoreConfig, verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={default_level}", env!("CARGO_CRATE_NAME"))))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_target(false);

    // The terminal belongs to the UI, so logs go to a file when one is set
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
