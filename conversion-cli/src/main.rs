//! # Currency Conversion CLI
//!
//! Binary that wires together all the components:
//! - Parse arguments and resolve the conversion date
//! - Load configuration from file and environment
//! - Build the FastForex client and the JSON output store
//! - Run the interactive session until `end` or an interrupt

mod config;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conversion_hex::{
    ConversionService, PREMATURE_EXIT_WARNING, Session, SessionEnd, inbound::StdioConsole,
};
use conversion_repo::JsonOutputDir;
use conversion_types::ConversionDate;
use fastforex_client::FastForexClient;

#[derive(Parser, Debug)]
#[command(name = "currency-conversion")]
#[command(
    author,
    version,
    about = "Converts user input value from one currency into another into a JSON file",
    long_about = None
)]
struct Cli {
    /// The date format is YYYY-MM-DD. You can also use 'now' as a shorthand for the current system day
    #[arg(short, long)]
    date: String,

    /// Path to the JSON configuration file
    #[arg(long, env = "CONVERSION_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Directory the output file is written to
    #[arg(long, env = "CONVERSION_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// FastForex API key (overrides the config file)
    #[arg(long, env = "FAST_FOREX_API_KEY")]
    api_key: Option<String>,

    /// Base URL of the FastForex API (overrides the config file)
    #[arg(long, env = "FAST_FOREX_API_URL")]
    api_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let today = chrono::Local::now().date_naive();
    let date = ConversionDate::resolve(&cli.date, today)?;

    let config = config::Config::load(&cli.config, cli.api_key, cli.api_url, cli.output_dir)?;

    tracing::info!("Converting at {}", date);
    tracing::info!("Using rate provider: {}", config.api_url);

    let client = FastForexClient::new(&config.api_url, config.api_key)?;
    let store = JsonOutputDir::new(config.output_dir);
    let service = ConversionService::new(client, store);

    let mut session = Session::new(date);
    let mut console = StdioConsole::new();

    let end = service
        .run_until_interrupted(&mut session, &mut console, interrupt_signal())
        .await?;

    if end == SessionEnd::Interrupted {
        eprintln!("\n{PREMATURE_EXIT_WARNING}");
    }
    std::process::exit(end.exit_code());
}

async fn interrupt_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
