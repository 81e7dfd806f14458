use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sol_airdrop::airdrop::{
    AirdropAmount, AirdropRequest, AirdropService, ConfirmationPoller, Network,
};
use sol_airdrop::config::{load_config, FaucetConfig};
use sol_airdrop::ledger::SolanaRpc;
use sol_airdrop::limiter::{FixedWindowLimiter, JsonFileStore, SystemClock};

#[derive(Parser)]
#[command(name = "sol-airdrop")]
#[command(about = "Request test-network SOL airdrops with a local rate limit", long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, default_value = "sol-airdrop.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an airdrop to a wallet address
    Request {
        /// Wallet address to credit
        #[arg(long)]
        address: String,

        /// Target test network
        #[arg(long, value_enum, default_value_t = Network::Devnet)]
        network: Network,

        /// Airdrop size in SOL (1 or 2)
        #[arg(long, default_value = "1")]
        amount: AirdropAmount,

        /// Override the RPC endpoint for the selected network
        #[arg(long)]
        rpc_url: Option<String>,
    },
    /// Show how many requests remain in the current window
    Limit,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sol_airdrop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: FaucetConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(&config.store.path);
    let limiter = FixedWindowLimiter::new(
        store,
        SystemClock,
        config.rate_limit.max_requests,
        config.rate_limit.window_ms,
    );

    match command {
        Commands::Request {
            address,
            network,
            amount,
            rpc_url,
        } => {
            let url = rpc_url.unwrap_or_else(|| config.rpc.url_for(network).to_string());
            tracing::info!(%network, %url, "Connecting to RPC endpoint");

            let rpc = Arc::new(SolanaRpc::new(
                url,
                Duration::from_secs(config.rpc.request_timeout_secs),
            ));
            let poller = ConfirmationPoller::new(
                Duration::from_millis(config.confirmation.poll_interval_ms),
                Duration::from_millis(config.confirmation.timeout_ms),
            );
            let service = AirdropService::new(rpc, limiter, poller);

            let request = AirdropRequest {
                address,
                network,
                amount,
            };
            let receipt = service.request_airdrop(&request).await?;

            println!("{}", receipt.summary());
            println!("{}", receipt.explorer_url());
        }
        Commands::Limit => {
            let remaining = limiter.remaining()?;
            println!(
                "{remaining} of {} airdrop requests available in the current window",
                limiter.max_requests()
            );
        }
    }

    Ok(())
}
