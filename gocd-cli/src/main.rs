//! GoCD CLI
//!
//! Command-line interface for inspecting and operating a GoCD server.

mod commands;
mod config;
mod display;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gocd")]
#[command(about = "GoCD server CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, env = "GOCD_SERVER_URL", default_value = "http://localhost:8153")]
    server: String,

    /// Username for Basic auth
    #[arg(long, env = "GOCD_USERNAME")]
    username: Option<String>,

    /// Password for Basic auth
    #[arg(long, env = "GOCD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "GOCD_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Log requests and responses
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gocd=debug,gocd_client=debug"
    } else {
        "gocd=warn,gocd_client=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        server_url: cli.server,
        username: cli.username,
        password: cli.password,
        timeout_secs: cli.timeout,
    };
    debug!(server = %config.server_url, "using server");

    handle_command(cli.command, &config).await
}
