//! InvestHub Mini
//!
//! Terminal dashboard client. Loads every dashboard section once, then
//! renders the selected tab; `--interactive` switches tabs from stdin
//! without refetching.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investhub_mini::config::{generate_default_config, LoadedConfig, LoggingConfig};
use investhub_mini::render::{render_json, render_text};
use investhub_mini::{
    get_identity_token, ApiClient, Config, EnvHost, HostBridge, StaticHost, Tab, ViewShell,
};

#[derive(Parser)]
#[command(name = "investhub-mini")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "InvestHub Mini - markets, crypto, TON, NFT, portfolio and news dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tab to show first
    #[arg(short, long, default_value = "dashboard", global = true)]
    pub tab: String,

    /// API base URL (overrides config and INVESTHUB_API_BASE)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Session init-data to send instead of the host-provided one
    #[arg(long, global = true)]
    pub init_data: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Read tab names from stdin after loading ("quit" to exit)
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {:?}", path))?;
                eprintln!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config;
    if let Some(url) = &cli.api_base {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("InvestHub Mini v{}", env!("CARGO_PKG_VERSION"));

    for e in &loaded.skipped {
        tracing::warn!("Skipping config file: {}", e);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    let tab: Tab = cli.tab.parse()?;

    let host: Option<Box<dyn HostBridge>> = match &cli.init_data {
        Some(token) => Some(Box::new(StaticHost::new(token.clone()))),
        None => EnvHost::detect(&config.host.init_data_env)
            .map(|h| Box::new(h) as Box<dyn HostBridge>),
    };
    let token = get_identity_token(host.as_deref());

    let client = ApiClient::new(&config.api.base_url, token).context("building API client")?;

    let mut shell = ViewShell::with_tab(tab);
    shell.mount(&client).await;
    show(&shell, cli.format)?;

    if cli.interactive {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                break;
            }
            match input.parse::<Tab>() {
                Ok(tab) => {
                    shell.select(tab);
                    show(&shell, cli.format)?;
                }
                Err(e) => eprintln!("{}", e),
            }
        }
    }

    Ok(())
}

fn show(shell: &ViewShell, format: OutputFormat) -> anyhow::Result<()> {
    let page = shell.page();
    match format {
        OutputFormat::Text => print!("{}", render_text(&page, shell.loaded_at())),
        OutputFormat::Json => println!("{}", render_json(&page)?),
    }
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("investhub_mini={}", logging.level)),
    );

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
