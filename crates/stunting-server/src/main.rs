use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use stunting_common::config::ServerConfig;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Static host for the stunting surveillance web front end
#[derive(Parser)]
#[command(name = "stunting-server")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "stunting.toml")]
    config: PathBuf,

    /// Log level, overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site (default)
    Serve {
        /// Override listen address
        #[arg(long)]
        listen: Option<String>,

        /// Override site root
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Check the configuration file and exit
    Validate,

    /// Print the effective configuration as TOML
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config).await?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json_logs;

    init_logging(&config.logging.level, config.logging.json)?;
    info!("Stunting web host {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Serve { listen, root }) => run_server(config, listen, root).await,
        None => run_server(config, None, None).await,
        Some(Commands::Validate) => {
            config.validate().map_err(|e| anyhow!(e))?;
            println!("Configuration is valid: {}", cli.config.display());
            Ok(())
        }
        Some(Commands::Show) => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn init_logging(level: &str, json_logs: bool) -> Result<()> {
    let level_filter = level
        .parse::<tracing::Level>()
        .map_err(|_| anyhow!("Invalid log level: {}", level))?;

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(level_filter));

    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    Ok(())
}

async fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        // logging is not up yet
        eprintln!("Configuration file not found: {}, using defaults", path.display());
        return Ok(ServerConfig::default());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ServerConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}

async fn run_server(mut config: ServerConfig, listen: Option<String>, root: Option<PathBuf>) -> Result<()> {
    if let Some(listen) = listen {
        config.server.listen_addr = listen;
    }
    if let Some(root) = root {
        config.site.root = root;
    }
    config.validate().map_err(|e| anyhow!(e))?;

    if !config.site.root.join("index.html").exists() {
        warn!("No index.html under {}", config.site.root.display());
    }

    stunting_server::serve(&config, wait_for_shutdown()).await
}

async fn wait_for_shutdown() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
