//! Contact list service CLI
//!
//! Headless REST server suitable for a systemd unit, a container or a
//! developer shell.
//!
//! ```sh
//! # Run with default config (~/.config/contact-list-service/config.toml)
//! contact-list-service
//!
//! # Custom config path and port
//! contact-list-service --config /etc/contacts/config.toml --port 8081
//!
//! # Validate config without starting
//! contact-list-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use contact_list::config::AppConfig;
use contact_list::infrastructure::redact_url;
use contact_list::server::{init_tracing, ServerHandle, ServerOptions};

/// Contact list REST service.
#[derive(Parser, Debug)]
#[command(
    name = "contact-list-service",
    version,
    about = "REST API for managing contacts",
    long_about = "Contact list service: CRUD and paginated listing of contacts \
                  over HTTP, backed by SQLite, PostgreSQL or memory.\n\n\
                  Default config: ~/.config/contact-list-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CONTACTS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(contact_list::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!(path = %config_path.display(), error = %e, "Failed to load config");
            return Err(e.into());
        }
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", redact_url(&config.database.url));
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!(path = %config_path.display(), "Configuration loaded");

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
