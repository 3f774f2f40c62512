//! Item service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use item_service::api::{create_router, AppState};
use item_service::config::{Config, LogFormat};
use item_service::error::ServiceError;
use item_service::metrics;
use item_service::utils::shutdown_signal;

/// Mock in-memory item HTTP service.
#[derive(Parser, Debug)]
#[command(name = "item-service")]
#[command(about = "Mock item API for exercising client behavior")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format (pretty or json).
    #[arg(long, global = true, env = "LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the item API (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address (overrides BIND_ADDRESS).
        #[arg(long)]
        bind: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    init_tracing(&config, args.verbose, args.log_format);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Serve { port, bind }) => cmd_serve(config, port, bind).await,
        None => cmd_serve(config, args.port, None).await,
    }
}

fn init_tracing(config: &Config, verbose: bool, format_override: Option<LogFormat>) {
    let filter = if verbose || config.verbose {
        EnvFilter::new("item_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    match format_override.unwrap_or(config.log_format) {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ITEM SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(ServiceError::InvalidConfig(e).into());
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_address);
    println!("  Port: {}", config.port);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled { "Enabled" } else { "Disabled" }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Serve the item API until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    port_override: Option<u16>,
    bind_override: Option<String>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }
    if let Some(bind) = bind_override {
        config.bind_address = bind;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServiceError::InvalidConfig(e).into());
    }

    let mut app_state = AppState::new();
    if config.metrics_enabled {
        app_state = app_state.with_metrics(metrics::install_recorder()?);
        info!("Prometheus metrics available at /metrics");
    }

    let addr = config.socket_addr().map_err(ServiceError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await.map_err(ServiceError::from)?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::from)?;

    info!("Item service stopped");
    Ok(())
}
