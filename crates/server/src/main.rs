use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardscout_core::{
    load_config, load_default_config, validate_config, CardSearchService, Config,
    MediaWikiClient, WikiLinks, WikiSearch,
};
use cardscout_server::api::{create_router, handlers::VERSION};
use cardscout_server::browser;
use cardscout_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("cardscout {}", VERSION);

    let config = load_app_config()?;
    validate_config(&config).context("Configuration validation failed")?;
    info!("Wiki API: {}", config.wiki.api_url());

    let wiki: Arc<dyn WikiSearch> = Arc::new(
        MediaWikiClient::new(&config.wiki).context("Failed to create wiki client")?,
    );
    let search = CardSearchService::new(wiki, WikiLinks::from_config(&config.wiki));

    let app = create_router(Arc::new(AppState::new(search)));

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            bail!(
                "Port {} is already in use. Stop the other process or choose another port \
                 (server.port in config.toml, or CARDSCOUT_SERVER__PORT)",
                config.server.port
            );
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!("Failed to bind to {}", addr)));
        }
    };

    let url = config.server.local_url();
    info!("Serving on {}", url);

    let browser_task = if config.server.open_browser {
        Some(browser::spawn_open(
            url,
            Duration::from_millis(config.server.browser_delay_ms),
        ))
    } else {
        None
    };

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(task) = browser_task {
        task.abort();
    }
    info!("Server stopped");

    Ok(())
}

/// Config from `CARDSCOUT_CONFIG`, else `config.toml` when present, else defaults.
/// Environment overrides apply in every case.
fn load_app_config() -> Result<Config> {
    if let Ok(path) = std::env::var("CARDSCOUT_CONFIG") {
        let path = PathBuf::from(path);
        info!("Loading configuration from {:?}", path);
        return load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let default_path = PathBuf::from("config.toml");
    if default_path.exists() {
        info!("Loading configuration from {:?}", default_path);
        load_config(&default_path)
            .with_context(|| format!("Failed to load config from {:?}", default_path))
    } else {
        info!("No config.toml found, using defaults");
        load_default_config().context("Failed to load default config")
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
