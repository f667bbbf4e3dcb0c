use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use travel_site::config::Config;
use travel_site::contact::SiteTransport;
use travel_site::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("travel_site=info".parse()?),
        )
        .init();

    info!("Starting travel site");

    // Load configuration from environment
    let config = Config::from_env()?;

    let transport = SiteTransport::from_config(&config);
    match &transport {
        SiteTransport::Webhook(_) => info!("Contact requests go to the configured webhook"),
        SiteTransport::Simulated(_) => info!(
            "No CONTACT_WEBHOOK_URL set, simulating delivery ({}ms)",
            config.simulated_send_delay_ms
        ),
    }

    let addr = format!("0.0.0.0:{}", config.port);
    info!(
        "Serving {} on {} (default locale: {})",
        config.site_url, addr, config.default_locale
    );

    let app = build_router(AppState::new(config, transport));
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
