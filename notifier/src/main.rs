use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weekend_notifier::{
    config::{mask_secret, Config},
    handlers,
    services::notifier::NotificationOrchestrator,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weekend_notifier=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        holidays_api_url = %config.holidays_api_url,
        holidays_api_key = %mask_secret(&config.holidays_api_key),
        subscribers_api_url = %config.subscribers_api_url,
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        email_id = %config.smtp.username,
        email_pwd = %mask_secret(&config.smtp.password),
        smtp_skip_send = config.smtp.skip_send,
        template_path = %config.template_path,
        time_zone = %config.time_zone,
        short_lookahead_days = config.short_lookahead_days,
        long_lookahead_days = config.long_lookahead_days,
        "Loaded configuration from environment/.env"
    );

    let notifier = NotificationOrchestrator::from_config(&config).await?;
    let bind_addr = config.bind_addr.clone();
    let app = handlers::router(AppState::new(notifier, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
