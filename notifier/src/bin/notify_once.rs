use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weekend_notifier::{
    config::Config, handlers::invoke::run_invocation, services::notifier::NotificationOrchestrator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weekend_notifier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    let notifier = NotificationOrchestrator::from_config(&config).await?;

    let response = run_invocation(&notifier, config.reference_date()).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
