use sentinel_common::config::AppConfig;
use sentinel_notifier::TelegramNotifier;
use sentinel_poller::poller::Poller;
use sentinel_poller::source::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sentinel_poller=info,sentinel_engine=info,sentinel_notifier=info".into()
            }),
        )
        .json()
        .init();

    tracing::info!("ReviewSentinel starting...");

    // Load configuration
    let config = AppConfig::from_env()?;

    let Some(credentials) = config.credentials() else {
        tracing::error!(
            fatal = true,
            "At least one of PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID is missing. Shutting down."
        );
        anyhow::bail!("missing required credentials");
    };

    let source = ApiClient::new(
        config.api_endpoint.clone(),
        credentials.practicum_token,
        config.http_timeout(),
    )?;
    let notifier = TelegramNotifier::new(&credentials.telegram_token, &credentials.telegram_chat_id);

    let mut poller = Poller::new(source, notifier, config.poll_interval());

    // Run until Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("ReviewSentinel stopped.");
    Ok(())
}
