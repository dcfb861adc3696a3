//! Jeopardy Bot - Main entry point.

use anyhow::Context;
use game_store::GameStore;
use issue_client::IssueClient;
use jeopardy_bot::api::{create_router, AppState};
use jeopardy_bot::commands::*;
use jeopardy_bot::config::Config;
use jeopardy_bot::error::BotResult;
use jeopardy_bot::router::CommandTable;
use score_store::ScoreStore;
use std::net::SocketAddr;
use std::sync::Arc;
use telegram_client::TelegramClient;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trivia_client::TriviaClient;
use uuid::Uuid;

#[tokio::main]
async fn main() -> BotResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Jeopardy Bot...");

    // Initialize clients
    let telegram = Arc::new(
        TelegramClient::new(
            &config.telegram.api_key,
            &config.telegram.api_base_url,
            config.telegram.timeout,
        )
        .context("Failed to create Telegram client")?,
    );

    let trivia = Arc::new(
        TriviaClient::new(&config.trivia.source_url, config.trivia.timeout)
            .context("Failed to create trivia client")?,
    );

    let issues = Arc::new(
        IssueClient::new(
            &config.github.token,
            &config.github.api_base_url,
            &config.github.owner,
            &config.github.repo,
            config.github.timeout,
        )
        .context("Failed to create issue client")?,
    );

    let scores = Arc::new(
        ScoreStore::connect(&config.scores.redis_url, &config.scores.namespace).await?,
    );

    let games = GameStore::new();

    // Health checks
    if !telegram.health_check().await {
        error!(
            "Telegram API not reachable at {}",
            config.telegram.api_base_url
        );
        return Err(anyhow::anyhow!("Telegram API not reachable").into());
    }
    info!("Telegram API healthy");

    if trivia.health_check().await {
        info!("Trivia source healthy: {}", config.trivia.source_url);
    } else {
        warn!("Trivia source health check failed - will retry on requests");
    }

    // Register the webhook under a freshly generated secret path
    let webhook_token = Uuid::new_v4().to_string();
    let webhook_url = format!(
        "{}/{}",
        config.telegram.webhook_base_url.trim_end_matches('/'),
        webhook_token
    );
    telegram.set_webhook(&webhook_url).await?;
    info!("Webhook registered at {}", webhook_url);

    // Build the command table
    let handlers: Vec<Arc<dyn Command>> = vec![
        Arc::new(JeopardyCommand::new(trivia.clone(), games.clone())),
        Arc::new(AnswerCommand::new(games.clone(), scores.clone())),
        Arc::new(GiveUpCommand::new(games.clone())),
        Arc::new(ScoreCommand::new(scores.clone())),
        Arc::new(VersionCommand::new(config.bot.changelog_path.clone())),
        Arc::new(ChangelogCommand::new(config.bot.changelog_path.clone())),
        Arc::new(FlagCommand::new(games.clone(), issues.clone())),
    ];
    let commands = CommandTable::new(handlers);
    info!("Registered {} command keywords", commands.len());

    // Create application state and router
    let state = AppState {
        commands: Arc::new(commands),
        telegram,
        issues,
        games,
        bot_name: config.bot.name.to_lowercase(),
        webhook_token,
    };
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
