use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use mahaai_bot::application::handlers::default_router;
use mahaai_bot::domain::traits::Bot;
use mahaai_bot::infrastructure::adapters::telegram::{Poller, TelegramAdapter};
use mahaai_bot::infrastructure::config::Config;
use mahaai_bot::BotError;

#[derive(Parser)]
#[command(name = "mahaai-bot", version)]
#[command(about = "Telegram bot for the MahaAI quiz", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let _cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let config = match Config::load_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run_bot(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_bot(config: Config) -> Result<(), BotError> {
    tracing::info!("Starting mahaai-bot (token: {})", config.redacted_token());

    let mut bot = TelegramAdapter::from_config(&config);
    bot.fetch_bot_info().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let mut router = default_router()?;
    if !info.username.is_empty() {
        router.set_bot_username(&info.username);
    }

    // Register bot commands with Telegram
    if let Err(e) = bot.register_commands(&router.commands()).await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    Poller::new(Arc::new(bot), Arc::new(router))
        .with_timeout(config.poll_timeout_secs)
        .run_until(shutdown_signal())
        .await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
