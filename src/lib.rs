use anyhow::Result;
use dotenvy::dotenv;
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub mod catalog;
pub mod commands;
mod config;
pub mod db;
mod handlers;
pub mod health;
pub mod interpreter;
pub mod messages;
pub mod quotes;
pub mod search;
pub mod session;
mod system_info;
mod utils;

#[doc(hidden)]
pub mod tests {
    pub mod util;
}

pub use commands::Command;
pub use config::Config;
pub use db::Database;
pub use handlers::{handle_text, help, show_system_info};
pub use interpreter::Interpreter;
pub use quotes::QuoteClient;

/// Update handler tree: slash commands first, then every other text message.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(dptree::entry().filter_command::<Command>().endpoint(
                |bot: Bot, msg: Message, cmd: Command, interpreter: Interpreter| async move {
                    cmd.dispatch(bot, msg, interpreter).await
                },
            ))
            .branch(dptree::endpoint(handle_text)),
    )
}

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting encouragement bot...");

    // Nothing listens until the configuration is known to be complete.
    let config = Config::from_env()?;

    let db = Database::open(&config.db_url, config.db_timeout).await?;
    let state = db.load_state().await?;
    tracing::info!(
        responding = state.responding,
        custom = state.encouragements.len(),
        "Loaded stored encouragements"
    );

    let quotes = QuoteClient::new(config.quote_url.clone(), config.quote_timeout)?;
    let interpreter = Interpreter::new(db, quotes);

    // --- Health check ---
    let port = config.port;
    tokio::spawn(async move {
        if let Err(err) = health::serve(port).await {
            tracing::error!(error = %err, port, "Health check server stopped");
        }
    });

    // --- Dispatcher ---
    let bot = Bot::new(config.bot_token);
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![interpreter])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
