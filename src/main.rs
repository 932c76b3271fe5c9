use anyhow::Result;
use log::info;
use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::prelude::*;

use qrcodegen_bot::bot::{callback_handler, message_handler};
use qrcodegen_bot::config::AppConfig;
use qrcodegen_bot::dialogue::QrDialogueState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Plain env_logger output by default; JSON traces when the telemetry
    // sink is enabled.
    if config.telemetry_enabled {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
        tracing::info!(
            token_set = config.telemetry_token.is_some(),
            "Telemetry sink enabled"
        );
    } else {
        env_logger::init();
    }

    info!("Starting QR code generator Telegram bot");

    let bot = Bot::new(config.telegram_token);

    let handler = dialogue::enter::<Update, InMemStorage<QrDialogueState>, QrDialogueState, _>()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    info!("Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<QrDialogueState>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
