//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use tracing::debug;

// Import localization
use crate::localization::t;

// Import dialogue types
use crate::dialogue::{QrDialogue, QrDialogueState};

// Import dialogue manager functions
use super::dialogue_manager::send_main_menu;

// Import UI builder functions
use super::ui_builder::about_text;

/// Handle callback queries from the main menu keyboard.
///
/// Each flow tag seeds the dialogue into the flow's first step and sends
/// its first prompt. Unknown tags are ignored.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, dialogue: QrDialogue) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query from user");

    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;

        match q.data.as_deref().unwrap_or("") {
            "url_qr" => {
                bot.send_message(chat_id, t("prompt-url")).await?;
                dialogue.update(QrDialogueState::AwaitingUrl).await?;
            }
            "svg_url_qr" => {
                bot.send_message(chat_id, t("prompt-url")).await?;
                dialogue.update(QrDialogueState::AwaitingSvgUrl).await?;
            }
            "text_qr" => {
                bot.send_message(chat_id, t("prompt-text")).await?;
                dialogue.update(QrDialogueState::AwaitingText).await?;
            }
            "wifi_qr" => {
                bot.send_message(chat_id, t("prompt-wifi-ssid")).await?;
                dialogue.update(QrDialogueState::AwaitingWifiSsid).await?;
            }
            "contact_info" => {
                bot.send_message(chat_id, t("prompt-vcard-name")).await?;
                dialogue.update(QrDialogueState::AwaitingVcardName).await?;
            }
            "about" => {
                bot.send_message(chat_id, about_text()).await?;
            }
            "back" => {
                bot.send_message(chat_id, t("welcome")).await?;
                send_main_menu(&bot, chat_id, &dialogue).await?;
            }
            other => {
                debug!(user_id = %q.from.id, tag = other, "Ignoring unknown callback tag");
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
