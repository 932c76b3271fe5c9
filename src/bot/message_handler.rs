//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use teloxide::prelude::*;
use tracing::debug;

// Import localization
use crate::localization::t;

// Import dialogue types
use crate::dialogue::{QrDialogue, QrDialogueState};

// Import dialogue manager functions
use super::dialogue_manager::{
    handle_svg_url_input, handle_text_input, handle_url_input, handle_vcard_company_input,
    handle_vcard_email_input, handle_vcard_name_input, handle_vcard_phone_input,
    handle_vcard_surname_input, handle_vcard_title_input, handle_vcard_website_input,
    handle_wifi_password_input, handle_wifi_ssid_input, send_main_menu,
};

pub async fn message_handler(bot: Bot, msg: Message, dialogue: QrDialogue) -> Result<()> {
    if let Some(text) = msg.text() {
        handle_text_message(&bot, &msg, dialogue, text).await?;
    } else {
        // Only text drives the flows; other message kinds are ignored.
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
    }

    Ok(())
}

async fn handle_text_message(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    text: &str,
) -> Result<()> {
    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    // Commands are recognized before state dispatch, so /start always
    // returns the user to the menu even in the middle of a flow.
    if text == "/start" {
        bot.send_message(msg.chat.id, t("welcome")).await?;
        return send_main_menu(bot, msg.chat.id, &dialogue).await;
    }

    if text == "/more" {
        return send_main_menu(bot, msg.chat.id, &dialogue).await;
    }

    // Check dialogue state and route to the flow handler for the step
    let dialogue_state = dialogue.get().await?;
    match dialogue_state {
        Some(QrDialogueState::AwaitingUrl) => handle_url_input(bot, msg, dialogue, text).await,
        Some(QrDialogueState::AwaitingSvgUrl) => {
            handle_svg_url_input(bot, msg, dialogue, text).await
        }
        Some(QrDialogueState::AwaitingText) => handle_text_input(bot, msg, dialogue, text).await,
        Some(QrDialogueState::AwaitingWifiSsid) => {
            handle_wifi_ssid_input(bot, msg, dialogue, text).await
        }
        Some(QrDialogueState::AwaitingWifiPassword { ssid }) => {
            handle_wifi_password_input(bot, msg, dialogue, text, ssid).await
        }
        Some(QrDialogueState::AwaitingVcardName) => {
            handle_vcard_name_input(bot, msg, dialogue, text).await
        }
        Some(QrDialogueState::AwaitingVcardSurname { name }) => {
            handle_vcard_surname_input(bot, msg, dialogue, text, name).await
        }
        Some(QrDialogueState::AwaitingVcardPhone { name, surname }) => {
            handle_vcard_phone_input(bot, msg, dialogue, text, name, surname).await
        }
        Some(QrDialogueState::AwaitingVcardEmail {
            name,
            surname,
            phone_number,
        }) => handle_vcard_email_input(bot, msg, dialogue, text, name, surname, phone_number).await,
        Some(QrDialogueState::AwaitingVcardCompany {
            name,
            surname,
            phone_number,
            email,
        }) => {
            handle_vcard_company_input(bot, msg, dialogue, text, name, surname, phone_number, email)
                .await
        }
        Some(QrDialogueState::AwaitingVcardTitle {
            name,
            surname,
            phone_number,
            email,
            company,
        }) => {
            handle_vcard_title_input(
                bot,
                msg,
                dialogue,
                text,
                name,
                surname,
                phone_number,
                email,
                company,
            )
            .await
        }
        Some(QrDialogueState::AwaitingVcardWebsite {
            name,
            surname,
            phone_number,
            email,
            company,
            title,
        }) => {
            handle_vcard_website_input(
                bot,
                msg,
                dialogue,
                text,
                name,
                surname,
                phone_number,
                email,
                company,
                title,
            )
            .await
        }
        Some(QrDialogueState::Idle) | None => {
            // No flow in progress, fall back to the main menu
            send_main_menu(bot, msg.chat.id, &dialogue).await
        }
    }
}
