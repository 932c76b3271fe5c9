//! Dialogue Manager module for handling dialogue state transitions
//!
//! One handler per awaited field. Each handler either advances the
//! dialogue with the next prompt, re-issues an error and stays in the
//! same step, or (on the terminal step of a flow) renders the QR code,
//! sends it and returns the chat to the main menu.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tracing::error;

// Import localization
use crate::localization::t;

// Import dialogue types
use crate::dialogue::{QrDialogue, QrDialogueState};

// Import payload encoders and renderers
use crate::qr::{self, ContactCard};

// Import validators
use crate::validation::{validate_email, validate_password, validate_ssid, validate_url};

// Import UI builder functions
use super::ui_builder::main_menu_keyboard;

/// Send the main menu, abandoning any flow in progress.
pub async fn send_main_menu(bot: &Bot, chat_id: ChatId, dialogue: &QrDialogue) -> Result<()> {
    dialogue.exit().await?;

    bot.send_message(chat_id, t("menu-title"))
        .reply_markup(main_menu_keyboard())
        .await?;

    Ok(())
}

/// Render a payload as PNG and deliver it, then reset to the menu.
///
/// A rendering failure (payload too large for the fixed symbol
/// parameters) is reported with a generic apology and also resets the
/// session, matching the error policy for terminal steps.
async fn reply_with_png(
    bot: &Bot,
    msg: &Message,
    dialogue: &QrDialogue,
    payload: &str,
    caption_key: &str,
) -> Result<()> {
    match qr::render_png(payload) {
        Ok(png) => {
            bot.send_photo(msg.chat.id, InputFile::memory(png))
                .caption(t(caption_key))
                .await?;
        }
        Err(e) => {
            error!(user_id = %msg.chat.id, error = %e, "Failed to render QR code");
            bot.send_message(msg.chat.id, t("error-render-failed"))
                .await?;
        }
    }

    send_main_menu(bot, msg.chat.id, dialogue).await
}

/// Handle URL input for the raster URL flow.
pub async fn handle_url_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
) -> Result<()> {
    match validate_url(input) {
        Ok(url) => reply_with_png(bot, msg, &dialogue, url.as_str(), "caption-qr").await,
        Err(key) => {
            bot.send_message(msg.chat.id, t(key)).await?;
            // Keep dialogue state, user can try again
            Ok(())
        }
    }
}

/// Handle URL input for the SVG flow; the symbol is sent as a document.
pub async fn handle_svg_url_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
) -> Result<()> {
    match validate_url(input) {
        Ok(url) => {
            match qr::render_svg(url.as_str()) {
                Ok(document) => {
                    bot.send_document(
                        msg.chat.id,
                        InputFile::memory(document.into_bytes()).file_name("qrcode.svg"),
                    )
                    .caption(t("caption-qr"))
                    .await?;
                }
                Err(e) => {
                    error!(user_id = %msg.chat.id, error = %e, "Failed to render SVG QR code");
                    bot.send_message(msg.chat.id, t("error-render-failed"))
                        .await?;
                }
            }

            send_main_menu(bot, msg.chat.id, &dialogue).await
        }
        Err(key) => {
            bot.send_message(msg.chat.id, t(key)).await?;
            // Keep dialogue state, user can try again
            Ok(())
        }
    }
}

/// Handle input for the free-text flow. Any text is accepted verbatim.
pub async fn handle_text_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
) -> Result<()> {
    reply_with_png(bot, msg, &dialogue, input, "caption-qr").await
}

/// Handle SSID input during the Wi-Fi flow.
pub async fn handle_wifi_ssid_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
) -> Result<()> {
    match validate_ssid(input) {
        Ok(ssid) => {
            bot.send_message(msg.chat.id, t("prompt-wifi-password"))
                .await?;

            dialogue
                .update(QrDialogueState::AwaitingWifiPassword {
                    ssid: ssid.into_inner(),
                })
                .await?;
        }
        Err(key) => {
            bot.send_message(msg.chat.id, t(key)).await?;
            // Keep dialogue state, user can try again
        }
    }

    Ok(())
}

/// Handle password input, the terminal step of the Wi-Fi flow.
///
/// Both fields are re-checked here, which is why the failure message
/// names the SSID and the password even though the SSID was validated at
/// its own step.
pub async fn handle_wifi_password_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    ssid: String,
) -> Result<()> {
    match (validate_ssid(&ssid), validate_password(input)) {
        (Ok(ssid), Ok(password)) => {
            let payload = qr::wifi_payload(&ssid, &password);
            reply_with_png(bot, msg, &dialogue, &payload, "caption-wifi").await
        }
        _ => {
            bot.send_message(msg.chat.id, t("error-invalid-wifi"))
                .await?;
            // Keep dialogue state, user can try again
            Ok(())
        }
    }
}

/// Handle name input during the contact flow. Accepted as free text.
pub async fn handle_vcard_name_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
) -> Result<()> {
    bot.send_message(msg.chat.id, t("prompt-vcard-surname"))
        .await?;

    dialogue
        .update(QrDialogueState::AwaitingVcardSurname {
            name: input.to_string(),
        })
        .await?;

    Ok(())
}

/// Handle surname input during the contact flow.
pub async fn handle_vcard_surname_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    name: String,
) -> Result<()> {
    bot.send_message(msg.chat.id, t("prompt-vcard-phone"))
        .await?;

    dialogue
        .update(QrDialogueState::AwaitingVcardPhone {
            name,
            surname: input.to_string(),
        })
        .await?;

    Ok(())
}

/// Handle phone input during the contact flow. No format checking.
pub async fn handle_vcard_phone_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    name: String,
    surname: String,
) -> Result<()> {
    bot.send_message(msg.chat.id, t("prompt-vcard-email"))
        .await?;

    dialogue
        .update(QrDialogueState::AwaitingVcardEmail {
            name,
            surname,
            phone_number: input.to_string(),
        })
        .await?;

    Ok(())
}

/// Handle email input during the contact flow. The only mid-flow field
/// with validation besides the final URL.
#[allow(clippy::too_many_arguments)]
pub async fn handle_vcard_email_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    name: String,
    surname: String,
    phone_number: String,
) -> Result<()> {
    match validate_email(input) {
        Ok(email) => {
            bot.send_message(msg.chat.id, t("prompt-vcard-company"))
                .await?;

            dialogue
                .update(QrDialogueState::AwaitingVcardCompany {
                    name,
                    surname,
                    phone_number,
                    email: email.into_inner(),
                })
                .await?;
        }
        Err(key) => {
            bot.send_message(msg.chat.id, t(key)).await?;
            // Keep dialogue state, user can try again
        }
    }

    Ok(())
}

/// Handle company input during the contact flow.
#[allow(clippy::too_many_arguments)]
pub async fn handle_vcard_company_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    name: String,
    surname: String,
    phone_number: String,
    email: String,
) -> Result<()> {
    bot.send_message(msg.chat.id, t("prompt-vcard-title"))
        .await?;

    dialogue
        .update(QrDialogueState::AwaitingVcardTitle {
            name,
            surname,
            phone_number,
            email,
            company: input.to_string(),
        })
        .await?;

    Ok(())
}

/// Handle job title input during the contact flow.
#[allow(clippy::too_many_arguments)]
pub async fn handle_vcard_title_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    name: String,
    surname: String,
    phone_number: String,
    email: String,
    company: String,
) -> Result<()> {
    bot.send_message(msg.chat.id, t("prompt-vcard-website"))
        .await?;

    dialogue
        .update(QrDialogueState::AwaitingVcardWebsite {
            name,
            surname,
            phone_number,
            email,
            company,
            title: input.to_string(),
        })
        .await?;

    Ok(())
}

/// Handle website input, the terminal step of the contact flow.
#[allow(clippy::too_many_arguments)]
pub async fn handle_vcard_website_input(
    bot: &Bot,
    msg: &Message,
    dialogue: QrDialogue,
    input: &str,
    name: String,
    surname: String,
    phone_number: String,
    email: String,
    company: String,
    title: String,
) -> Result<()> {
    match validate_url(input) {
        Ok(url) => {
            let card = ContactCard {
                name,
                surname,
                phone_number,
                email,
                company,
                title,
                url: url.as_str().to_string(),
            };

            let payload = qr::vcard_payload(&card);
            reply_with_png(bot, msg, &dialogue, &payload, "caption-vcard").await
        }
        Err(key) => {
            bot.send_message(msg.chat.id, t(key)).await?;
            // Keep dialogue state, user can try again
            Ok(())
        }
    }
}
