//! UI Builder module for creating keyboards and static texts

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::t;

/// Create the inline keyboard for the main menu, one flow per row.
///
/// The callback tags are matched verbatim in the callback handler.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![InlineKeyboardButton::callback(t("menu-url"), "url_qr")],
        vec![InlineKeyboardButton::callback(t("menu-svg-url"), "svg_url_qr")],
        vec![InlineKeyboardButton::callback(t("menu-text"), "text_qr")],
        vec![InlineKeyboardButton::callback(t("menu-contact"), "contact_info")],
        vec![InlineKeyboardButton::callback(t("menu-wifi"), "wifi_qr")],
        vec![InlineKeyboardButton::callback(t("menu-about"), "about")],
        vec![InlineKeyboardButton::callback(t("menu-reset"), "back")],
    ];

    InlineKeyboardMarkup::new(buttons)
}

/// Static text shown for the About button.
pub fn about_text() -> String {
    t("about")
}
