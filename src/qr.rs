//! # QR Payload and Rendering Module
//!
//! Payload builders are single-pass string formatting; rendering delegates
//! to the `qrcode` crate. Symbol parameters (error correction level,
//! module size, quiet zone) are fixed constants so the visual output size
//! stays predictable across flows.

use std::fmt;
use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::validation::{Ssid, WifiPassword};

/// Error correction level for every generated symbol.
pub const QR_EC_LEVEL: EcLevel = EcLevel::L;
/// Edge length of one module in pixels for raster output.
pub const MODULE_PIXELS: u32 = 10;

/// Errors produced while turning a payload into an image.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The payload does not fit the fixed symbol parameters.
    Encode(String),
    /// PNG serialization failed.
    ImageWrite(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Encode(msg) => write!(f, "QR encoding error: {msg}"),
            RenderError::ImageWrite(msg) => write!(f, "Image encoding error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<qrcode::types::QrError> for RenderError {
    fn from(err: qrcode::types::QrError) -> Self {
        RenderError::Encode(format!("{err:?}"))
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::ImageWrite(err.to_string())
    }
}

/// Contact fields for a vCard payload.
///
/// `company`, `title` and `url` may be empty; the dialogue flow guarantees
/// the remaining fields are non-empty and that `email`/`url` were
/// validated before they land here.
#[derive(Debug, Clone)]
pub struct ContactCard {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub url: String,
}

/// Builds the `WIFI:` configuration string for WPA networks.
///
/// Special characters in the SSID or password are NOT escaped; a `;` or
/// `:` in either field corrupts the payload. Known limitation of the
/// format as emitted here.
pub fn wifi_payload(ssid: &Ssid, password: &WifiPassword) -> String {
    format!("WIFI:T:WPA;S:{};P:{};;", ssid.as_str(), password.as_str())
}

/// Builds a vCard 3.0 text block from the collected contact fields.
pub fn vcard_payload(card: &ContactCard) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nN:{};{};;;\nTEL;CELL:{}\nEMAIL:{}\nORG:{}\nTITLE:{}\nURL:{}\nEND:VCARD",
        card.surname,
        card.name,
        card.phone_number,
        card.email,
        card.company,
        card.title,
        card.url
    )
}

/// Renders a payload as a PNG image and returns the encoded bytes.
pub fn render_png(payload: &str) -> Result<Vec<u8>, RenderError> {
    let code = QrCode::with_error_correction_level(payload, QR_EC_LEVEL)?;

    // quiet_zone keeps the standard 4-module border around the symbol.
    let pixmap = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(pixmap).write_to(&mut buffer, ImageOutputFormat::Png)?;

    Ok(buffer.into_inner())
}

/// Renders a payload as an SVG document with the same symbol parameters.
pub fn render_svg(payload: &str) -> Result<String, RenderError> {
    let code = QrCode::with_error_correction_level(payload, QR_EC_LEVEL)?;

    let document = code
        .render::<svg::Color>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_password, validate_ssid};

    #[test]
    fn test_wifi_payload_format() {
        let ssid = validate_ssid("TestSSID").unwrap();
        let password = validate_password("TestPassword").unwrap();
        assert_eq!(
            wifi_payload(&ssid, &password),
            "WIFI:T:WPA;S:TestSSID;P:TestPassword;;"
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::Encode("DataTooLong".to_string());
        assert_eq!(format!("{}", err), "QR encoding error: DataTooLong");

        let err = RenderError::ImageWrite("buffer".to_string());
        assert_eq!(format!("{}", err), "Image encoding error: buffer");
    }
}
