//! # Input Validation Module
//!
//! Pure shape checks for the fields collected during the QR flows: URLs,
//! email addresses, Wi-Fi network names and passwords. No I/O, no lookups.
//!
//! On failure every validator returns the localization key of the
//! user-facing error message, so handlers can reply with `t(key)` and keep
//! the dialogue in the same step.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

/// Minimum SSID length in characters
pub const SSID_MIN_CHARS: usize = 1;
/// Maximum SSID length in characters (802.11 limit)
pub const SSID_MAX_CHARS: usize = 32;
/// Minimum WPA passphrase length in characters
pub const PASSWORD_MIN_CHARS: usize = 8;
/// Maximum WPA passphrase length in characters
pub const PASSWORD_MAX_CHARS: usize = 63;

lazy_static! {
    // local-part@domain, domain must contain a dot, no whitespace anywhere.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern should be valid");
}

/// A Wi-Fi network name that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ssid(String);

impl Ssid {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A WPA passphrase that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiPassword(String);

impl WifiPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// An email address that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validates an absolute http/https URL.
///
/// Leading and trailing whitespace is trimmed before parsing.
pub fn validate_url(input: &str) -> Result<Url, &'static str> {
    let trimmed = input.trim();

    let url = Url::parse(trimmed).map_err(|_| "error-invalid-url")?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err("error-invalid-url");
    }

    if !url.has_host() {
        return Err("error-invalid-url");
    }

    Ok(url)
}

/// Validates an email address against the standard local-part@domain shape.
pub fn validate_email(input: &str) -> Result<EmailAddress, &'static str> {
    if EMAIL_PATTERN.is_match(input) {
        Ok(EmailAddress(input.to_string()))
    } else {
        Err("error-invalid-email")
    }
}

/// Validates a Wi-Fi SSID (1-32 characters).
pub fn validate_ssid(input: &str) -> Result<Ssid, &'static str> {
    let length = input.chars().count();

    if (SSID_MIN_CHARS..=SSID_MAX_CHARS).contains(&length) {
        Ok(Ssid(input.to_string()))
    } else {
        Err("error-invalid-ssid")
    }
}

/// Validates a WPA passphrase (8-63 characters).
///
/// The error key is the combined SSID-or-password message, since the
/// password step re-checks both fields before rendering.
pub fn validate_password(input: &str) -> Result<WifiPassword, &'static str> {
    let length = input.chars().count();

    if (PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&length) {
        Ok(WifiPassword(input.to_string()))
    } else {
        Err("error-invalid-wifi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_requires_http_scheme() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?q=1").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_url_trims_whitespace() {
        let url = validate_url("  https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_ssid_length_bounds() {
        assert!(validate_ssid("a").is_ok());
        assert!(validate_ssid(&"a".repeat(32)).is_ok());
        assert!(validate_ssid("").is_err());
        assert!(validate_ssid(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(validate_password(&"p".repeat(8)).is_ok());
        assert!(validate_password(&"p".repeat(63)).is_ok());
        assert!(validate_password(&"p".repeat(7)).is_err());
        assert!(validate_password(&"p".repeat(64)).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("joelperez91@gmail.com").is_ok());
        assert!(validate_email("user@no-dot-domain").is_err());
        assert!(validate_email("spaces in@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }
}
