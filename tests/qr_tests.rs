use qrcodegen_bot::qr::{
    render_png, render_svg, vcard_payload, wifi_payload, ContactCard, RenderError,
};
use qrcodegen_bot::validation::{validate_password, validate_ssid};

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

fn joel_card() -> ContactCard {
    ContactCard {
        name: "Joel".to_string(),
        surname: "Perez".to_string(),
        phone_number: "+34600312511".to_string(),
        email: "joelperez91@gmail.com".to_string(),
        company: "Example Inc.".to_string(),
        title: "Software Engineer".to_string(),
        url: "https://github.com/jpizquierdo".to_string(),
    }
}

#[test]
fn test_wifi_payload_exact_format() {
    let ssid = validate_ssid("TestSSID").unwrap();
    let password = validate_password("TestPassword").unwrap();

    assert_eq!(
        wifi_payload(&ssid, &password),
        "WIFI:T:WPA;S:TestSSID;P:TestPassword;;"
    );
}

/// Separator characters in SSID or password are embedded verbatim; the
/// format performs no escaping.
#[test]
fn test_wifi_payload_does_not_escape_separators() {
    let ssid = validate_ssid("Home;Net").unwrap();
    let password = validate_password("pass:word123").unwrap();

    assert_eq!(
        wifi_payload(&ssid, &password),
        "WIFI:T:WPA;S:Home;Net;P:pass:word123;;"
    );
}

#[test]
fn test_vcard_payload_exact_block() {
    let expected = "BEGIN:VCARD\n\
                    VERSION:3.0\n\
                    N:Perez;Joel;;;\n\
                    TEL;CELL:+34600312511\n\
                    EMAIL:joelperez91@gmail.com\n\
                    ORG:Example Inc.\n\
                    TITLE:Software Engineer\n\
                    URL:https://github.com/jpizquierdo\n\
                    END:VCARD";

    assert_eq!(vcard_payload(&joel_card()), expected);
}

/// Company, title and URL may be empty; their lines stay present.
#[test]
fn test_vcard_payload_with_empty_optional_fields() {
    let mut card = joel_card();
    card.company = String::new();
    card.title = String::new();
    card.url = String::new();

    let payload = vcard_payload(&card);
    assert!(payload.contains("\nORG:\n"));
    assert!(payload.contains("\nTITLE:\n"));
    assert!(payload.contains("\nURL:\n"));
}

#[test]
fn test_render_png_produces_png_bytes() {
    let png = render_png("https://example.com/").unwrap();
    assert!(png.starts_with(PNG_MAGIC));
}

#[test]
fn test_render_png_handles_wifi_payload() {
    let ssid = validate_ssid("TestSSID").unwrap();
    let password = validate_password("TestPassword").unwrap();

    let png = render_png(&wifi_payload(&ssid, &password)).unwrap();
    assert!(png.starts_with(PNG_MAGIC));
}

#[test]
fn test_render_png_handles_vcard_payload() {
    let png = render_png(&vcard_payload(&joel_card())).unwrap();
    assert!(png.starts_with(PNG_MAGIC));
}

#[test]
fn test_render_png_handles_free_text() {
    let png = render_png("blabla bleble cositas").unwrap();
    assert!(png.starts_with(PNG_MAGIC));
}

#[test]
fn test_render_svg_produces_svg_document() {
    let document = render_svg("https://example.com/").unwrap();
    assert!(document.contains("<svg"));
    assert!(document.contains("</svg>"));
}

/// A payload past the capacity of the fixed symbol parameters fails with
/// an encode error rather than panicking.
#[test]
fn test_render_rejects_oversized_payload() {
    let oversized = "a".repeat(4000);

    let err = render_png(&oversized).unwrap_err();
    assert!(matches!(err, RenderError::Encode(_)));

    let err = render_svg(&oversized).unwrap_err();
    assert!(matches!(err, RenderError::Encode(_)));
}
