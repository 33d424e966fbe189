//! WhatsApp dispatch formatting.
//!
//! Pure helpers that turn a family, a message body and the stored template
//! settings into a `wa.me` deep link. Delivery itself happens in the client
//! (the browser opens the link); nothing here performs network I/O.

use crate::backend::domain::models::settings::{Settings, FAMILY_NAME_TOKEN};

const ISRAEL_COUNTRY_CODE: &str = "972";

/// Normalize a loosely formatted Israeli phone number for a `wa.me` link.
///
/// Strips every non-digit character, then:
/// - a number already starting with `972` is kept as is
/// - a leading `0` is replaced with `972`
/// - anything else gets `972` prepended unconditionally
///
/// No length or format validation happens; garbage in produces a malformed
/// but harmless link.
pub fn normalize_phone(phone: &str) -> String {
    let cleaned: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.starts_with(ISRAEL_COUNTRY_CODE) {
        cleaned
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        format!("{ISRAEL_COUNTRY_CODE}{rest}")
    } else {
        format!("{ISRAEL_COUNTRY_CODE}{cleaned}")
    }
}

/// Compose the full outbound message: greeting with the family-name token
/// substituted (first occurrence only), then the body, then the signature,
/// separated by blank lines.
pub fn compose_message(
    greeting_template: &str,
    signature: &str,
    family_name: &str,
    body: &str,
) -> String {
    let greeting = greeting_template.replacen(FAMILY_NAME_TOKEN, family_name, 1);
    format!("{greeting}\n\n{body}\n\n{signature}")
}

/// Build the `wa.me` deep link for a family's phone and a composed message.
pub fn wa_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone(phone),
        urlencoding::encode(message)
    )
}

/// Convenience wrapper applying the stored template settings.
pub fn compose_with_settings(settings: &Settings, family_name: &str, body: &str) -> String {
    compose_message(settings.greeting(), settings.signature(), family_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_country_code() {
        assert_eq!(normalize_phone("972501234567"), "972501234567");
    }

    #[test]
    fn normalize_replaces_leading_zero() {
        assert_eq!(normalize_phone("0501234567"), "972501234567");
    }

    #[test]
    fn normalize_prepends_otherwise() {
        assert_eq!(normalize_phone("501234567"), "972501234567");
    }

    #[test]
    fn normalize_strips_formatting_characters() {
        assert_eq!(normalize_phone("050-123 4567"), "972501234567");
    }

    #[test]
    fn normalize_tolerates_garbage() {
        // No digits at all still yields a (useless) bare country code
        assert_eq!(normalize_phone("call me"), "972");
    }

    #[test]
    fn compose_substitutes_first_token_only() {
        let message = compose_message(
            "שלום משפחת {שם_משפחה}, {שם_משפחה}",
            "בברכה",
            "כהן",
            "יתרה לתשלום",
        );
        assert_eq!(message, "שלום משפחת כהן, {שם_משפחה}\n\nיתרה לתשלום\n\nבברכה");
    }

    #[test]
    fn compose_with_default_settings() {
        let settings = Settings::default();
        let message = compose_with_settings(&settings, "כהן", "נא לשלם");
        assert!(message.starts_with("שלום משפחת כהן,"));
        assert!(message.ends_with("בברכה,\nהנהלת הגן"));
    }

    #[test]
    fn wa_link_encodes_text_and_normalizes_phone() {
        let link = wa_link("0501234567", "hello world");
        assert_eq!(link, "https://wa.me/972501234567?text=hello%20world");
    }
}
