use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::macros::nutype_string;

pub static WHATSAPP_RECIPIENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{8,15}$").unwrap());

// International number without `+` or separators, as expected by wa.me.
nutype_string!(WhatsappRecipient(validate(regex = WHATSAPP_RECIPIENT_REGEX)));

/// Ways to reach the company without going through the lead form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactChannels {
    /// Chat link without pre-filled text
    pub whatsapp: Url,
    /// `mailto:` link
    pub email: Url,
    pub location: MapLocation,
}

/// Fixed business location displayed by the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Popup text, one entry per line
    pub label: Vec<String>,
}

/// Chat link for `recipient` on the messaging host at `base`, e.g.
/// `https://wa.me/5511995641753`.
pub fn whatsapp_chat_url(base: &Url, recipient: &WhatsappRecipient) -> Result<Url, url::ParseError> {
    base.join(recipient)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chat_url() {
        let base = "https://wa.me/".parse().unwrap();
        let recipient = WhatsappRecipient::try_new("5511995641753").unwrap();

        let url = whatsapp_chat_url(&base, &recipient).unwrap();

        assert_eq!(url.as_str(), "https://wa.me/5511995641753");
    }

    #[test]
    fn recipient_digits_only() {
        assert!(WhatsappRecipient::try_new("+55 11 99564-1753").is_err());
        assert!(WhatsappRecipient::try_new("1234567").is_err());
    }
}
