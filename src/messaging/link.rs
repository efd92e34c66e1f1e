use crate::models::validation::normalize_phone;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Builds a `wa.me` deep link that opens a chat with `phone` prefilled with `message`.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        normalize_phone(phone),
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_uses_normalized_phone_and_encoded_text() {
        let link = whatsapp_link("0714 042 307", "Hi! Is Pilau available?\nThanks & bye");

        assert_eq!(
            link,
            "https://wa.me/254714042307?text=Hi%21%20Is%20Pilau%20available%3F%0AThanks%20%26%20bye"
        );
    }

    #[test]
    fn empty_message_still_builds_a_link() {
        assert_eq!(whatsapp_link("+254714042307", ""), "https://wa.me/254714042307?text=");
    }
}
