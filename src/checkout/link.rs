//! Messaging deep links.

const WHATSAPP_BASE: &str = "https://wa.me";

/// Percent-encodes `input` the way ECMAScript's `encodeURIComponent` does:
/// ASCII letters, digits and `-_.!~*'()` pass through, every other byte of the
/// UTF-8 encoding becomes `%XX` with uppercase hex.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Link that opens a chat with `number` with `text` pre-filled.
pub fn deep_link(number: &str, text: &str) -> String {
    format!("{WHATSAPP_BASE}/{number}?text={}", encode_uri_component(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_characters_pass_through() {
        let unreserved = "AZaz09-_.!~*'()";
        assert_eq!(encode_uri_component(unreserved), unreserved);
    }

    #[test]
    fn test_reserved_and_whitespace_are_encoded() {
        assert_eq!(encode_uri_component("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
        assert_eq!(encode_uri_component("*Total:*\n"), "*Total%3A*%0A");
        assert_eq!(encode_uri_component("R$ 1,50"), "R%24%201%2C50");
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        assert_eq!(encode_uri_component("Endereço"), "Endere%C3%A7o");
        assert_eq!(encode_uri_component("Olá"), "Ol%C3%A1");
    }

    #[test]
    fn test_deep_link() {
        assert_eq!(
            deep_link("5518997340064", "Oi, tudo bem?"),
            "https://wa.me/5518997340064?text=Oi%2C%20tudo%20bem%3F"
        );
    }
}
