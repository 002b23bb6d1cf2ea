// src/utils/mailto.rs

/// Builds the `mailto:` URI the contact form redirects to. Subject and body
/// are percent-encoded; the sender's address follows the message body.
pub fn contact_mailto(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("Message from {}", name);
    let body = format!("{}\n\nFrom: {}", message, email);

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let uri = contact_mailto(
            "hello@jifunze.dev",
            "Asha Njeri",
            "asha@example.com",
            "Habari! Can I help translate?",
        );
        assert_eq!(
            uri,
            "mailto:hello@jifunze.dev?subject=Message%20from%20Asha%20Njeri\
             &body=Habari%21%20Can%20I%20help%20translate%3F%0A%0AFrom%3A%20asha%40example.com"
        );
    }

    #[test]
    fn test_sender_email_follows_message() {
        let uri = contact_mailto("a@b.co", "X", "x@y.co", "hi");
        let body = uri.split("&body=").nth(1).unwrap();
        let decoded = urlencoding::decode(body).unwrap();
        assert_eq!(decoded, "hi\n\nFrom: x@y.co");
    }
}
