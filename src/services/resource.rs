//! Resource URLs for images served by a realm.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use crate::domain::{Auth, Message};
use crate::error::Result;

/// An image location plus the headers needed to fetch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResource {
    pub uri: Url,
    pub headers: Vec<(String, String)>,
}

impl ImageResource {
    /// Whether credentials are attached.
    pub fn is_authenticated(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
    }
}

/// Basic auth header value for a session.
pub fn auth_header(auth: &Auth) -> String {
    let credentials = format!("{}:{}", auth.email, auth.api_key);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Resolve `src` against the realm.
///
/// Credentials are only attached when the image lives on the realm's origin.
pub fn get_resource(src: &str, auth: &Auth) -> Result<ImageResource> {
    let uri = auth.realm.join(src)?;
    let headers = if uri.origin() == auth.realm.origin() {
        vec![("Authorization".to_string(), auth_header(auth))]
    } else {
        Vec::new()
    };

    Ok(ImageResource { uri, headers })
}

/// Avatar for a message's sender, scoped to the realm.
pub fn avatar_url(message: &Message, realm: &Url) -> Result<Url> {
    let url = match message.avatar_url.as_deref() {
        Some(avatar) if !avatar.is_empty() => realm.join(avatar)?,
        _ => realm.join(&format!("avatar/{}", message.sender_id))?,
    };
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayRecipient, MessageType};
    use pretty_assertions::assert_eq;

    fn auth() -> Auth {
        Auth {
            realm: Url::parse("https://chat.example.com").unwrap(),
            email: "me@example.com".into(),
            api_key: "key".into(),
        }
    }

    fn message(avatar_url: Option<&str>) -> Message {
        Message {
            id: 1,
            message_type: MessageType::Stream,
            display_recipient: DisplayRecipient::Stream("general".into()),
            timestamp: 0,
            sender_id: 42,
            sender_email: "iago@example.com".into(),
            sender_full_name: "Iago".into(),
            avatar_url: avatar_url.map(String::from),
        }
    }

    #[test]
    fn relative_source_gets_credentials() {
        let resource = get_resource("/user_uploads/2/ab/cat.png", &auth()).unwrap();

        assert_eq!(
            resource.uri.as_str(),
            "https://chat.example.com/user_uploads/2/ab/cat.png"
        );
        assert_eq!(
            resource.headers,
            vec![(
                "Authorization".to_string(),
                "Basic bWVAZXhhbXBsZS5jb206a2V5".to_string()
            )]
        );
        assert!(resource.is_authenticated());
    }

    #[test]
    fn foreign_source_has_no_credentials() {
        let resource = get_resource("https://images.example.org/cat.png", &auth()).unwrap();

        assert_eq!(resource.uri.as_str(), "https://images.example.org/cat.png");
        assert!(resource.headers.is_empty());
        assert!(!resource.is_authenticated());
    }

    #[test]
    fn same_host_other_scheme_is_foreign() {
        let resource = get_resource("http://chat.example.com/cat.png", &auth()).unwrap();
        assert!(!resource.is_authenticated());
    }

    #[test]
    fn avatar_relative_is_joined_to_realm() {
        let realm = auth().realm;
        let url = avatar_url(&message(Some("/user_avatars/42.png")), &realm).unwrap();
        assert_eq!(url.as_str(), "https://chat.example.com/user_avatars/42.png");
    }

    #[test]
    fn avatar_absolute_is_kept() {
        let realm = auth().realm;
        let url = avatar_url(&message(Some("https://cdn.example.net/a.png")), &realm).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.net/a.png");
    }

    #[test]
    fn avatar_missing_uses_sender_endpoint() {
        let realm = auth().realm;
        let url = avatar_url(&message(None), &realm).unwrap();
        assert_eq!(url.as_str(), "https://chat.example.com/avatar/42");
    }
}
