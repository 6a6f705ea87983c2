//! Server records consumed by the UI.
//!
//! These are read-only from the components' point of view: they arrive from
//! the caller and are never mutated or persisted here.

use serde::{Deserialize, Serialize};
use url::Url;

/// Delivery context of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Sent to a stream (channel).
    Stream,
    /// Direct message to one or more users.
    Private,
}

/// A user listed as recipient of a private message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: u64,
    pub email: String,
    pub full_name: String,
}

/// Who a message was delivered to.
///
/// The server sends the stream name for stream messages and a list of users
/// for private ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayRecipient {
    Stream(String),
    Users(Vec<Recipient>),
}

impl DisplayRecipient {
    /// Stream name, if this is a stream recipient.
    pub fn stream_name(&self) -> Option<&str> {
        match self {
            DisplayRecipient::Stream(name) => Some(name),
            DisplayRecipient::Users(_) => None,
        }
    }
}

/// A chat message carrying a shared image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub display_recipient: DisplayRecipient,
    /// Unix seconds.
    pub timestamp: i64,
    pub sender_id: u64,
    pub sender_email: String,
    pub sender_full_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Message {
    /// Returns true for messages sent to a stream.
    pub fn is_stream(&self) -> bool {
        self.message_type == MessageType::Stream
    }
}

/// Session credentials for a realm.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub realm: Url,
    pub email: String,
    pub api_key: String,
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("realm", &self.realm.as_str())
            .field("email", &self.email)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_stream_message() {
        let json = r#"{
            "id": 7,
            "type": "stream",
            "display_recipient": "design",
            "timestamp": 1700000000,
            "sender_id": 12,
            "sender_email": "iago@example.com",
            "sender_full_name": "Iago"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.message_type, MessageType::Stream);
        assert_eq!(message.display_recipient.stream_name(), Some("design"));
        assert_eq!(message.avatar_url, None);
        assert!(message.is_stream());
    }

    #[test]
    fn deserializes_private_message() {
        let json = r#"{
            "id": 8,
            "type": "private",
            "display_recipient": [
                {"id": 1, "email": "a@example.com", "full_name": "A"},
                {"id": 2, "email": "b@example.com", "full_name": "B"}
            ],
            "timestamp": 1700000000,
            "sender_id": 1,
            "sender_email": "a@example.com",
            "sender_full_name": "A",
            "avatar_url": "/user_avatars/1.png"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert!(!message.is_stream());
        assert_eq!(message.display_recipient.stream_name(), None);
        match message.display_recipient {
            DisplayRecipient::Users(users) => assert_eq!(users.len(), 2),
            DisplayRecipient::Stream(_) => panic!("expected users"),
        }
    }

    #[test]
    fn auth_debug_hides_api_key() {
        let auth = Auth {
            realm: Url::parse("https://chat.example.com").unwrap(),
            email: "me@example.com".into(),
            api_key: "secret".into(),
        };
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("me@example.com"));
    }
}
