//! Session domain entities

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who authored a message in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Host,
    User,
}

/// A message in the session transcript (Entity)
///
/// Immutable once appended: the transcript never edits a message in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn host(text: impl Into<String>) -> Self {
        Self {
            role: Role::Host,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

/// Ordered history of exchanged messages for one session (Entity)
///
/// Append-only: insertion order is conversational turn order, and the
/// sequence is never reordered. Owned exclusively by the session
/// controller; everyone else reads through [`Transcript::messages`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors_set_role() {
        assert_eq!(Message::host("hello").role, Role::Host);
        assert_eq!(Message::user("hi").role, Role::User);
    }

    #[test]
    fn test_transcript_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::host("A"));
        transcript.push(Message::user("B"));
        transcript.push(Message::host("C"));

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_transcript_starts_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_push_does_not_disturb_earlier_messages() {
        let mut transcript = Transcript::new();
        transcript.push(Message::host("opening"));
        let before = transcript.messages()[0].clone();

        transcript.push(Message::user("reply"));
        assert_eq!(transcript.messages()[0], before);
    }
}
