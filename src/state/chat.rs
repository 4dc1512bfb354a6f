//! State for the assistant chat page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Chat transcript plus the in-flight flag for the current round trip.
///
/// `pending` is `true` from the moment a user message is appended until the
/// assistant reply lands or the request fails. The send control stays
/// disabled while it is set.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

/// A single chat transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
}

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// BEM modifier used when rendering the message bubble.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl ChatState {
    /// Append the outgoing user message and mark the round trip in flight.
    pub fn push_user(&mut self, id: String, content: String) {
        self.messages.push(ChatMessage {
            id,
            role: MessageRole::User,
            content,
        });
        self.pending = true;
    }

    /// Append the assistant reply and finish the round trip.
    pub fn push_assistant(&mut self, id: String, content: String) {
        self.messages.push(ChatMessage {
            id,
            role: MessageRole::Assistant,
            content,
        });
        self.pending = false;
    }

    /// Finish the round trip without a reply. The user message stays in the
    /// transcript so a retry reads naturally.
    pub fn fail_pending(&mut self) {
        self.pending = false;
    }
}
