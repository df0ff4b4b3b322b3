//! Bot replies returned by the chat endpoint.

use serde::{Deserialize, Serialize};

/// Reply to a START or POST command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationReply {
    pub conversation: Conversation,
    pub response: ReplyBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub avatar_url: String,
    /// In the order the bot emitted them.
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// One unit of a bot reply. Non-text elements carry no payload, or a payload
/// without `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Element {
    /// A text element, e.g. for building replies in caller-side test doubles.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            payload: Some(Payload {
                text: Some(text.into()),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ConversationReply {
    pub fn conversation_id(&self) -> &str {
        &self.conversation.id
    }

    pub fn avatar_url(&self) -> &str {
        &self.response.avatar_url
    }

    pub fn elements(&self) -> &[Element] {
        &self.response.elements
    }

    /// Texts of all elements, in emission order.
    ///
    /// Elements without a text payload are skipped rather than yielding an
    /// empty string.
    pub fn message_texts(&self) -> Vec<String> {
        self.response
            .elements
            .iter()
            .filter_map(|e| e.payload.as_ref().and_then(|p| p.text.clone()))
            .collect()
    }

    /// All texts joined by a single space.
    pub fn message_text(&self) -> String {
        self.message_texts().join(" ")
    }
}
