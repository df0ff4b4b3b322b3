//! Request commands sent to the chat endpoint.

use serde::Serialize;

/// A chat command, serialized with its kind under the `command` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "UPPERCASE")]
pub enum Command {
    Start(StartCommand),
    Post(PostCommand),
}

impl Command {
    /// Start a clean conversation without filters.
    pub fn start() -> Self {
        Command::Start(StartCommand::new())
    }

    pub fn start_with_filters(filter_values: Vec<String>) -> Self {
        Command::Start(StartCommand::new().filter_values(filter_values))
    }

    /// Post a text message into an existing conversation.
    pub fn post_text(value: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Command::Post(PostCommand::text(value, conversation_id))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Command::Start(_) => "START",
            Command::Post(_) => "POST",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartCommand {
    pub clean: bool,
    /// Left out of the body entirely when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_values: Vec<String>,
}

impl StartCommand {
    pub fn new() -> Self {
        Self {
            clean: true,
            filter_values: Vec::new(),
        }
    }

    pub fn filter_values(mut self, filter_values: Vec<String>) -> Self {
        self.filter_values = filter_values;
        self
    }
}

impl Default for StartCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCommand {
    pub clean: bool,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub conversation_id: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_payload: Option<CustomPayload>,
}

impl PostCommand {
    pub fn text(value: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Self {
            clean: true,
            kind: MessageKind::Text,
            conversation_id: conversation_id.into(),
            value: value.into(),
            custom_payload: None,
        }
    }

    /// Attach the caller's phone number to the message.
    pub fn with_client_phone(mut self, client_phone: impl Into<String>) -> Self {
        self.custom_payload = Some(CustomPayload {
            client_phone: client_phone.into(),
        });
        self
    }
}

/// Side-channel annotation carried alongside a posted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomPayload {
    pub client_phone: String,
}

impl From<PostCommand> for Command {
    fn from(cmd: PostCommand) -> Self {
        Command::Post(cmd)
    }
}

impl From<StartCommand> for Command {
    fn from(cmd: StartCommand) -> Self {
        Command::Start(cmd)
    }
}
