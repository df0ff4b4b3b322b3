//! Wire types for the boost.ai chat API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Command`] | Request body, tagged by its `command` kind (START or POST) |
//! | [`ConversationReply`] | Decoded bot reply for a single call |
//!
//! All types use the vendor's snake_case field names on the wire.

pub mod command;
pub mod reply;

pub use command::{Command, CustomPayload, MessageKind, PostCommand, StartCommand};
pub use reply::{Conversation, ConversationReply, Element, Payload, ReplyBody};
