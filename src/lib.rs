//! # boostai-client
//!
//! Blocking client for the boost.ai conversational chat API.
//!
//! ## Overview
//!
//! A [`ChatClient`] starts conversations (optionally narrowed by filter
//! values) and posts user messages into them, returning the bot's parsed
//! [`ConversationReply`]. Each call is a single JSON POST to
//! `{base_url}/api/chat/v2`; the client keeps no conversation state, so the
//! caller passes the conversation id back on every message.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use boostai_client::ChatClient;
//!
//! fn main() -> boostai_client::Result<()> {
//!     let client = ChatClient::new("https://example.boost.ai");
//!
//!     let reply = client.start_conversation()?;
//!     println!("{}", reply.message_text());
//!
//!     let reply = client.send_message("What are your opening hours?", reply.conversation_id())?;
//!     for text in reply.message_texts() {
//!         println!("bot: {}", text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Failures come back as [`Error`]: [`Error::Transport`] when the request
//! could not be completed, [`Error::Parse`] when the body is not a valid reply.
//! Nothing is retried.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `ChatClient` and its builder |
//! | [`types`] | Command and reply wire types |
//! | [`transport`] | Blocking HTTP transport |
//! | [`bootstrap`] | Optional environment and log setup |

pub mod bootstrap;
pub mod client;
pub mod transport;
pub mod types;

pub use client::{ChatClient, ChatClientBuilder};
pub use types::{
    command::{Command, PostCommand, StartCommand},
    reply::{ConversationReply, Element},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

pub mod error;
pub use error::{Error, ErrorContext};
pub use transport::TransportError;
