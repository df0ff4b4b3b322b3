//! Chat client for the boost.ai conversation API.
//!
//! The public surface is [`ChatClient`] and its [`ChatClientBuilder`];
//! request dispatch lives in `src/client/core.rs`.

pub mod builder;
pub mod core;

pub use builder::ChatClientBuilder;
pub use core::{ChatClient, CHAT_ENDPOINT, DEFAULT_TIMEOUT};
