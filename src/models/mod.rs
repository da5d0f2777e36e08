//! Data models for parsed chat transcripts.
//!
//! - [`Conversation`] - One timestamped session of speaker turns
//! - [`Monologue`] - One uninterrupted run of messages from a single speaker
//!
//! Both derive serde so the CLI can emit the parsed structure as JSON in
//! addition to the default Markdown rendering.

pub mod conversation;

pub use conversation::{Conversation, Monologue};
