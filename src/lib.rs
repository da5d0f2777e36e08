//! messenger2md - Convert pasted chat transcripts into Markdown
//!
//! This library turns a plain-text chat-log export (as pasted from a
//! messaging application) into a structured sequence of timestamped
//! conversations, each holding ordered speaker turns. It supports:
//!
//! - Line-by-line transcript parsing with lookahead-based classification
//!   (timestamp lines, speaker-name headers, message content)
//! - Normalizing the caller's first-name shorthand to their full name
//! - Rendering the conversation sequence as Markdown (or JSON)
//! - Capturing the transcript from the system clipboard, a file, or stdin
//!
//! # Example
//!
//! ```
//! use messenger2md::{parse_transcript, render_markdown};
//!
//! let text = "10:30PM\n\nJane Doe\nJane\nHello";
//! let conversations = parse_transcript(text, "John Smith")?;
//! println!("{}", render_markdown(&conversations));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use models::{Conversation, Monologue};
pub use parsers::transcript::{TranscriptParser, parse_transcript};
pub use render::render_markdown;
pub use utils::sanitize_transcript;
