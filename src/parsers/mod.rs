//! Line-oriented parser for pasted chat transcripts
//!
//! # Error Handling Strategy
//!
//! This module follows a **fail-fast** approach:
//!
//! - **Structural violations are fatal**: the transcript format is positional
//!   and contextual only, so once a name header is missing its first-name
//!   echo (or a line that must be a name header is not one) the scanner has
//!   no way to resynchronize. It returns an error immediately, carrying the
//!   offending lines plus a window of recently scanned input for diagnosis.
//!
//! - **End of input is not an error**: lookahead past the last line yields
//!   `None`, a sentinel that compares unequal to every real line, so the
//!   boundary predicates can probe beyond the input without bounds checks.
//!
//! - **Error propagation**: uses `anyhow::Result` with descriptive messages.
//!   Since this is a binary/CLI tool (not a library crate consumed by code
//!   that matches on error types), errors are boxed with context.
//!
//! There are no partial results: downstream rendering has no meaningful
//! behavior for half a transcript, so the parser fully succeeds or fails
//! loudly.

pub mod timestamp;
pub mod transcript;

pub use transcript::{TranscriptParser, parse_transcript};
