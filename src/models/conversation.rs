use serde::{Deserialize, Serialize};

/// One timestamped chat session: a run of speaker turns between two
/// timestamp boundaries in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Raw matched timestamp text, or `None` when the session directly
    /// follows the previous one with no timestamp line in between.
    pub timestamp: Option<String>,
    pub monologues: Vec<Monologue>,
}

/// One uninterrupted run of messages from a single speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monologue {
    /// Resolved full display name. The caller's own first-name shorthand is
    /// always normalized to the full name supplied at parse time.
    pub speaker: String,
    /// Message lines, verbatim, in appearance order.
    pub messages: Vec<String>,
}

impl Conversation {
    pub fn new(timestamp: Option<String>, monologues: Vec<Monologue>) -> Self {
        Self { timestamp, monologues }
    }

    /// Total message count across all turns.
    pub fn message_count(&self) -> usize {
        self.monologues.iter().map(|m| m.messages.len()).sum()
    }
}

impl Monologue {
    pub fn new(speaker: String, messages: Vec<String>) -> Self {
        Self { speaker, messages }
    }
}
