//! Markdown rendering for parsed conversations.
//!
//! Each conversation becomes a `###` heading carrying its raw timestamp
//! (bare `###` when the session had none), one top-level bullet per speaker
//! turn, and one indented bullet per message line.

use crate::models::{Conversation, Monologue};

/// Render the full conversation sequence, separated by blank lines.
pub fn render_markdown(conversations: &[Conversation]) -> String {
    conversations.iter().map(render_conversation).collect::<Vec<_>>().join("\n\n")
}

fn render_conversation(conversation: &Conversation) -> String {
    let heading = match &conversation.timestamp {
        Some(timestamp) => format!("### {}", timestamp),
        None => "###".to_string(),
    };

    let mut out = heading;
    for monologue in &conversation.monologues {
        out.push('\n');
        out.push_str(&render_monologue(monologue));
    }
    out
}

fn render_monologue(monologue: &Monologue) -> String {
    let mut out = format!("* {}", monologue.speaker);
    for message in &monologue.messages {
        out.push_str("\n    * ");
        out.push_str(message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_conversation() {
        let conversations = vec![Conversation::new(
            Some("10:30PM".to_string()),
            vec![
                Monologue::new(
                    "Jane Doe".to_string(),
                    vec!["Hello".to_string(), "you there?".to_string()],
                ),
                Monologue::new("John Smith".to_string(), vec!["yep".to_string()]),
            ],
        )];

        let expected = "### 10:30PM\n\
                        * Jane Doe\n    \
                        * Hello\n    \
                        * you there?\n\
                        * John Smith\n    \
                        * yep";
        assert_eq!(render_markdown(&conversations), expected);
    }

    #[test]
    fn test_render_without_timestamp_uses_bare_heading() {
        let conversations = vec![Conversation::new(
            None,
            vec![Monologue::new("Jane Doe".to_string(), vec!["hi".to_string()])],
        )];

        assert_eq!(render_markdown(&conversations), "###\n* Jane Doe\n    * hi");
    }

    #[test]
    fn test_render_separates_conversations_with_blank_line() {
        let conversations = vec![
            Conversation::new(
                Some("10:30PM".to_string()),
                vec![Monologue::new("Jane Doe".to_string(), vec!["a".to_string()])],
            ),
            Conversation::new(
                Some("TUE 9:00AM".to_string()),
                vec![Monologue::new("John Smith".to_string(), vec!["b".to_string()])],
            ),
        ];

        let rendered = render_markdown(&conversations);
        assert!(rendered.contains("* a\n\n### TUE 9:00AM"));
    }

    #[test]
    fn test_render_empty_sequence() {
        assert_eq!(render_markdown(&[]), "");
    }
}
