/// Strip a pasted transcript down to printable characters.
///
/// Messenger exports picked up from the clipboard carry stray control and
/// non-ASCII characters that confuse line classification. Everything outside
/// ASCII printable plus `\n`, `\r`, `\t` is dropped.
pub fn sanitize_transcript(text: &str) -> String {
    text.chars().filter(|c| is_printable(*c)).collect()
}

fn is_printable(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t') || (' '..='~').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_plain_text_and_newlines() {
        let text = "Jane Doe\nJane\nHello there!";
        assert_eq!(sanitize_transcript(text), text);
    }

    #[test]
    fn test_drops_control_characters() {
        assert_eq!(sanitize_transcript("Hel\u{0}lo\u{7}"), "Hello");
    }

    #[test]
    fn test_drops_non_ascii() {
        assert_eq!(sanitize_transcript("hi \u{1F680} there"), "hi  there");
    }

    #[test]
    fn test_keeps_tabs_and_carriage_returns() {
        assert_eq!(sanitize_transcript("a\tb\r\nc"), "a\tb\r\nc");
    }
}
