use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::models::{Conversation, Monologue};
use crate::parsers::timestamp::{
    first_token, is_bare_time, is_dated_time, is_day_and_time, is_full_name,
};

/// Parse a full transcript into its ordered conversation sequence.
///
/// `own_name` is the caller's full display name as it appears in the
/// transcript. Their turns are headed by a lone first-name line (no echo),
/// and the resulting monologues always carry the full name.
///
/// # Errors
/// Fails with a structural-format error when the transcript violates the
/// name/first-name-echo pattern, carrying the offending lines and a window
/// of recently scanned input.
pub fn parse_transcript(text: &str, own_name: &str) -> Result<Vec<Conversation>> {
    let mut parser = TranscriptParser::new(text, own_name)?;
    parser.parse()
}

/// Cursor-based scanner over the transcript's line sequence.
///
/// Holds the sole mutable position (`cursor`, forward-only, every line
/// visited exactly once) plus the speaker names registered so far. All
/// classification is done by peeking at the current and next lines; an
/// out-of-range peek yields `None`, which compares unequal to every real
/// line including the empty separator line.
pub struct TranscriptParser {
    lines: Vec<String>,
    cursor: usize,
    own_name: String,
    own_first: String,
    names: HashSet<String>,
    first_names: HashSet<String>,
}

impl TranscriptParser {
    /// Create a parser over `text`, seeded with the caller's identity.
    pub fn new(text: &str, own_name: &str) -> Result<Self> {
        let own_name = own_name.trim().to_string();
        let Some(own_first) = own_name.split_whitespace().next() else {
            bail!("own name must not be empty");
        };
        let own_first = own_first.to_string();

        let lines: Vec<String> = text.trim().lines().map(str::to_string).collect();

        let mut names = HashSet::new();
        names.insert(own_name.clone());
        let mut first_names = HashSet::new();
        first_names.insert(own_first.clone());

        Ok(Self { lines, cursor: 0, own_name, own_first, names, first_names })
    }

    /// Consume the whole line sequence, one conversation block at a time.
    pub fn parse(&mut self) -> Result<Vec<Conversation>> {
        let mut conversations = Vec::new();
        while self.cursor < self.lines.len() {
            conversations.push(self.capture_conversation()?);
        }
        Ok(conversations)
    }

    /// Full speaker names registered so far, including the caller's own.
    pub fn known_names(&self) -> &HashSet<String> {
        &self.names
    }

    /// First-name tokens of every registered speaker.
    pub fn known_first_names(&self) -> &HashSet<String> {
        &self.first_names
    }

    fn peek(&self, ahead: usize) -> Option<&str> {
        self.lines.get(self.cursor + ahead).map(String::as_str)
    }

    fn line(&self) -> Option<&str> {
        self.peek(0)
    }

    fn next_line(&self) -> Option<&str> {
        self.peek(1)
    }

    fn advance(&mut self, n: usize) {
        self.cursor += n;
    }

    /// Lines recently visited by the cursor, for error diagnostics.
    fn window(&self) -> String {
        let end = (self.cursor + 1).min(self.lines.len());
        let start = end.saturating_sub(4);
        self.lines[start..end].join("\n")
    }

    /// Is the current line a timestamp? The bare forms (`10:30PM`,
    /// `MON 10:30PM`) only count when followed by a blank separator line;
    /// the dated form is self-delimiting.
    fn is_timestamp(&self) -> bool {
        let Some(line) = self.line() else {
            return false;
        };

        let bare = is_day_and_time(line)
            || (line.split_whitespace().count() == 1 && is_bare_time(line));
        if bare && self.next_line() == Some("") {
            return true;
        }

        is_dated_time(line)
    }

    /// Does a new speaker turn start at the current line? Either the
    /// caller's own first-name shorthand, or a full-name line whose next
    /// line is the first-name echo. Both lines must exist.
    fn at_turn_boundary(&self) -> bool {
        let (Some(line), Some(next)) = (self.line(), self.next_line()) else {
            return false;
        };

        if line == self.own_first {
            return true;
        }

        is_full_name(line) && next == first_token(line)
    }

    fn capture_conversation(&mut self) -> Result<Conversation> {
        let timestamp = if self.is_timestamp() {
            let timestamp = self.line().map(str::to_string);
            // Timestamp line plus its separator line
            self.advance(2);
            timestamp
        } else {
            None
        };

        let monologues = self.capture_monologues()?;
        Ok(Conversation::new(timestamp, monologues))
    }

    fn capture_monologues(&mut self) -> Result<Vec<Monologue>> {
        let mut monologues = Vec::new();
        while !self.is_timestamp() && self.line().is_some() {
            monologues.push(self.capture_monologue()?);
        }
        Ok(monologues)
    }

    fn capture_monologue(&mut self) -> Result<Monologue> {
        let speaker = self.capture_name()?;

        let mut messages = Vec::new();
        while !self.at_turn_boundary() && !self.is_timestamp() {
            let Some(line) = self.line() else {
                break;
            };
            messages.push(line.to_string());
            self.advance(1);
        }

        Ok(Monologue::new(speaker, messages))
    }

    /// Consume the name header opening a turn.
    ///
    /// The caller's own turns carry just the first name on one line. Anyone
    /// else's carry the full name followed by the first-name echo line,
    /// which is consumed and discarded.
    fn capture_name(&mut self) -> Result<String> {
        let Some(line) = self.line() else {
            bail!("unexpected end of transcript while expecting a speaker name");
        };

        if line == self.own_first {
            self.advance(1);
            return Ok(self.own_name.clone());
        }

        if !is_full_name(line) {
            bail!(
                "malformed transcript at line {}: expected a speaker name, found {:?}\n\
                 recently scanned:\n{}",
                self.cursor + 1,
                line,
                self.window()
            );
        }

        let name = line.to_string();
        if !self.names.contains(&name) {
            self.names.insert(name.clone());
            self.first_names.insert(first_token(&name).to_string());
        }
        self.advance(1);

        let first = first_token(&name).to_string();
        let echo = self.line().map(str::to_string);
        match echo {
            Some(ref echo) if *echo == first => self.advance(1),
            other => bail!(
                "malformed transcript at line {}: expected first-name echo {:?} \
                 after name line {:?}, found {:?}\nrecently scanned:\n{}",
                self.cursor + 1,
                first,
                name,
                other,
                self.window()
            ),
        }

        Ok(name)
    }
}
