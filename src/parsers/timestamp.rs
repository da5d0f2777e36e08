//! Line classifiers for the transcript format.
//!
//! These are pure predicates over a single line; the lookahead decisions
//! (whether a time needs a following blank separator, whether a name line is
//! echoed) live in [`super::transcript`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Day abbreviations the export uses for same-week timestamps.
pub const DAY_ABBREVS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// `10:30PM` - hour, minute, meridiem with no separating space.
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+:\d+(AM|PM)$").unwrap());

/// `MARCH 3RD, 10:30PM` - month word, ordinal day, comma, time.
static DATED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+ \d+(ND|TH), \d+:\d+(AM|PM)$").unwrap());

/// Exactly two word-character tokens separated by one space.
static FULL_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+ \w+$").unwrap());

/// A lone time token, e.g. `10:30PM`.
pub fn is_bare_time(line: &str) -> bool {
    TIME_RE.is_match(line)
}

/// A day abbreviation followed by a time, e.g. `MON 10:30PM`.
pub fn is_day_and_time(line: &str) -> bool {
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [day, time] => DAY_ABBREVS.contains(day) && TIME_RE.is_match(time),
        _ => false,
    }
}

/// A dated timestamp, e.g. `MARCH 3RD, 10:30PM`. Self-delimiting: unlike the
/// bare forms it needs no blank separator line after it.
pub fn is_dated_time(line: &str) -> bool {
    DATED_RE.is_match(line)
}

/// Structural full-name test. This is a shape heuristic, not a name
/// validator: any two-word message line passes it too, which is why turn
/// detection also requires the first-name echo on the following line.
pub fn is_full_name(line: &str) -> bool {
    FULL_NAME_RE.is_match(line)
}

/// First whitespace-separated token of a line, or `""` for a blank line.
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
