//! Daemon reply classification

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode digits.
static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"answer [0-9]+").unwrap());

/// Shape of a daemon reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyClass {
    /// `answer <n>` followed by a `success` line
    Success,
    /// Anything else
    Malformed,
}

/// Classify the raw bytes the daemon sent back
///
/// The reply is lower-cased and split on `\n`, dropping trailing empty
/// segments. It is a success only when exactly two lines remain, the first
/// containing `answer <digits>` and the second containing `success`.
pub fn classify_reply(raw: &[u8]) -> ReplyClass {
    let text = String::from_utf8_lossy(raw).to_lowercase();

    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    match lines.as_slice() {
        [first, second] if is_answer_line(first) && second.contains("success") => {
            ReplyClass::Success
        }
        _ => ReplyClass::Malformed,
    }
}

fn is_answer_line(line: &str) -> bool {
    ANSWER_LINE.is_match(line)
}
