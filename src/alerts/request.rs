//! Wire request formatting

/// Split a raw recipient string into recipient identifiers
///
/// Recipients are separated by any run of whitespace or commas. Order is
/// preserved and duplicates are kept.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|nick| !nick.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the request body: one `msg <recipient> <message>` line per recipient
///
/// Lines are joined with `\n`; no trailing newline is appended.
pub fn format_request(message: &str, recipients: &[String]) -> String {
    recipients
        .iter()
        .map(|nick| format!("msg {} {}", nick, message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(
            parse_recipients("Bob, Alice Carol"),
            vec!["Bob", "Alice", "Carol"]
        );
    }

    #[test]
    fn test_parse_runs_and_edges() {
        assert_eq!(
            parse_recipients(" ,Bob,,\tAlice \n, "),
            vec!["Bob", "Alice"]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_recipients("Bob Bob"), vec!["Bob", "Bob"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients(" , ").is_empty());
    }

    #[test]
    fn test_format_request() {
        let recipients = parse_recipients("Bob, Alice Carol");
        assert_eq!(
            format_request("hi", &recipients),
            "msg Bob hi\nmsg Alice hi\nmsg Carol hi"
        );
    }

    #[test]
    fn test_format_request_multiline_message() {
        let recipients = vec!["Bob".to_string(), "Alice".to_string()];
        assert_eq!(
            format_request("line one\nline two\n", &recipients),
            "msg Bob line one\nline two\n\nmsg Alice line one\nline two\n"
        );
    }

    #[test]
    fn test_format_request_no_recipients() {
        assert_eq!(format_request("hi", &[]), "");
    }
}
