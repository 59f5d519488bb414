// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-document parsing and serialization.
//!
//! Parsing is permissive: lines that are not assignments are skipped, never
//! reported. Each assignment lives on a single source line; embedded newlines
//! only come from `\n` escapes inside double quotes.

use crate::domain::dotenv_config::DotenvConfig;
use crate::domain::line::split_assignment;
use crate::domain::value::{decode_value, encode_value};

/// Parses dotenv text into a [`DotenvConfig`].
///
/// A leading byte order mark is ignored.
///
/// # Examples
///
/// ```
/// use envsafe::domain::document::parse;
///
/// let config = parse("# comment\nBASIC=basic\n\nQUOTED='  kept  '\n1INVALID=oops\n");
/// assert_eq!(config.get("BASIC"), Some("basic"));
/// assert_eq!(config.get("QUOTED"), Some("  kept  "));
/// assert!(!config.contains_key("1INVALID"));
/// ```
pub fn parse(text: &str) -> DotenvConfig {
    let mut config = DotenvConfig::new();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (number, line) in text.lines().enumerate() {
        match split_assignment(line) {
            Some((key, raw)) => {
                config.insert(key, decode_value(raw));
            }
            None => {
                let trimmed = line.trim_start();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    tracing::trace!("Skipping non-assignment line {}", number + 1);
                }
            }
        }
    }

    config
}

/// Serializes a config into dotenv text, one `KEY=value` line per entry.
///
/// Every line, including the last, ends with `\n`. Values are quoted as
/// described by [`encode_value`].
///
/// # Examples
///
/// ```
/// use envsafe::domain::document::stringify;
/// use envsafe::domain::DotenvConfig;
///
/// let config: DotenvConfig = [("BASIC", "basic"), ("PADDED", " x ")].into_iter().collect();
/// assert_eq!(stringify(&config), "BASIC=basic\nPADDED=' x '\n");
/// ```
pub fn stringify(config: &DotenvConfig) -> String {
    let mut out = String::new();
    for (key, value) in config.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(&encode_value(value));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_documents() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
        assert!(parse("# only a comment\n#ANOTHER=comment\n").is_empty());
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let config = parse("\u{feff}FIRST=1\nSECOND=2\n");
        assert_eq!(config.get("FIRST"), Some("1"));
        assert_eq!(config.get("SECOND"), Some("2"));
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let config = parse("KEY=first\nOTHER=x\nKEY=second\n");
        assert_eq!(config.get("KEY"), Some("second"));
        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["KEY", "OTHER"]);
    }

    #[test]
    fn test_parse_crlf_lines() {
        let config = parse("A=1\r\nB='two'\r\n");
        assert_eq!(config.get("A"), Some("1"));
        assert_eq!(config.get("B"), Some("two"));
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let config = parse("this is junk\nKEY-DASH=1\n=value\nGOOD=yes\n");
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("GOOD"), Some("yes"));
    }

    #[test]
    fn test_parse_keeps_equals_in_value() {
        let config = parse("EQUALS=equ==als\nURL=postgres://u:p@h/db?sslmode=require");
        assert_eq!(config.get("EQUALS"), Some("equ==als"));
        assert_eq!(config.get("URL"), Some("postgres://u:p@h/db?sslmode=require"));
    }

    #[test]
    fn test_stringify_empty() {
        assert_eq!(stringify(&DotenvConfig::new()), "");
    }

    #[test]
    fn test_stringify_quotes_when_needed() {
        let config: DotenvConfig = [
            ("BASIC", "basic"),
            ("EMPTY", ""),
            ("MULTILINE", "hello\nworld"),
            ("WHITESPACE", "    whitespace   "),
            ("APOSTROPHE", " it's "),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            stringify(&config),
            "BASIC=basic\nEMPTY=\nMULTILINE=\"hello\\nworld\"\nWHITESPACE='    whitespace   '\nAPOSTROPHE=\" it's \"\n"
        );
    }

    #[test]
    fn test_stringify_then_parse() {
        let config: DotenvConfig = [
            ("JSON", r#"{"foo": "bar"}"#),
            ("MULTILINE", "hello\nworld"),
            ("QUOTED", "'already quoted'"),
            ("BOTH", "' and \" "),
            ("THE_ANSWER", "42"),
        ]
        .into_iter()
        .collect();

        assert_eq!(parse(&stringify(&config)), config);
    }
}
