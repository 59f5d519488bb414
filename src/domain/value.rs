// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value decoding and quoting.
//!
//! Raw values come in three styles:
//!
//! - **single-quoted** (`'...'`): taken verbatim, interior whitespace kept,
//!   `\n` stays a backslash followed by `n`;
//! - **double-quoted** (`"..."`): interior whitespace kept, every `\n` becomes
//!   a newline and `\"` becomes `"`;
//! - **unquoted**: surrounding whitespace trimmed.
//!
//! [`encode_value`] is the inverse used by the serializer.

/// Decodes a raw value taken from the right-hand side of an assignment.
///
/// Inside double quotes `\n` becomes a newline and `\"` becomes `"`; any
/// other backslash is kept as written.
///
/// # Examples
///
/// ```
/// use envsafe::domain::value::decode_value;
///
/// assert_eq!(decode_value("  plain  "), "plain");
/// assert_eq!(decode_value("'  kept  '"), "  kept  ");
/// assert_eq!(decode_value(r#""hello\nworld""#), "hello\nworld");
/// assert_eq!(decode_value(r"'hello\nworld'"), r"hello\nworld");
/// assert_eq!(decode_value(r#""say \"hi\"""#), r#"say "hi""#);
/// ```
pub fn decode_value(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(inner) = strip_quote_pair(trimmed, '\'') {
        inner.to_string()
    } else if let Some(inner) = strip_quote_pair(trimmed, '"') {
        unescape_double_quoted(inner)
    } else {
        trimmed.to_string()
    }
}

/// Encodes a value so that [`decode_value`] yields it back.
///
/// Values are written bare unless they contain a newline, have leading or
/// trailing whitespace, or start with a quote character. Quoted values prefer
/// single quotes; a value containing `'` or a newline uses double quotes with
/// `"` escaped as `\"` and newlines written as `\n`.
///
/// # Examples
///
/// ```
/// use envsafe::domain::value::encode_value;
///
/// assert_eq!(encode_value("basic"), "basic");
/// assert_eq!(encode_value("  padded "), "'  padded '");
/// assert_eq!(encode_value("it's here "), r#""it's here ""#);
/// assert_eq!(encode_value("hello\nworld"), r#""hello\nworld""#);
/// ```
pub fn encode_value(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }

    if value.contains('\'') || value.contains('\n') {
        let mut encoded = String::with_capacity(value.len() + 2);
        encoded.push('"');
        for c in value.chars() {
            match c {
                '"' => encoded.push_str("\\\""),
                '\n' => encoded.push_str("\\n"),
                other => encoded.push(other),
            }
        }
        encoded.push('"');
        encoded
    } else {
        format!("'{value}'")
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains('\n')
        || value.trim() != value
        || value.starts_with('\'')
        || value.starts_with('"')
}

// A lone quote character is not a pair.
fn strip_quote_pair(value: &str, quote: char) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    value.strip_prefix(quote)?.strip_suffix(quote)
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                decoded.push('\n');
                chars.next();
            }
            Some('"') => {
                decoded.push('"');
                chars.next();
            }
            _ => decoded.push('\\'),
        }
    }
    decoded
}
