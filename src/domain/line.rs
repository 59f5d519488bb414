// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line classification for dotenv documents.
//!
//! A line is an assignment when it matches `^\s*[A-Za-z_][A-Za-z0-9_ ]*\s*=`.
//! Everything else (comments, blank lines, keys starting with a digit) is
//! simply not an assignment and gets skipped by the parser.

/// Returns `true` if `line` is a `KEY=VALUE` assignment.
///
/// # Examples
///
/// ```
/// use envsafe::domain::line::is_assignment_line;
///
/// assert!(is_assignment_line("BASIC=basic"));
/// assert!(is_assignment_line("\tINDENTED = value"));
/// assert!(!is_assignment_line("# COMMENT=value"));
/// assert!(!is_assignment_line("1INVALID=oops"));
/// ```
pub fn is_assignment_line(line: &str) -> bool {
    let mut chars = line.trim_start().chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    // Once a non-key whitespace character shows up, only whitespace may
    // separate the key from `=`.
    let mut in_key = true;
    for c in chars {
        if c == '=' {
            return true;
        }
        if in_key && is_key_char(c) {
            continue;
        }
        if !c.is_whitespace() {
            return false;
        }
        in_key = false;
    }
    false
}

/// Splits an assignment line into its trimmed key and raw value.
///
/// Only the first `=` separates key from value; any later `=` is part of the
/// value. Returns `None` for lines that are not assignments.
///
/// # Examples
///
/// ```
/// use envsafe::domain::line::split_assignment;
///
/// assert_eq!(split_assignment("  EQUALS=equ==als"), Some(("EQUALS", "equ==als")));
/// assert_eq!(split_assignment("#EQUALS=nope"), None);
/// ```
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    if !is_assignment_line(line) {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value))
}

// Spaces are tolerated inside keys ("VAR NAME=x"); tabs and other
// whitespace only around them.
fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ' '
}
