//! Shared text utilities for the output surfaces.
//!
//! Game responses may already carry ANSI color codes (room names, items and
//! monsters are colored by the game itself). Surfaces that are not terminals
//! strip them before writing.

/// Removes ANSI escape sequences from `text`.
///
/// Handles CSI sequences (`ESC [ ... final`), OSC sequences terminated by BEL
/// or `ESC \`, and two-byte escapes. An unterminated sequence at the end of
/// the input is dropped.
///
/// # Example
///
/// ```rust
/// use linedisplay::ui::helpers::strip_ansi;
///
/// assert_eq!(strip_ansi("\u{1b}[31mRoom 1\u{1b}[0m"), "Room 1");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('[') => {
                // parameters and intermediates, then one final byte in @..=~
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\u{7}' {
                        break;
                    }
                    if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    out
}

/// Escapes the characters that are significant in HTML text and attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
