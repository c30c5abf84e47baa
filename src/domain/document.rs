//! Splitting a game response into renderable lines.
//!
//! Responses arrive as one string. The console view splits it on `'\n'` and
//! hands every line to [`render_line`] together with its index and the total
//! line count, which is what lets the trailing prose block keep the plain
//! style in ASCII mode.

use super::line::{render_line, LineProps, StyledText};

/// Splits `response` into per-line render inputs.
///
/// Splitting keeps empty pieces: a trailing newline produces a final empty
/// line and an empty response produces a single empty line. A `'\r'` left
/// over from CRLF line endings is dropped.
///
/// # Example
///
/// ```
/// use linedisplay::layout;
///
/// let lines = layout("art\nart\nart\nYou are in Room 1\nNo items.\nNo monsters.", true);
/// assert_eq!(lines.len(), 6);
/// assert_eq!(lines[3].text, "You are in Room 1");
/// assert!(lines.iter().all(|props| props.total_length == 6));
/// ```
#[must_use]
pub fn layout(response: &str, ascii: bool) -> Vec<LineProps> {
    let pieces: Vec<&str> = response.split('\n').collect();
    let total_length = i64::try_from(pieces.len()).unwrap_or(i64::MAX);

    pieces
        .into_iter()
        .zip(0_i64..)
        .map(|(piece, index)| {
            let text = piece.strip_suffix('\r').unwrap_or(piece);
            LineProps::new(index, text, total_length, ascii)
        })
        .collect()
}

/// Lays out and renders a whole response.
#[must_use]
pub fn render_response(response: &str, ascii: bool) -> Vec<StyledText> {
    let lines: Vec<StyledText> = layout(response, ascii).into_iter().map(render_line).collect();
    tracing::trace!(line_count = lines.len(), ascii, "response rendered");
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line::StyleClass;

    #[test]
    fn indexes_are_sequential_and_share_the_total() {
        let lines = layout("a\nb\nc", false);
        let indexes: Vec<i64> = lines.iter().map(|props| props.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert!(lines.iter().all(|props| props.total_length == 3));
        assert!(lines.iter().all(|props| !props.ascii));
    }

    #[test]
    fn trailing_newline_keeps_an_empty_line() {
        let lines = layout("a\nb\n", true);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].text, "");
    }

    #[test]
    fn empty_response_is_one_empty_line() {
        let lines = layout("", true);
        assert_eq!(lines, vec![LineProps::new(0, "", 1, true)]);
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let lines = layout("one\r\ntwo\r\n", false);
        let texts: Vec<&str> = lines.iter().map(|props| props.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", ""]);
    }

    #[test]
    fn only_lines_above_the_prose_block_are_art() {
        let styled = render_response(" __ \n|__|\nRoom 3\nNo items.\nNo monsters.", true);
        let art: Vec<bool> = styled
            .iter()
            .map(|line| line.has_class(StyleClass::AsciiLine))
            .collect();
        assert_eq!(art, vec![true, true, false, false, false]);
    }

    #[test]
    fn ascii_mode_off_leaves_every_line_plain() {
        let styled = render_response("a\nb\nc\nd\ne\nf", false);
        assert!(styled.iter().all(|line| line.class_name() == "line"));
    }
}
