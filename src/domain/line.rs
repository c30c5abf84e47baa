//! Single-line rendering.
//!
//! A game response is shown one line at a time. Every line gets the `line`
//! class; while ASCII mode is on, lines above the trailing prose block also get
//! `ascii-line` so the output surface can present them as art (monospace, no
//! wrapping, a different color).
//!
//! The style depends only on `(index, total_length, ascii)`. Nothing is
//! validated: negative or out-of-range values simply make the comparison
//! false or true the way integer arithmetic says.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing lines in a response that are prose, never art.
pub const TRAILING_TEXT_LINES: i64 = 3;

/// Input record for [`render_line`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineProps {
    /// Position of this line in its response.
    pub index: i64,
    /// Content shown verbatim.
    pub text: String,
    /// Number of lines in the enclosing response.
    pub total_length: i64,
    /// Whether ASCII mode is enabled.
    pub ascii: bool,
}

impl LineProps {
    #[must_use]
    pub fn new(index: i64, text: impl Into<String>, total_length: i64, ascii: bool) -> Self {
        Self {
            index,
            text: text.into(),
            total_length,
            ascii,
        }
    }
}

/// Style class attached to a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    /// Base class, present on every line.
    Line,
    /// Art line shown while ASCII mode is on.
    AsciiLine,
}

impl StyleClass {
    /// Class name as it appears in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::AsciiLine => "ascii-line",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal text paired with its ordered style classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub classes: Vec<StyleClass>,
}

impl StyledText {
    /// Space-separated class list, e.g. `"line ascii-line"`.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes
            .iter()
            .map(|class| class.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn has_class(&self, class: StyleClass) -> bool {
        self.classes.contains(&class)
    }

    /// Most specific class of this line. Surfaces style by this one.
    #[must_use]
    pub fn primary_class(&self) -> StyleClass {
        self.classes.last().copied().unwrap_or(StyleClass::Line)
    }
}

/// Returns `true` when a line at `index` takes the ASCII-art style.
///
/// # Example
///
/// ```
/// use linedisplay::is_ascii_line;
///
/// assert!(is_ascii_line(0, 10, true));
/// assert!(!is_ascii_line(8, 10, true));
/// assert!(!is_ascii_line(0, 10, false));
/// ```
#[must_use]
pub const fn is_ascii_line(index: i64, total_length: i64, ascii: bool) -> bool {
    ascii && index < total_length.saturating_sub(TRAILING_TEXT_LINES)
}

/// Renders one line into a [`StyledText`].
///
/// Total over its input: never fails and never panics, including for
/// `i64::MIN` and `i64::MAX`.
///
/// # Example
///
/// ```
/// use linedisplay::{render_line, LineProps};
///
/// let styled = render_line(LineProps::new(0, "  /\\_/\\", 10, true));
/// assert_eq!(styled.class_name(), "line ascii-line");
/// assert_eq!(styled.text, "  /\\_/\\");
/// ```
#[must_use]
pub fn render_line(props: LineProps) -> StyledText {
    let mut classes = vec![StyleClass::Line];
    if is_ascii_line(props.index, props.total_length, props.ascii) {
        classes.push(StyleClass::AsciiLine);
    }

    StyledText {
        text: props.text,
        classes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::art_at_top(0, 10, true, "line ascii-line")]
    #[case::inside_trailing_block(8, 10, true, "line")]
    #[case::ascii_mode_off(0, 10, false, "line")]
    #[case::short_response(2, 3, true, "line")]
    #[case::last_art_line(6, 10, true, "line ascii-line")]
    #[case::first_prose_line(7, 10, true, "line")]
    #[case::empty_response(0, 0, true, "line")]
    #[case::negative_index(-1, 3, true, "line ascii-line")]
    #[case::index_past_end(12, 10, true, "line")]
    fn classes_follow_position_and_mode(
        #[case] index: i64,
        #[case] total_length: i64,
        #[case] ascii: bool,
        #[case] expected: &str,
    ) {
        let styled = render_line(LineProps::new(index, "text", total_length, ascii));
        assert_eq!(styled.class_name(), expected);
    }

    #[test]
    fn base_class_always_comes_first() {
        for index in -5..15 {
            for total_length in -5..15 {
                for ascii in [false, true] {
                    let styled = render_line(LineProps::new(index, "", total_length, ascii));
                    assert_eq!(styled.classes[0], StyleClass::Line);
                    assert_eq!(
                        styled.has_class(StyleClass::AsciiLine),
                        ascii && index < total_length - 3
                    );
                }
            }
        }
    }

    #[test]
    fn text_is_carried_verbatim() {
        let text = "  <b>&nbsp;</b>  \t";
        let styled = render_line(LineProps::new(0, text, 10, true));
        assert_eq!(styled.text, text);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(!is_ascii_line(i64::MAX, i64::MIN, true));
        assert!(is_ascii_line(i64::MIN, i64::MAX, true));
        assert!(!is_ascii_line(i64::MIN, i64::MIN, true));
    }

    #[test]
    fn rendering_is_deterministic() {
        let props = LineProps::new(1, "|__|", 6, true);
        assert_eq!(render_line(props.clone()), render_line(props));
    }

    #[test]
    fn primary_class_prefers_ascii() {
        let art = render_line(LineProps::new(0, "", 10, true));
        let prose = render_line(LineProps::new(9, "", 10, true));
        assert_eq!(art.primary_class(), StyleClass::AsciiLine);
        assert_eq!(prose.primary_class(), StyleClass::Line);
    }

    #[test]
    fn classes_serialize_as_markup_names() {
        let styled = render_line(LineProps::new(0, "x", 10, true));
        let json = serde_json::to_value(&styled).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "x", "classes": ["line", "ascii-line"] })
        );
    }
}
