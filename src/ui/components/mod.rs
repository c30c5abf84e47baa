//! Output surface renderers.
//!
//! Each component writes a list of styled lines to any `std::io::Write` in
//! one output format.
//!
//! # Components
//!
//! - [`ansi`]: Truecolor terminal output driven by the theme
//! - [`html`]: `<p class="...">` elements for the web console
//! - [`json`]: Serialized records for external renderers
//! - [`plain`]: Text only, escape sequences stripped

pub mod ansi;
pub mod html;
pub mod json;
pub mod plain;

#[cfg(test)]
mod tests {
    use crate::domain::render_response;
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::EmptyState;

    const RESPONSE: &str = "/\\\n\\/\nYou are in \u{1b}[34mRoom 2\u{1b}[0m\nNo items.\nNo <monsters> & co.";

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn html_marks_art_lines_and_escapes_text() {
        let mut out = Vec::new();
        super::html::render_lines(&render_response(RESPONSE, true), &mut out).unwrap();

        let html = to_string(out);
        let paragraphs: Vec<&str> = html.lines().collect();
        assert_eq!(paragraphs.len(), 5);
        assert_eq!(paragraphs[0], "<p class=\"line ascii-line\">/\\</p>");
        assert_eq!(paragraphs[1], "<p class=\"line ascii-line\">\\/</p>");
        assert_eq!(paragraphs[2], "<p class=\"line\">You are in Room 2</p>");
        assert_eq!(paragraphs[4], "<p class=\"line\">No &lt;monsters&gt; &amp; co.</p>");
    }

    #[test]
    fn ansi_styles_by_primary_class_and_resets_each_line() {
        let theme = Theme::default();
        let mut out = Vec::new();
        super::ansi::render_lines(&render_response(RESPONSE, true), &theme, &mut out).unwrap();

        let text = to_string(out);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with(&Theme::fg(&theme.colors.ascii_fg)));
        assert!(lines[3].starts_with(&Theme::fg(&theme.colors.line_fg)));
        assert!(lines.iter().all(|line| line.ends_with(Theme::reset())));
        // colors embedded by the game survive
        assert!(lines[2].contains("\u{1b}[34mRoom 2"));
    }

    #[test]
    fn ansi_theme_style_survives_resets_from_the_game() {
        let theme = Theme::default();
        let art = Theme::fg(&theme.colors.ascii_fg);
        let mut out = Vec::new();
        let lines = render_response("\u{1b}[34mRoom\u{1b}[0m tail\nx\u{1b}[m y\nb\nc\nd", true);
        super::ansi::render_lines(&lines, &theme, &mut out).unwrap();

        let text = to_string(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            format!("{art}\u{1b}[34mRoom\u{1b}[0m{art} tail{}", Theme::reset())
        );
        assert_eq!(lines[1], format!("{art}x\u{1b}[m{art} y{}", Theme::reset()));
    }

    #[test]
    fn ansi_empty_state_uses_its_color() {
        let theme = Theme::default();
        let empty = EmptyState {
            message: "Nothing to display".to_string(),
        };
        let mut out = Vec::new();
        super::ansi::render_empty_state(&empty, &theme, &mut out).unwrap();

        let text = to_string(out);
        assert!(text.contains(&Theme::fg(&theme.colors.empty_state_fg)));
        assert!(text.contains("Nothing to display"));
    }

    #[test]
    fn json_lists_text_and_classes() {
        let mut out = Vec::new();
        super::json::render_lines(&render_response("art\na\nb\nc", true), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["classes"], serde_json::json!(["line", "ascii-line"]));
        assert_eq!(value[1]["classes"], serde_json::json!(["line"]));
        assert_eq!(value[3]["text"], "c");
    }

    #[test]
    fn plain_strips_styling() {
        let mut out = Vec::new();
        super::plain::render_lines(&render_response(RESPONSE, true), &mut out).unwrap();

        let text = to_string(out);
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("You are in Room 2\n"));
    }
}
