//! Terminal output with truecolor escape sequences.

use crate::domain::StyledText;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// SGR sequences that clear every attribute.
const EMBEDDED_RESETS: [&str; 2] = ["\u{001b}[0m", "\u{001b}[m"];

/// Writes each line wrapped in the theme style of its primary class.
///
/// Text is written as-is so colors the game already embedded keep working.
/// A reset embedded by the game is followed by the theme style again, so the
/// rest of the line keeps the line's colors. Every line ends with a reset
/// before the newline so styles never leak into the next line.
///
/// # Parameters
///
/// * `lines` - Styled lines in display order
/// * `theme` - Active color theme
/// * `out` - Destination writer
pub fn render_lines<W: Write>(lines: &[StyledText], theme: &Theme, out: &mut W) -> io::Result<()> {
    for line in lines {
        let style = theme.style_for(line.primary_class());
        write!(out, "{style}")?;
        write!(out, "{}", restyle_after_resets(&line.text, &style))?;
        writeln!(out, "{}", Theme::reset())?;
    }
    Ok(())
}

fn restyle_after_resets(text: &str, style: &str) -> String {
    EMBEDDED_RESETS
        .iter()
        .fold(text.to_string(), |text, reset| text.replace(reset, &format!("{reset}{style}")))
}

/// Writes the empty-state message in bold.
pub fn render_empty_state<W: Write>(
    empty: &EmptyState,
    theme: &Theme,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", Theme::bold())?;
    write!(out, "{}", Theme::fg(&theme.colors.empty_state_fg))?;
    write!(out, "{}", empty.message)?;
    writeln!(out, "{}", Theme::reset())
}
