//! HTML paragraphs, one per line.
//!
//! Mirrors the markup of the web console: `<p class="line ascii-line">`.
//! Styling is left to the page's stylesheet.

use crate::domain::StyledText;
use crate::ui::helpers::{escape_html, strip_ansi};
use std::io::{self, Write};

pub fn render_lines<W: Write>(lines: &[StyledText], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(
            out,
            "<p class=\"{}\">{}</p>",
            line.class_name(),
            escape_html(&strip_ansi(&line.text))
        )?;
    }
    Ok(())
}
