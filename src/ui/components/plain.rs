//! Unstyled text, for pipes and logs.

use crate::domain::StyledText;
use crate::ui::helpers::strip_ansi;
use std::io::{self, Write};

pub fn render_lines<W: Write>(lines: &[StyledText], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", strip_ansi(&line.text))?;
    }
    Ok(())
}
