//! JSON array of styled lines for external rendering surfaces.

use crate::domain::{Result, StyledText};
use std::io::Write;

/// Writes `[{"text": ..., "classes": [...]}, ...]`, pretty-printed, plus a
/// trailing newline.
pub fn render_lines<W: Write>(lines: &[StyledText], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, lines)?;
    writeln!(out)?;
    Ok(())
}
