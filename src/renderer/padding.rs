//! Alignment padding for rendered placeholder values

use std::fmt::{self, Write};

use crate::parser::token::{Alignment, AlignmentDirection};

fn write_spaces(output: &mut dyn Write, count: usize) -> fmt::Result {
    for _ in 0..count {
        output.write_char(' ')?;
    }
    Ok(())
}

/// Write `content` padded with spaces to at least the alignment width.
///
/// Width is counted in chars. Content already at or over the width is
/// written unchanged; it is never truncated.
pub fn write_aligned(output: &mut dyn Write, content: &str, alignment: Alignment) -> fmt::Result {
    let padding = alignment.width.saturating_sub(content.chars().count());
    match alignment.direction {
        AlignmentDirection::Left => {
            output.write_str(content)?;
            write_spaces(output, padding)
        }
        AlignmentDirection::Right => {
            write_spaces(output, padding)?;
            output.write_str(content)
        }
    }
}
