//! Re-anchoring of block indentation to the paste target.
//!
//! The first non-blank line is pasted where the cursor already is, so it is
//! left alone. Everything from the next non-blank line on is shifted by the
//! same amount, chosen so that line lands on the cursor column (plus one
//! level when the first line opens a block).

use super::context::{PasteContext, MAX_COLUMN};
use super::prompt::{indent_of, is_blank, without_prefix};

/// Trailing characters that open an indented block on the next line.
pub const BLOCK_OPENERS: &[char] = &[':', '(', '[', '{'];

/// Line that decides how far the block has to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Index of the first non-blank line after line 0
    pub index: usize,
    /// Its current indentation, in characters
    pub indent: usize,
}

/// Locate the re-anchor line.
///
/// Returns `None` when the text has fewer than two non-blank lines, in
/// which case there is no internal indentation to fix.
pub fn find_anchor<S: AsRef<str>>(lines: &[S]) -> Option<Anchor> {
    let mut non_blank = 0;
    let mut anchor = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if let Some(indent) = indent_of(line) {
            non_blank += 1;
            if index != 0 && anchor.is_none() {
                anchor = Some(Anchor { index, indent });
            }
        }
        if non_blank > 1 {
            break;
        }
    }

    if non_blank > 1 {
        anchor
    } else {
        None
    }
}

/// Whether `line` ends with a block-opening character.
pub fn opens_block(line: &str) -> bool {
    line.ends_with(BLOCK_OPENERS)
}

/// Shifts a block of lines to the indentation of the paste target.
#[derive(Debug, Clone, Copy)]
pub struct IndentNormalizer {
    ctx: PasteContext,
}

impl IndentNormalizer {
    /// Create a normalizer for the given paste target.
    pub fn new(ctx: PasteContext) -> Self {
        Self { ctx }
    }

    /// Indentation expected directly under `first_line`.
    fn block_indent(&self, first_line: &str) -> usize {
        if opens_block(first_line) {
            self.ctx.style.unit().len()
        } else {
            0
        }
    }

    /// Signed number of columns every line from the anchor on has to move.
    ///
    /// The cursor column is capped at `MAX_COLUMN`.
    pub fn shift<S: AsRef<str>>(&self, lines: &[S], anchor: Anchor) -> isize {
        let first_line: &str = lines.first().map(|line| line.as_ref()).unwrap_or("");
        let target = self
            .ctx
            .base_indent
            .min(MAX_COLUMN)
            .saturating_add(self.block_indent(first_line));
        let target = isize::try_from(target).unwrap_or(isize::MAX);
        let current = isize::try_from(anchor.indent).unwrap_or(isize::MAX);
        target.saturating_sub(current)
    }

    /// Re-indent `lines`, or return `None` when there is nothing to do.
    ///
    /// Lines before the anchor and blank lines are never touched. When
    /// dedenting, a line never loses more than its own leading whitespace.
    pub fn normalize<S: AsRef<str>>(&self, lines: &[S]) -> Option<Vec<String>> {
        let anchor = find_anchor(lines)?;
        let shift = self.shift(lines, anchor);
        tracing::debug!(
            anchor = anchor.index,
            indent = anchor.indent,
            shift,
            "re-anchoring indentation"
        );

        let padding: String = std::iter::repeat(self.ctx.style.fill_char())
            .take(shift.max(0) as usize)
            .collect();
        let dedent = shift.min(0).unsigned_abs();

        let fixed = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.as_ref();
                if index < anchor.index || shift == 0 || is_blank(line) {
                    return line.to_string();
                }
                if shift > 0 {
                    format!("{}{}", padding, line)
                } else {
                    let available = indent_of(line).unwrap_or(0);
                    without_prefix(line, dedent.min(available)).to_string()
                }
            })
            .collect();

        Some(fixed)
    }
}
