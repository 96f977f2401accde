//! Console prompt detection.
//!
//! Every prompt the console prints is exactly four characters wide, so a
//! line is classified by looking at its first four characters only.

/// Width of every recognized prompt prefix, in characters.
pub const PROMPT_WIDTH: usize = 4;

/// Prompt printed before a new top-level statement.
pub const PRIMARY_PROMPT: &str = ">>> ";

/// Prompt printed before a line continuing a multi-line statement.
pub const CONTINUATION_PROMPT: &str = "... ";

/// Width of the right-aligned line number in a numbered prompt.
const LINE_NUMBER_WIDTH: usize = 3;

/// Kind of console prompt found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Right-aligned line number followed by a space, e.g. `"  1 "`
    Numbered,
    /// `">>> "`
    Primary,
    /// `"... "`
    Continuation,
    /// No recognized prompt
    None,
}

impl PromptKind {
    /// Classify the first four characters of `line`.
    ///
    /// Lines shorter than four characters never carry a prompt.
    pub fn classify(line: &str) -> Self {
        let prefix = leading_prefix(line, PROMPT_WIDTH);
        if is_numbered_prompt(prefix) {
            Self::Numbered
        } else if prefix == PRIMARY_PROMPT {
            Self::Primary
        } else if prefix == CONTINUATION_PROMPT {
            Self::Continuation
        } else {
            Self::None
        }
    }

    /// Whether a prefix should be stripped for this kind.
    pub fn is_prompt(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Check whether `prefix` is a clean numbered prompt (`"NNN "`).
///
/// The trimmed slice must parse as a number that, rendered back right-aligned
/// to width 3 and followed by one space, reproduces `prefix` exactly. This
/// rejects signs, leading zeros, fractions and anything that is not a bare
/// line number.
pub fn is_numbered_prompt(prefix: &str) -> bool {
    match prefix.trim().parse::<u32>() {
        Ok(number) => format!("{:>width$} ", number, width = LINE_NUMBER_WIDTH) == prefix,
        Err(_) => false,
    }
}

/// First `count` characters of `line` (the whole line when it is shorter).
pub fn leading_prefix(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// `line` without its first `count` characters.
pub fn without_prefix(line: &str, count: usize) -> &str {
    &line[leading_prefix(line, count).len()..]
}

/// Character offset of the first non-whitespace character.
///
/// Returns `None` for empty and whitespace-only lines.
pub fn indent_of(line: &str) -> Option<usize> {
    line.chars().position(|c| !c.is_whitespace())
}

/// Whether a line has no visible content.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
