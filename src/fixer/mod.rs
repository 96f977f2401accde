//! Console transcript clean-up for pasting into source files.
//!
//! Text copied from an interactive Python console carries prompts (`>>> `,
//! `... `, or right-aligned line numbers) and is indented relative to the
//! console, not to the place it is pasted. The fixer runs two pure stages:
//!
//! 1. [`strip`] removes prompts and merges visually wrapped lines
//! 2. [`indent`] shifts the block to the cursor column of the paste target
//!
//! # Module Structure
//!
//! - [`prompt`] - Prompt classification and small line predicates
//! - [`strip`] - Prefix stripping and wrap merging
//! - [`indent`] - Indentation re-anchoring
//! - [`line_ending`] - Separator detection, split and join
//! - [`context`] - Paste target settings

pub mod context;
pub mod indent;
pub mod line_ending;
pub mod prompt;
pub mod strip;

pub use context::{IndentStyle, PasteContext};
pub use indent::IndentNormalizer;
pub use line_ending::LineEnding;
pub use prompt::PromptKind;
pub use strip::strip_prefixes;

/// Result of running the fixer over a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fix {
    /// Fewer than two non-blank lines; the text is pasted as-is
    NothingToFix,
    /// The stages ran but produced the original text
    Unchanged,
    /// Rewritten text, joined with the original line ending
    Fixed(String),
}

impl Fix {
    /// Kind of outcome, without the text.
    pub fn kind(&self) -> FixKind {
        match self {
            Self::NothingToFix => FixKind::NothingToFix,
            Self::Unchanged => FixKind::Unchanged,
            Self::Fixed(_) => FixKind::Fixed,
        }
    }

    /// Text to paste: the rewritten text, or `original` when nothing changed.
    pub fn into_text(self, original: &str) -> String {
        match self {
            Self::Fixed(text) => text,
            Self::NothingToFix | Self::Unchanged => original.to_string(),
        }
    }
}

/// Outcome of a fix without the rewritten text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixKind {
    NothingToFix,
    Unchanged,
    Fixed,
}

impl FixKind {
    /// Short description for status output.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NothingToFix => "nothing to fix",
            Self::Unchanged => "already clean",
            Self::Fixed => "fixed",
        }
    }
}

/// Strip console prompts from `text` and re-indent it for `ctx`.
pub fn fix_text(text: &str, ctx: &PasteContext) -> Fix {
    let ending = LineEnding::detect(text);
    let lines = ending.split(text);
    let stripped = strip_prefixes(&lines);

    let Some(normalized) = IndentNormalizer::new(*ctx).normalize(&stripped) else {
        tracing::debug!(lines = lines.len(), "fewer than two non-blank lines");
        return Fix::NothingToFix;
    };

    let fixed = ending.join(&normalized);
    tracing::debug!(
        ?ending,
        lines_in = lines.len(),
        lines_out = normalized.len(),
        "fixed console text"
    );

    if fixed == text {
        Fix::Unchanged
    } else {
        Fix::Fixed(fixed)
    }
}
