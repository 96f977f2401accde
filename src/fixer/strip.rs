//! Prompt prefix stripping and wrapped-line reconstruction.
//!
//! Console transcripts decorate each input line with a prompt and visually
//! wrap long lines onto physical lines that carry no prompt of their own.
//! This stage removes the prompts and glues wrapped lines back onto the
//! logical line they belong to.
//!
//! **Algorithm** (single forward pass, then a merge pass):
//! 1. Classify and strip the four-character prompt of each line
//! 2. Tag the line as [`Segment::Start`] or [`Segment::Wrap`] using the
//!    [`StripState`] carried from the previous line
//! 3. Concatenate every wrap onto the preceding logical line

use super::prompt::{indent_of, without_prefix, PromptKind, PROMPT_WIDTH};

/// Columns a continuation line may fall back before it counts as a wrap.
const WRAP_DEDENT_TOLERANCE: usize = 4;

/// Where a stripped physical line belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Begins a new logical line
    Start(&'a str),
    /// Continues the previous logical line without a separator
    Wrap(&'a str),
}

impl<'a> Segment<'a> {
    fn text(&self) -> &'a str {
        match self {
            Self::Start(text) | Self::Wrap(text) => text,
        }
    }
}

/// State carried from one physical line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripState {
    /// Previous line carried a numbered prompt
    pub last_was_numbered: bool,
    /// Indent of the last `"... "` line, while inside a continuation block
    pub continuation_indent: Option<usize>,
}

impl StripState {
    /// Strip one line and classify it, returning the state for the next line.
    pub fn step<'a>(self, line: &'a str) -> (Segment<'a>, StripState) {
        let kind = PromptKind::classify(line);
        let content = if kind.is_prompt() {
            without_prefix(line, PROMPT_WIDTH)
        } else {
            line
        };
        let indent = indent_of(content);

        let mut wrapped = self.last_was_numbered && kind != PromptKind::Numbered;

        if kind == PromptKind::Continuation {
            if let (Some(tracked), Some(current)) = (self.continuation_indent, indent) {
                if current == 0 || current + WRAP_DEDENT_TOLERANCE < tracked {
                    wrapped = true;
                }
            }
        }

        let continuation_indent = match kind {
            PromptKind::Continuation => Some(indent.unwrap_or(0)),
            PromptKind::Primary | PromptKind::Numbered => None,
            PromptKind::None => self.continuation_indent,
        };

        let next = StripState {
            last_was_numbered: kind == PromptKind::Numbered,
            continuation_indent,
        };

        let segment = if wrapped {
            Segment::Wrap(content)
        } else {
            Segment::Start(content)
        };
        (segment, next)
    }
}

/// Split `lines` into prompt-free segments.
pub fn segments<S: AsRef<str>>(lines: &[S]) -> Vec<Segment<'_>> {
    let mut state = StripState::default();
    lines
        .iter()
        .map(|line| {
            let (segment, next) = state.step(line.as_ref());
            state = next;
            segment
        })
        .collect()
}

/// Remove console prompts and merge wrapped lines into their logical line.
///
/// Lines without any prompt and without a preceding numbered prompt pass
/// through untouched, so ordinary source text is returned as-is.
pub fn strip_prefixes<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let segments = segments(lines);
    let wraps = segments
        .iter()
        .filter(|s| matches!(s, Segment::Wrap(_)))
        .count();

    let mut merged: Vec<String> = Vec::with_capacity(segments.len() - wraps);
    for segment in segments {
        if let (Segment::Wrap(text), Some(previous)) = (&segment, merged.last_mut()) {
            previous.push_str(text);
            continue;
        }
        merged.push(segment.text().to_string());
    }

    if wraps > 0 {
        tracing::debug!(wraps, lines = merged.len(), "merged wrapped console lines");
    }
    merged
}
