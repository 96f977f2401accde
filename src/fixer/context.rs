//! Indentation context of the paste target.

/// Smallest accepted tab width.
pub const MIN_TAB_SIZE: usize = 1;

/// Largest accepted tab width.
pub const MAX_TAB_SIZE: usize = 16;

/// Rightmost cursor column a block is shifted to.
pub const MAX_COLUMN: usize = 1024;

/// Indentation style used by the paste target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// Indent with `width` spaces per level
    Spaces { width: usize },
    /// Indent with one tab per level
    Tabs,
}

impl IndentStyle {
    /// Build a style from editor-like settings.
    ///
    /// `tab_size` is clamped to `MIN_TAB_SIZE..=MAX_TAB_SIZE`.
    pub fn new(insert_spaces: bool, tab_size: usize) -> Self {
        if insert_spaces {
            Self::Spaces {
                width: tab_size.clamp(MIN_TAB_SIZE, MAX_TAB_SIZE),
            }
        } else {
            Self::Tabs
        }
    }

    /// One level of indentation.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces { width } => " ".repeat((*width).clamp(MIN_TAB_SIZE, MAX_TAB_SIZE)),
            Self::Tabs => "\t".to_string(),
        }
    }

    /// Character used to fill indentation columns.
    pub fn fill_char(&self) -> char {
        match self {
            Self::Spaces { .. } => ' ',
            Self::Tabs => '\t',
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self::Spaces { width: 4 }
    }
}

/// Snapshot of the paste target, taken once per paste.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasteContext {
    /// Column of the cursor where the text is pasted
    pub base_indent: usize,
    /// Indentation style of the target
    pub style: IndentStyle,
}

impl PasteContext {
    /// Create a context for a paste at `base_indent`.
    pub fn new(base_indent: usize, style: IndentStyle) -> Self {
        Self { base_indent, style }
    }
}
