//! macOS pasteboard clipboard tool.

use super::{read_stdout, write_stdin};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// macOS pasteboard tool.
///
/// Reads with `pbpaste` and writes with `pbcopy`.
pub struct Pasteboard;

impl Pasteboard {
    /// Create a new Pasteboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pasteboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Pasteboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_read_text(&self) -> Result<String, ToolError> {
        read_stdout("pbpaste", &[])
    }

    fn try_write_text(&self, text: &str) -> Result<(), ToolError> {
        write_stdin("pbcopy", &[], text)
    }
}

impl Default for Pasteboard {
    fn default() -> Self {
        Self::new()
    }
}
