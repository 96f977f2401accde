//! Linux xsel clipboard tool.

use super::{binary_exists, read_stdout, write_stdin};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using xsel.
pub struct Xsel;

impl Xsel {
    /// Create a new Xsel tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xsel {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("xsel")
    }

    fn try_read_text(&self) -> Result<String, ToolError> {
        read_stdout("xsel", &["--clipboard", "--output"])
    }

    fn try_write_text(&self, text: &str) -> Result<(), ToolError> {
        write_stdin("xsel", &["--clipboard", "--input"], text)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
