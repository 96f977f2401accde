//! Linux xclip clipboard tool.

use super::{binary_exists, read_stdout, write_stdin};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using xclip.
///
/// Works on the `CLIPBOARD` selection, not the primary selection.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xclip {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("xclip")
    }

    fn try_read_text(&self) -> Result<String, ToolError> {
        read_stdout("xclip", &["-selection", "clipboard", "-out"])
    }

    fn try_write_text(&self, text: &str) -> Result<(), ToolError> {
        write_stdin("xclip", &["-selection", "clipboard", "-in"], text)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
