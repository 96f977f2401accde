//! Linux Wayland clipboard tool.

use super::{binary_exists, read_stdout, write_stdin};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux Wayland clipboard tool using wl-paste and wl-copy.
///
/// Only used when a Wayland session is running; X11 tools are tried next.
pub struct WlClipboard;

impl WlClipboard {
    /// Create a new WlClipboard tool.
    pub fn new() -> Self {
        Self
    }

    fn in_wayland_session() -> bool {
        std::env::var_os("WAYLAND_DISPLAY").is_some()
    }
}

impl ClipboardTool for WlClipboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::WlClipboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::in_wayland_session() && binary_exists("wl-paste")
    }

    fn try_read_text(&self) -> Result<String, ToolError> {
        // wl-paste appends a newline unless told not to
        read_stdout("wl-paste", &["--no-newline"])
    }

    fn try_write_text(&self, text: &str) -> Result<(), ToolError> {
        write_stdin("wl-copy", &[], text)
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
