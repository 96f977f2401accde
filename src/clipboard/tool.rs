//! ClipboardTool trait and related error types.

use super::result::ClipboardMethod;

/// A tool that can read and write plain text on the system clipboard.
///
/// Each implementation wraps a specific OS tool (pbcopy, xclip, etc.)
/// and knows how to invoke it correctly.
pub trait ClipboardTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> ClipboardMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Read the clipboard as plain text.
    fn try_read_text(&self) -> Result<String, ToolError>;

    /// Replace the clipboard contents with `text`.
    fn try_write_text(&self, text: &str) -> Result<(), ToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool doesn't support this operation
    NotSupported,
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
    /// Clipboard holds something other than UTF-8 text
    NotText,
}
