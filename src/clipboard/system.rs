//! Clipboard orchestrator.

use super::error::ClipboardError;
use super::result::{ClipboardMethod, ClipboardText};
use super::tool::{ClipboardTool, ToolError};
use super::tools::platform_tools;

/// Reads and writes the system clipboard using available tools.
///
/// Tools are tried in priority order. A tool that is missing or fails is
/// skipped; the last failure is reported if no tool succeeds.
pub struct SystemClipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl SystemClipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Read the clipboard as plain text.
    pub fn read_text(&self) -> Result<ClipboardText, ClipboardError> {
        let mut last_error = None;

        for tool in self.available() {
            match tool.try_read_text() {
                Ok(text) => {
                    tracing::debug!(tool = tool.name(), bytes = text.len(), "read clipboard");
                    return Ok(ClipboardText::new(text, tool.method()));
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(e) => {
                    tracing::debug!(tool = tool.name(), error = ?e, "clipboard read failed");
                    last_error = Some(tool_error(&**tool, e));
                }
            }
        }

        Err(last_error.unwrap_or_else(no_tool))
    }

    /// Replace the clipboard contents with `text`.
    pub fn write_text(&self, text: &str) -> Result<ClipboardMethod, ClipboardError> {
        let mut last_error = None;

        for tool in self.available() {
            match tool.try_write_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), bytes = text.len(), "wrote clipboard");
                    return Ok(tool.method());
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(e) => {
                    tracing::debug!(tool = tool.name(), error = ?e, "clipboard write failed");
                    last_error = Some(tool_error(&**tool, e));
                }
            }
        }

        Err(last_error.unwrap_or_else(no_tool))
    }

    fn available(&self) -> impl Iterator<Item = &Box<dyn ClipboardTool>> {
        self.tools.iter().filter(|tool| tool.is_available())
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn tool_error(tool: &dyn ClipboardTool, error: ToolError) -> ClipboardError {
    match error {
        ToolError::NotText => ClipboardError::NotText,
        ToolError::Failed(message) => ClipboardError::ToolFailed {
            tool: tool.name(),
            message,
        },
        ToolError::NotSupported | ToolError::NotFound => ClipboardError::ToolFailed {
            tool: tool.name(),
            message: "not usable".to_string(),
        },
    }
}

fn no_tool() -> ClipboardError {
    if cfg!(any(target_os = "macos", target_os = "linux")) {
        ClipboardError::NoToolAvailable
    } else {
        ClipboardError::UnsupportedPlatform
    }
}
