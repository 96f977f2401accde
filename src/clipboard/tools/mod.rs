//! Platform-specific clipboard tools.

mod pasteboard;
mod wl_clipboard;
mod xclip;
mod xsel;

pub use pasteboard::Pasteboard;
pub use wl_clipboard::WlClipboard;
pub use xclip::Xclip;
pub use xsel::Xsel;

use super::tool::{ClipboardTool, ToolError};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pasteboard::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(WlClipboard::new()),
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if `program` is installed.
fn binary_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn spawn_error(program: &str, e: std::io::Error) -> ToolError {
    if e.kind() == ErrorKind::NotFound {
        ToolError::NotFound
    } else {
        ToolError::Failed(format!("{}: {}", program, e))
    }
}

/// Run `program` and return its stdout as text.
fn read_stdout(program: &str, args: &[&str]) -> Result<String, ToolError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ToolError::Failed(if stderr.is_empty() {
            format!("{} failed", program)
        } else {
            stderr
        }));
    }

    String::from_utf8(output.stdout).map_err(|_| ToolError::NotText)
}

/// Run `program` with `text` piped to its stdin.
fn write_stdin(program: &str, args: &[&str], text: &str) -> Result<(), ToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ToolError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| ToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("{} failed", program)))
    }
}
