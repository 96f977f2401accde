//! System clipboard access through platform command-line tools.
//!
//! - macOS: `pbpaste` / `pbcopy`
//! - Linux: `wl-paste` / `wl-copy` under Wayland, then `xclip`, then `xsel`

mod error;
mod result;
mod system;
mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use result::{ClipboardMethod, ClipboardText};
pub use system::SystemClipboard;
pub use tool::{ClipboardTool, ToolError};
