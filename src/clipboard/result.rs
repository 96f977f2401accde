//! Clipboard read results and method identifiers.

/// Text read from the clipboard, with the tool that provided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardText {
    pub text: String,
    pub method: ClipboardMethod,
}

impl ClipboardText {
    pub fn new(text: impl Into<String>, method: ClipboardMethod) -> Self {
        Self {
            text: text.into(),
            method,
        }
    }
}

/// Which tool was used for a clipboard operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMethod {
    /// macOS pasteboard (pbpaste / pbcopy)
    Pasteboard,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland (wl-paste / wl-copy)
    WlClipboard,
}

impl ClipboardMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pasteboard => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlClipboard => "wl-clipboard",
        }
    }
}

impl std::fmt::Display for ClipboardMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
