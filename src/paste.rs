//! The "paste with fix" action.
//!
//! Reads the clipboard, fixes the text, writes it back when it changed, and
//! then triggers the native paste. The paste fires whether or not the text
//! changed. Clipboard failures abort before anything is pasted.

use std::process::{Command, ExitStatus};

use crate::clipboard::{ClipboardError, ClipboardMethod, SystemClipboard};
use crate::fixer::{fix_text, Fix, FixKind, PasteContext};

/// Errors from the paste pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Paste command is empty")]
    EmptyCommand,

    #[error("Paste command has unbalanced quotes: {0}")]
    InvalidCommand(String),

    #[error("Failed to run paste command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Paste command '{program}' exited with {status}")]
    CommandFailed { program: String, status: ExitStatus },
}

/// Triggers the native paste of the target application.
pub trait PasteAction {
    fn paste(&self) -> Result<(), PasteError>;
}

/// The host pastes on its own once the clipboard is ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPaste;

impl PasteAction for HostPaste {
    fn paste(&self) -> Result<(), PasteError> {
        tracing::debug!("no paste command configured, leaving paste to the host");
        Ok(())
    }
}

/// Runs an external command that sends the paste keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPaste {
    program: String,
    args: Vec<String>,
}

impl CommandPaste {
    /// Parse a shell-style command line.
    pub fn parse(command: &str) -> Result<Self, PasteError> {
        let mut words = shlex::split(command)
            .ok_or_else(|| PasteError::InvalidCommand(command.to_string()))?
            .into_iter();
        let program = words.next().ok_or(PasteError::EmptyCommand)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl PasteAction for CommandPaste {
    fn paste(&self) -> Result<(), PasteError> {
        tracing::debug!(program = %self.program, args = ?self.args, "running paste command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| PasteError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PasteError::CommandFailed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Pick the paste action for an optional configured command.
pub fn paste_action(command: Option<&str>) -> Result<Box<dyn PasteAction>, PasteError> {
    match command.map(str::trim).filter(|c| !c.is_empty()) {
        Some(command) => Ok(Box::new(CommandPaste::parse(command)?)),
        None => Ok(Box::new(HostPaste)),
    }
}

/// What a paste did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Result of the fixer
    pub fix: FixKind,
    /// Tool the clipboard was read with
    pub read_with: ClipboardMethod,
    /// Tool the fixed text was written with, if it was written
    pub written_with: Option<ClipboardMethod>,
}

impl PasteOutcome {
    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        match (self.fix, self.written_with) {
            (FixKind::Fixed, Some(method)) => {
                format!("Fixed clipboard text and pasted (via {})", method)
            }
            (FixKind::Unchanged, _) => "Clipboard text already clean, pasted as-is".to_string(),
            _ => "Nothing to fix, pasted clipboard as-is".to_string(),
        }
    }
}

/// Runs the read → fix → write → paste sequence.
pub struct PasteFixer {
    clipboard: SystemClipboard,
    action: Box<dyn PasteAction>,
}

impl PasteFixer {
    pub fn new(clipboard: SystemClipboard, action: Box<dyn PasteAction>) -> Self {
        Self { clipboard, action }
    }

    /// Fix the clipboard for `ctx` and paste it.
    pub fn run(&self, ctx: &PasteContext) -> Result<PasteOutcome, PasteError> {
        let original = self.clipboard.read_text()?;
        let fix = fix_text(&original.text, ctx);
        let kind = fix.kind();

        let written_with = match fix {
            Fix::Fixed(text) => Some(self.clipboard.write_text(&text)?),
            Fix::NothingToFix | Fix::Unchanged => None,
        };

        self.action.paste()?;

        let outcome = PasteOutcome {
            fix: kind,
            read_with: original.method,
            written_with,
        };
        tracing::info!(fix = kind.describe(), "paste complete");
        Ok(outcome)
    }
}
