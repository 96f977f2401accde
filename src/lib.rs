//! pastefix - paste Python console transcripts as clean source code.
//!
//! The library holds the text transformation ([`fixer`]) and the glue that
//! runs it against the system clipboard ([`clipboard`], [`paste`]).

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod fixer;
pub mod logging;
pub mod paste;

pub use config::Config;
pub use fixer::{fix_text, Fix, FixKind, IndentStyle, PasteContext};
pub use paste::{PasteAction, PasteError, PasteFixer, PasteOutcome};
