//! Command handlers for the pastefix binary.

pub mod completions;
pub mod config;
pub mod fix;
pub mod paste;
