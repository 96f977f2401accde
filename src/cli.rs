//! Command-line interface definitions.
//!
//! Lives in the library so completions can be generated from the same
//! definitions the binary parses.

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::fixer::context::{MAX_COLUMN, MAX_TAB_SIZE, MIN_TAB_SIZE};
use crate::fixer::{IndentStyle, PasteContext};

/// Paste code copied from a Python console with prompts stripped and
/// indentation fixed.
#[derive(Debug, Parser)]
#[command(name = "pastefix", version, about, long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fix console text from a file or stdin and print it to stdout
    Fix {
        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        indent: IndentArgs,
    },

    /// Fix the clipboard in place and trigger the paste
    Paste {
        #[command(flatten)]
        indent: IndentArgs,

        /// Only rewrite the clipboard, do not run the paste command
        #[arg(long)]
        no_paste: bool,
    },

    /// Show or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

/// Paste target settings shared by `fix` and `paste`.
#[derive(Debug, Clone, Default, Args)]
pub struct IndentArgs {
    /// Cursor column of the paste target
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_name = "COL",
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_COLUMN as u64)
    )]
    pub column: usize,

    /// Spaces per indentation level (overrides config)
    #[arg(
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new()
            .range(MIN_TAB_SIZE as u64..=MAX_TAB_SIZE as u64)
    )]
    pub tab_size: Option<usize>,

    /// Indent with tabs (overrides config)
    #[arg(long, conflicts_with = "spaces")]
    pub tabs: bool,

    /// Indent with spaces (overrides config)
    #[arg(long)]
    pub spaces: bool,
}

impl IndentArgs {
    /// Build the paste context: flags first, then config.
    pub fn context(&self, config: &Config) -> PasteContext {
        if !self.tabs && !self.spaces && self.tab_size.is_none() {
            return PasteContext::new(self.column, config.indent_style());
        }
        let insert_spaces = if self.tabs {
            false
        } else if self.spaces {
            true
        } else {
            config.indent.insert_spaces
        };
        let tab_size = self.tab_size.unwrap_or(config.indent.tab_size);
        PasteContext::new(self.column, IndentStyle::new(insert_spaces, tab_size))
    }
}
