use anyhow::Result;
use clap::Parser;

mod commands;

use pastefix::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    pastefix::logging::init(cli.verbose);

    match cli.command {
        Commands::Fix { file, indent } => commands::fix::handle(file.as_deref(), &indent),
        Commands::Paste { indent, no_paste } => commands::paste::handle(&indent, no_paste),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
