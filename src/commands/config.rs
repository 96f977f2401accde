//! Config subcommands handler

use anyhow::{Context, Result};

use pastefix::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        anyhow::bail!("Editor '{}' exited with {}", editor, status);
    }

    // Catch syntax errors before the next paste does
    Config::load()?;
    Ok(())
}
