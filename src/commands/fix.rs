//! Fix command handler

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use pastefix::cli::IndentArgs;
use pastefix::{fix_text, Config};

/// Fix text from `file` (or stdin) and write it to stdout.
///
/// Text with nothing to fix is written back unchanged.
pub fn handle(file: Option<&Path>, indent: &IndentArgs) -> Result<()> {
    let config = Config::load()?;
    let ctx = indent.context(&config);

    let input = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    let fix = fix_text(&input, &ctx);
    tracing::debug!(fix = fix.kind().describe(), "fix finished");
    let output = fix.into_text(&input);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Read all of stdin, refusing to wait on an interactive terminal.
fn read_stdin() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        bail!("No input: pass a FILE or pipe text on stdin");
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
