//! Paste command handler

use anyhow::Result;

use pastefix::cli::IndentArgs;
use pastefix::clipboard::SystemClipboard;
use pastefix::paste::{paste_action, HostPaste};
use pastefix::{Config, PasteAction, PasteFixer};

/// Fix the clipboard and trigger the configured paste command.
pub fn handle(indent: &IndentArgs, no_paste: bool) -> Result<()> {
    let config = Config::load()?;
    let ctx = indent.context(&config);

    let action: Box<dyn PasteAction> = if no_paste {
        Box::new(HostPaste)
    } else {
        paste_action(config.paste.command.as_deref())?
    };

    let fixer = PasteFixer::new(SystemClipboard::new(), action);
    let outcome = fixer.run(&ctx)?;
    println!("{}", outcome.message());
    Ok(())
}
