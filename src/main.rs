use anyhow::{Context, Result};
use clap::Parser;

use textbox::cli::CliArgs;
use textbox::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use textbox::config::EngineConfig;
use textbox::editable::EditEngine;
use textbox::script;

fn main() -> Result<()> {
    textbox::tracing::init();
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load_from(path)?,
        None => EngineConfig::load(),
    };

    let initial = match &args.text {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => String::new(),
    };
    let mut engine = EditEngine::from_text(&initial, config.constraints());

    let commands = script::load_script(&args.script)?;
    tracing::info!(commands = commands.len(), "replaying script");

    let mut clipboard: Box<dyn Clipboard> = if args.system_clipboard {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(MemoryClipboard::new())
    };
    let report = script::replay(&mut engine, commands, clipboard.as_mut());
    for (index, reason) in &report.rejected {
        eprintln!("command {} rejected: {}", index, reason);
    }

    let snapshot = engine.snapshot();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize state")?
        );
    } else {
        print!("{}", script::format_snapshot(&snapshot));
    }
    Ok(())
}
