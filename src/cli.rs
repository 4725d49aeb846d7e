//! Command-line argument parsing for the headless driver
//!
//! Loads initial text, replays a command script and prints the final state.

use clap::Parser;
use std::path::PathBuf;

/// Replay text box edit commands against a buffer
#[derive(Parser, Debug)]
#[command(name = "textbox", version, about = "Replay text box edit commands")]
pub struct CliArgs {
    /// File holding the initial text (empty buffer if omitted)
    #[arg(long, value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// YAML list of edit commands to apply
    #[arg(long, value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Engine config (defaults to ~/.config/textbox/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Use the OS clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = CliArgs::try_parse_from(["textbox", "--script", "edits.yaml"]).unwrap();
        assert_eq!(args.script, PathBuf::from("edits.yaml"));
        assert!(args.text.is_none());
        assert!(!args.json);
        assert!(!args.system_clipboard);
    }

    #[test]
    fn test_script_is_required() {
        assert!(CliArgs::try_parse_from(["textbox"]).is_err());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "textbox",
            "--text",
            "in.txt",
            "--script",
            "s.yaml",
            "--config",
            "c.yaml",
            "--json",
            "--system-clipboard",
        ])
        .unwrap();
        assert_eq!(args.text, Some(PathBuf::from("in.txt")));
        assert_eq!(args.config, Some(PathBuf::from("c.yaml")));
        assert!(args.json);
        assert!(args.system_clipboard);
    }
}
