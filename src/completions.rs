//! Shell completions generation

use crate::error::Error;
use clap::{Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Build a clap Command for shell completions
/// This mirrors our custom parser's flags
fn build_cli() -> Command {
    Command::new("mdspark")
        .about("Share a source file as a Markdown snippet")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Source file to wrap")
                .value_name("PATH")
                .value_hint(clap::ValueHint::FilePath),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .help("Bold title shown above the code")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("comment")
                .short('c')
                .long("comment")
                .help("Italic comment shown below the title")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("lang")
                .short('l')
                .long("lang")
                .help("Code fence language")
                .value_name("LANG"),
        )
        .arg(
            Arg::new("post")
                .short('p')
                .long("post")
                .help("Post the snippet to the Spark room")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-post")
                .long("no-post")
                .help("Do not post (override config)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("room")
                .short('r')
                .long("room")
                .help("Room id to post to")
                .value_name("ID"),
        )
        .arg(
            Arg::new("copy")
                .long("copy")
                .help("Copy to clipboard")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-copy")
                .long("no-copy")
                .help("Skip the clipboard")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .help("Render the snippet as Markdown in the terminal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the snippet")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("make-config")
                .long("make-config")
                .help("Export example mdspark.toml to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("help-env")
                .long("help-env")
                .help("Show all environment variables")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show debug logs on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .help("Generate shell completions")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        )
}

fn parse_shell(shell: &str) -> Option<Shell> {
    match shell.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Write completions for `shell` to `out`
pub fn write_completions(shell: &str, out: &mut dyn Write) -> Result<(), Error> {
    let shell = parse_shell(shell).ok_or_else(|| {
        Error::Argument(format!(
            "Unknown shell: {}. Supported: bash, zsh, fish, powershell, elvish",
            shell
        ))
    })?;

    let mut cmd = build_cli();
    generate(shell, &mut cmd, "mdspark", out);
    Ok(())
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: &str) -> Result<(), Error> {
    write_completions(shell, &mut io::stdout())
}
