//! Flexible argument parser that allows flags in any order

use crate::error::Error;
use std::env;

#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Source file to wrap (-f); required for a normal run
    pub file: Option<String>,

    /// Bold title placed above the snippet
    pub title: Option<String>,

    /// Italic comment placed between title and code
    pub comment: Option<String>,

    /// Fence language override
    pub lang: Option<String>,

    /// Post to the room
    /// None = use config, Some(true) = -p/--post, Some(false) = --no-post
    pub post: Option<bool>,

    /// Room id override
    pub room: Option<String>,

    /// Copy to clipboard
    /// None = use config, Some(true) = --copy, Some(false) = --no-copy
    pub copy: Option<bool>,

    /// Render the snippet with terminal markdown instead of printing it raw
    pub preview: bool,

    /// Do not print the snippet
    pub quiet: bool,

    /// Debug logging on stderr
    pub verbose: bool,

    /// Show version
    pub version: bool,

    /// Show help
    pub help: bool,

    /// Show environment variable reference
    pub help_env: bool,

    /// Export example config template
    pub make_config: bool,

    /// Generate shell completions
    pub completions: Option<String>,
}

impl Args {
    /// Parse the process arguments, expanding config aliases first
    pub fn parse_flexible() -> Result<Self, Error> {
        let raw_args: Vec<String> = env::args().skip(1).collect();
        let aliases = crate::config::Config::load_aliases_only();
        Self::parse_args(expand_aliases(raw_args, &aliases))
    }

    pub(crate) fn parse_args(args: Vec<String>) -> Result<Self, Error> {
        let mut result = Args::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            // --flag=value form for value flags
            if let Some((flag, value)) = arg.split_once('=').filter(|(f, _)| f.starts_with("--")) {
                if !result.set_value(flag, value.to_string())? {
                    return Err(unknown_flag(&arg));
                }
                continue;
            }

            match arg.as_str() {
                // Flags with values
                "-f" | "--file" | "-t" | "--title" | "-c" | "--comment" | "-l" | "--lang"
                | "-r" | "--room" | "--completions" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| Error::Argument(format!("{} requires a value", arg)))?;
                    result.set_value(&arg, value)?;
                }

                // Boolean flags (long)
                "--post" => result.post = Some(true),
                "--no-post" => result.post = Some(false),
                "--copy" => result.copy = Some(true),
                "--no-copy" => result.copy = Some(false),
                "--preview" => result.preview = true,
                "--quiet" => result.quiet = true,
                "--verbose" => result.verbose = true,
                "--version" => result.version = true,
                "--help" => result.help = true,
                "--help-env" => result.help_env = true,
                "--make-config" => result.make_config = true,

                // Combined short boolean flags (-pq, -vp, ...)
                s if s.starts_with('-') && !s.starts_with("--") && s.len() > 1 => {
                    for c in s.chars().skip(1) {
                        match c {
                            'p' => result.post = Some(true),
                            'q' => result.quiet = true,
                            'v' => result.verbose = true,
                            'V' => result.version = true,
                            'h' => result.help = true,
                            _ => return Err(unknown_flag(s)),
                        }
                    }
                }

                s if s.starts_with('-') => return Err(unknown_flag(s)),

                other => {
                    return Err(Error::Argument(format!(
                        "Unexpected argument '{}'. Pass the source file with -f <filename>",
                        other
                    )))
                }
            }
        }

        Ok(result)
    }

    /// Store a value flag; returns false when `flag` takes no value
    fn set_value(&mut self, flag: &str, value: String) -> Result<bool, Error> {
        let slot = match flag {
            "-f" | "--file" => &mut self.file,
            "-t" | "--title" => &mut self.title,
            "-c" | "--comment" => &mut self.comment,
            "-l" | "--lang" => &mut self.lang,
            "-r" | "--room" => &mut self.room,
            "--completions" => &mut self.completions,
            _ => return Ok(false),
        };
        if matches!(flag, "-f" | "--file") && value.is_empty() {
            return Err(Error::Argument(format!("{} requires a value", flag)));
        }
        *slot = Some(value);
        Ok(true)
    }

    /// True when the run only prints something and exits
    pub fn is_informational(&self) -> bool {
        self.help || self.version || self.help_env || self.make_config || self.completions.is_some()
    }
}

/// Replace whole-word aliases with their whitespace-separated expansion
fn expand_aliases(
    args: Vec<String>,
    aliases: &std::collections::HashMap<String, String>,
) -> Vec<String> {
    if aliases.is_empty() {
        return args;
    }

    let mut expanded = Vec::with_capacity(args.len());
    let mut expecting_value = false;
    for arg in args {
        // Never expand a flag's value, "-t demo" keeps its title
        if !expecting_value {
            if let Some(expansion) = aliases.get(&arg) {
                expanded.extend(expansion.split_whitespace().map(str::to_string));
                continue;
            }
        }
        expecting_value = !expecting_value && takes_value(&arg);
        expanded.push(arg);
    }
    expanded
}

fn takes_value(arg: &str) -> bool {
    matches!(
        arg,
        "-f" | "--file"
            | "-t"
            | "--title"
            | "-c"
            | "--comment"
            | "-l"
            | "--lang"
            | "-r"
            | "--room"
            | "--completions"
    )
}

fn unknown_flag(flag: &str) -> Error {
    Error::Argument(format!(
        "Unknown option '{}'. Run 'mdspark --help' for usage",
        flag
    ))
}

pub fn print_help_env() {
    println!(
        r#"mdspark - Environment Variables Reference

Environment variables override config file values but are overridden by CLI arguments.

SPARK:
    MDSPARK_POST          Post every snippet to the room (true/false)
    MDSPARK_ROOM_ID       Room id to post to
    MDSPARK_TOKEN         Bearer token for the messages API
    MDSPARK_BASE_URL      API base URL (default: https://api.ciscospark.com/v1)

FORMAT & OUTPUT:
    MDSPARK_LANG          Fence language tag (default: python)
    MDSPARK_COPY          Copy the snippet to the clipboard (true/false)

NETWORK:
    MDSPARK_TIMEOUT       Request timeout in seconds (default: 30)
    MDSPARK_SYSTEM_DNS    Use the OS resolver instead of Cloudflare DNS (true/false)

DIAGNOSTICS:
    MDSPARK_LOG           Log filter, e.g. debug or mdspark=trace
    NO_COLOR              Disable colored output (standard env var)

EXAMPLES:
    export MDSPARK_ROOM_ID=Y2lzY29zcGFyazovL3VzL1JPT00v...
    export MDSPARK_TOKEN=...
    mdspark -f script.py -t "Nightly job" --post
"#
    );
}

pub fn print_help() {
    println!(
        r#"mdspark - Share a source file as a Markdown snippet

USAGE:
    mdspark -f <FILE> [-t <TITLE>] [-c <COMMENT>] [OPTIONS]

OPTIONS:
    -f, --file <PATH>     Source file to wrap (required)
    -t, --title <TEXT>    Bold title shown above the code
    -c, --comment <TEXT>  Italic comment shown below the title
    -l, --lang <LANG>     Code fence language (default: python)
    -p, --post            Post the snippet to the Spark room
        --no-post         Do not post (override config)
    -r, --room <ID>       Room id to post to
        --copy            Copy to clipboard (default)
        --no-copy         Skip the clipboard
        --preview         Render the snippet as Markdown in the terminal
    -q, --quiet           Do not print the snippet
        --make-config     Export example mdspark.toml to stdout
        --help-env        Show all environment variables
        --completions <SHELL>  Generate shell completions (bash, zsh, fish, powershell, elvish)
    -v, --verbose         Show debug logs on stderr
    -V, --version         Show version
    -h, --help            Show this help

EXAMPLES:
    mdspark -f hello.py
    mdspark -f hello.py -t Demo -c "simple script"
    mdspark -f main.rs -l rust --no-copy
    mdspark -f deploy.py -t "Deploy script" --post

CONFIGURATION:
    Configuration files are loaded from:
      1. ./mdspark.toml or ./.mdspark.toml (project local)
      2. ~/mdspark.toml (home directory)
      3. ~/.config/mdspark/config.toml (XDG config)
    The token is read from MDSPARK_TOKEN or [spark] token, never from flags.
    Files are merged key by key; a later file only overrides the keys it sets.

EXIT CODES:
    0  success             4  room unreachable
    1  unexpected error    5  token rejected (401/403)
    2  bad arguments       6  other non-2xx response (printed first)
    3  file unreadable     7  configuration error

Run 'mdspark --help-env' for all environment variables.
"#
    );
}
