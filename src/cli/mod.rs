//! CLI module - handles argument parsing and the read -> format -> publish flow

mod parser;

pub use parser::*;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;
use crate::output::{OutputFormatter, Spinner};
use crate::publish::{publish, ClipboardSink, MessagePoster, SparkClient, SystemClipboard};
use crate::snippet::format_as_markdown;

/// Main entry point for the CLI
pub async fn run() -> Result<()> {
    let args = Args::parse_flexible()?;

    // Handle special commands first
    if args.is_informational() {
        return run_informational(&args);
    }

    crate::logging::init(args.verbose);

    let config = Config::load()?.with_cli_overrides(&args);
    tracing::debug!(
        post = config.spark.post,
        room = config.spark.room_id.as_deref().unwrap_or("-"),
        token_set = config.spark.token.as_ref().is_some_and(|t| !t.is_empty()),
        language = %config.format.language,
        copy = config.output.copy,
        "configuration resolved"
    );

    let file = args
        .file
        .as_deref()
        .ok_or_else(|| Error::Argument("Missing required option -f <filename>".to_string()))?;
    let path = resolve_path(file)?;
    tracing::debug!(path = %path.display(), "resolved source file");

    let message = format_as_markdown(
        &path,
        args.title.as_deref(),
        args.comment.as_deref(),
        &config.format.language,
    )?;

    let poster = if config.spark.post {
        Some(SparkClient::from_config(&config)?)
    } else {
        None
    };

    let formatter = OutputFormatter::new(&config.output);
    formatter.message(&message);

    let mut system_clipboard = SystemClipboard;
    let clipboard: Option<&mut dyn ClipboardSink> = if config.output.copy {
        Some(&mut system_clipboard)
    } else {
        None
    };

    let spinner = poster.as_ref().map(|_| Spinner::start("Posting to Spark room..."));
    let outcome = publish(
        &message,
        clipboard,
        poster.as_ref().map(|p| p as &dyn MessagePoster),
    )
    .await;
    if let Some(spinner) = spinner {
        spinner.stop();
    }
    let outcome = outcome?;

    formatter.clipboard(&outcome.clipboard);

    if let Some(response) = outcome.remote {
        formatter.response(&response);
        if !response.is_success() {
            return Err(Error::Rejected {
                status: response.status,
                body: response.body,
            }
            .into());
        }
        if let Some(ref poster) = poster {
            formatter.posted(poster.endpoint());
        }
    }

    Ok(())
}

fn run_informational(args: &Args) -> Result<()> {
    if args.help {
        print_help();
    } else if args.version {
        println!("mdspark {}", env!("CARGO_PKG_VERSION"));
    } else if args.help_env {
        print_help_env();
    } else if args.make_config {
        print!("{}", crate::config::DEFAULT_CONFIG_TEMPLATE);
    } else if let Some(ref shell) = args.completions {
        crate::completions::generate_completions(shell)?;
    }
    Ok(())
}

/// Expand `~` and anchor relative paths at the current directory
fn resolve_path(file: &str) -> Result<PathBuf> {
    let expanded = PathBuf::from(shellexpand::tilde(file).as_ref());
    if expanded.is_absolute() {
        return Ok(expanded);
    }
    let cwd = std::env::current_dir().context("Cannot determine the current directory")?;
    Ok(cwd.join(expanded))
}
