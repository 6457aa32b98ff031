use super::colorize::ColorScheme;
use super::markdown::render_markdown;
use crate::config::OutputConfig;
use crate::publish::{ClipboardStatus, RemoteResponse};
use reqwest::StatusCode;
use std::io::{self, IsTerminal, Write};

pub struct OutputFormatter {
    preview: bool,
    quiet: bool,
    /// Status notices only make sense for a person watching stderr
    notices: bool,
}

impl OutputFormatter {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            // Rendered preview only when a terminal is there to show it
            preview: output.preview && std::io::stdout().is_terminal(),
            quiet: output.quiet,
            notices: std::io::stderr().is_terminal(),
        }
    }

    /// Print the snippet
    pub fn message(&self, text: &str) {
        let _ = self.write_message(&mut std::io::stdout().lock(), text);
    }

    fn write_message(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.preview {
            write!(out, "{}", render_markdown(text))
        } else {
            writeln!(out, "{}", text)
        }
    }

    pub fn clipboard(&self, status: &ClipboardStatus) {
        match status {
            ClipboardStatus::Copied if self.notices => {
                ColorScheme::print_success("Copied to clipboard")
            }
            ClipboardStatus::Unavailable(reason) => {
                ColorScheme::print_warning(&format!("Clipboard unavailable: {}", reason))
            }
            _ => {}
        }
    }

    /// Print the raw response of the messages endpoint
    pub fn response(&self, response: &RemoteResponse) {
        println!("{}", status_line(response));
        if !response.body.is_empty() {
            println!("{}", response.body);
        }
    }

    pub fn posted(&self, endpoint: &str) {
        if self.notices {
            eprintln!(
                "{} {}",
                ColorScheme::muted("Posted to"),
                ColorScheme::muted(endpoint)
            );
        }
    }
}

/// `Response [200 OK]`
pub fn status_line(response: &RemoteResponse) -> String {
    let reason = StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason());
    match reason {
        Some(reason) => format!("Response [{} {}]", response.status, reason),
        None => format!("Response [{}]", response.status),
    }
}
