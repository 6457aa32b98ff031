//! mdspark - share a source file as a Markdown snippet.
//!
//! Reads a file, wraps it in a fenced code block with an optional bold title
//! and italic comment, copies the result to the clipboard and optionally posts
//! it to a Spark room.

pub mod cli;
pub mod completions;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod output;
pub mod publish;
pub mod snippet;

pub use error::Error;
pub use publish::{publish, PublishOutcome};
pub use snippet::format_as_markdown;
