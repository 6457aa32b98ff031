//! Markdown snippet construction
//!
//! A snippet is an optional bold title, an optional italic comment and the
//! file contents inside a fenced code block, in that order. Title and comment
//! are passed through verbatim; nothing is escaped.

use crate::error::Error;
use std::path::Path;

/// Fence language used unless overridden.
///
/// Always `python`, whatever the file extension says.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Read `path` and wrap its contents as a Markdown snippet
pub fn format_as_markdown(
    path: &Path,
    title: Option<&str>,
    comment: Option<&str>,
    language: &str,
) -> Result<String, Error> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "read source file");

    Ok(render(&contents, title, comment, language))
}

/// Build the snippet from already loaded contents
pub fn render(contents: &str, title: Option<&str>, comment: Option<&str>, language: &str) -> String {
    let title = title.filter(|t| !t.is_empty());
    let comment = comment.filter(|c| !c.is_empty());

    let mut out = String::with_capacity(contents.len() + language.len() + 64);

    if let Some(title) = title {
        out.push_str("\n\n**");
        out.push_str(title);
        out.push_str("**\n\n");
    }

    if let Some(comment) = comment {
        out.push('*');
        out.push_str(comment);
        out.push_str("*\n");
    }

    out.push_str("\n```");
    out.push_str(language);
    out.push('\n');
    out.push_str(contents);
    out.push_str("\n```\n");

    out
}
