use colored::{ColoredString, Colorize};

pub struct ColorScheme;

impl ColorScheme {
    /// Muted text (bright black/gray)
    pub fn muted(text: &str) -> ColoredString {
        text.bright_black()
    }

    /// Print a success indicator (stderr, stdout carries the snippet)
    pub fn print_success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error indicator
    pub fn print_error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning indicator
    pub fn print_warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}
