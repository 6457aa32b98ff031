//! Output formatting module

mod colorize;
mod formatter;
mod markdown;
mod progress;

pub use colorize::ColorScheme;
pub use formatter::*;
pub use progress::Spinner;
