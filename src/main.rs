//! mdspark - share a source file as a Markdown snippet.

use mdspark::error::exit_code_for;
use mdspark::output::ColorScheme;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match mdspark::cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ColorScheme::print_error(&format!("{:#}", err));
            ExitCode::from(exit_code_for(&err))
        }
    }
}
