//! Error taxonomy and process exit codes

use std::path::PathBuf;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Argument(String),

    #[error("Cannot read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not reach {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Spark rejected the credentials ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("Spark refused the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Exit code reported to the shell for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Argument(_) => 2,
            Error::FileAccess { .. } => 3,
            Error::Network { .. } => 4,
            Error::Auth { .. } => 5,
            Error::Rejected { .. } => 6,
            Error::Config(_) => 7,
        }
    }
}

/// Map any error surfaced by the CLI to an exit code (1 when untyped)
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(Error::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::Argument("x".into()),
            Error::FileAccess {
                path: PathBuf::from("missing.py"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            Error::Auth {
                status: 401,
                body: String::new(),
            },
            Error::Rejected {
                status: 400,
                body: String::new(),
            },
            Error::Config("x".into()),
        ];
        let mut codes: Vec<u8> = errors.iter().map(Error::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_exit_code_for_typed_error() {
        let err = anyhow::Error::new(Error::Argument("missing -f".into()));
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_exit_code_for_context_wrapped_error() {
        let err = anyhow::Error::new(Error::Config("bad".into())).context("loading config");
        assert_eq!(exit_code_for(&err), 7);
    }

    #[test]
    fn test_exit_code_for_untyped_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_file_access_message_names_path() {
        let err = Error::FileAccess {
            path: PathBuf::from("nope/hello.py"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("nope/hello.py"));
    }

    #[test]
    fn test_alternate_format_names_cause_once() {
        let err = anyhow::Error::new(Error::FileAccess {
            path: PathBuf::from("missing.py"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(format!("{:#}", err), "Cannot read missing.py: gone");
    }
}
