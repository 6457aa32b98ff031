//! Publishing a formatted snippet: clipboard copy, then an optional room post

mod clipboard;
mod spark;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use spark::{SparkClient, JSON_UTF8};

use crate::error::Error;
use async_trait::async_trait;

/// Remote endpoint that accepts a Markdown message
#[async_trait]
pub trait MessagePoster: Send + Sync {
    async fn post(&self, markdown: &str) -> Result<RemoteResponse, Error>;

    fn endpoint(&self) -> &str;
}

/// Status and raw body returned by the messages endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStatus {
    Copied,
    /// Copying was turned off
    Skipped,
    /// The clipboard could not be written; the run continues
    Unavailable(String),
}

/// What `publish` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub clipboard: ClipboardStatus,
    /// `None` when nothing was posted
    pub remote: Option<RemoteResponse>,
}

/// Copy `message` to `clipboard` (if any), then post it to `destination` (if any)
///
/// Network and authentication failures are returned as errors; the clipboard
/// copy has already happened by then and is not undone.
pub async fn publish(
    message: &str,
    clipboard: Option<&mut dyn ClipboardSink>,
    destination: Option<&dyn MessagePoster>,
) -> Result<PublishOutcome, Error> {
    let clipboard = match clipboard {
        Some(sink) => match sink.set_text(message) {
            Ok(()) => {
                tracing::debug!(bytes = message.len(), "copied snippet to clipboard");
                ClipboardStatus::Copied
            }
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "clipboard unavailable");
                ClipboardStatus::Unavailable(format!("{:#}", err))
            }
        },
        None => ClipboardStatus::Skipped,
    };

    let remote = match destination {
        Some(poster) => Some(poster.post(message).await?),
        None => None,
    };

    Ok(PublishOutcome { clipboard, remote })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            anyhow::bail!("no display")
        }
    }

    enum Reply {
        Status(u16),
        Unauthorized,
    }

    struct RecordingPoster {
        calls: AtomicUsize,
        last: Mutex<Option<String>>,
        reply: Reply,
    }

    impl RecordingPoster {
        fn new(reply: Reply) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                reply,
            }
        }
    }

    #[async_trait]
    impl MessagePoster for RecordingPoster {
        async fn post(&self, markdown: &str) -> Result<RemoteResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(markdown.to_string());
            match self.reply {
                Reply::Status(status) => Ok(RemoteResponse {
                    status,
                    body: "{}".to_string(),
                }),
                Reply::Unauthorized => Err(Error::Auth {
                    status: 401,
                    body: "denied".to_string(),
                }),
            }
        }

        fn endpoint(&self) -> &str {
            "memory://room"
        }
    }

    #[tokio::test]
    async fn test_posting_disabled_copies_only() {
        let mut clipboard = MemoryClipboard::default();
        let outcome = publish("snippet", Some(&mut clipboard), None).await.unwrap();

        assert_eq!(outcome.clipboard, ClipboardStatus::Copied);
        assert!(outcome.remote.is_none());
        assert_eq!(clipboard.contents.as_deref(), Some("snippet"));
    }

    #[tokio::test]
    async fn test_posting_enabled_copies_then_posts() {
        let poster = RecordingPoster::new(Reply::Status(200));
        let mut clipboard = MemoryClipboard::default();

        let outcome = publish("snippet", Some(&mut clipboard), Some(&poster))
            .await
            .unwrap();

        assert_eq!(outcome.clipboard, ClipboardStatus::Copied);
        let remote = outcome.remote.unwrap();
        assert_eq!(remote.status, 200);
        assert!(remote.is_success());
        assert_eq!(poster.calls.load(Ordering::SeqCst), 1);
        assert_eq!(poster.last.lock().unwrap().as_deref(), Some("snippet"));
    }

    #[tokio::test]
    async fn test_auth_failure_propagates_after_copy() {
        let poster = RecordingPoster::new(Reply::Unauthorized);
        let mut clipboard = MemoryClipboard::default();

        let err = publish("snippet", Some(&mut clipboard), Some(&poster))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Auth { status: 401, .. }));
        assert_eq!(clipboard.contents.as_deref(), Some("snippet"));
        assert_eq!(poster.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_success_response_is_returned() {
        let poster = RecordingPoster::new(Reply::Status(400));
        let outcome = publish("snippet", None, Some(&poster)).await.unwrap();
        let remote = outcome.remote.unwrap();
        assert_eq!(remote.status, 400);
        assert!(!remote.is_success());
    }

    #[tokio::test]
    async fn test_clipboard_failure_is_not_fatal() {
        let poster = RecordingPoster::new(Reply::Status(200));
        let mut clipboard = BrokenClipboard;

        let outcome = publish("snippet", Some(&mut clipboard), Some(&poster))
            .await
            .unwrap();

        match outcome.clipboard {
            ClipboardStatus::Unavailable(reason) => assert!(reason.contains("no display")),
            other => panic!("unexpected clipboard status: {other:?}"),
        }
        assert_eq!(poster.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_copy_disabled_is_skipped() {
        let outcome = publish("snippet", None, None).await.unwrap();
        assert_eq!(outcome.clipboard, ClipboardStatus::Skipped);
        assert!(outcome.remote.is_none());
    }
}
