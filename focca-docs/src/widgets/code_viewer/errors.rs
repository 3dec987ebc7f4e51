use thiserror::Error;

/// Errors emitted while building a code snippet.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CodeViewerError {
    #[error("tabbed code snippet needs at least one block")]
    EmptyTabs,
}

/// Errors emitted by clipboard writers.
#[derive(Debug, Error)]
pub(crate) enum ClipboardError {
    /// No clipboard could be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard refused the write.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}
