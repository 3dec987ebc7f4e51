use super::model::CopyToken;

/// Intent events handled by a code viewer.
#[derive(Debug, Clone)]
pub(crate) enum CodeViewerIntent {
    SelectTab { index: usize },
    Copy,
    /// The feedback timer scheduled under `token` fired.
    FeedbackElapsed { token: CopyToken },
}
