use iced::task;

use super::model::{CodeBlock, CodeSnippet, CopyToken};

/// A scheduled reset of the copied flag.
///
/// The handle aborts the timer task when dropped, which is a no-op once the
/// task has finished.
#[derive(Debug)]
struct PendingReset {
    token: CopyToken,
    handle: task::Handle,
}

/// Internal state of one code viewer instance.
///
/// The copied flag is true exactly while a reset is pending.
#[derive(Debug)]
pub(super) struct CodeViewerState {
    snippet: CodeSnippet,
    active_tab: usize,
    feedback: Option<PendingReset>,
}

impl CodeViewerState {
    pub(super) fn new(snippet: CodeSnippet) -> Self {
        Self {
            snippet,
            active_tab: 0,
            feedback: None,
        }
    }

    pub(super) fn blocks(&self) -> &[CodeBlock] {
        self.snippet.blocks()
    }

    pub(super) fn shows_tab_strip(&self) -> bool {
        self.snippet.shows_tab_strip()
    }

    pub(super) fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub(super) fn active_code(&self) -> &str {
        self.blocks()
            .get(self.active_tab)
            .map(CodeBlock::code)
            .unwrap_or_default()
    }

    pub(super) fn is_copied(&self) -> bool {
        self.feedback.is_some()
    }

    pub(super) fn pending_token(&self) -> Option<CopyToken> {
        self.feedback.as_ref().map(|pending| pending.token)
    }

    #[cfg(test)]
    pub(super) fn pending_handle(&self) -> Option<task::Handle> {
        self.feedback.as_ref().map(|pending| pending.handle.clone())
    }

    /// Select a tab; out-of-range indices leave the selection unchanged.
    pub(super) fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.blocks().len() {
            return false;
        }
        self.active_tab = index;
        true
    }

    /// Mark the snippet as copied, replacing and cancelling any pending
    /// reset.
    pub(super) fn begin_feedback(
        &mut self,
        token: CopyToken,
        handle: task::Handle,
    ) {
        self.feedback = Some(PendingReset {
            token,
            handle: handle.abort_on_drop(),
        });
    }

    /// Clear the copied flag if `token` is the pending one.
    pub(super) fn finish_feedback(&mut self, token: CopyToken) -> bool {
        if self.pending_token() != Some(token) {
            return false;
        }
        self.feedback = None;
        true
    }

    /// Cancel any pending reset and clear the flag.
    pub(super) fn cancel_feedback(&mut self) -> Option<CopyToken> {
        self.feedback.take().map(|pending| pending.token)
    }
}
