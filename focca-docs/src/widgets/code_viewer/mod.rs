mod errors;
mod event;
mod model;
mod reducer;
pub(crate) mod services;
mod state;
pub(crate) mod view;

pub(crate) use errors::CodeViewerError;
pub(crate) use event::CodeViewerIntent;
use iced::Task;
pub(crate) use model::{CodeBlock, CodeSnippet, CodeViewerViewModel};
pub(crate) use reducer::CodeViewerCtx;
use state::CodeViewerState;

/// Code viewer widget: tab selection plus copy with timed feedback.
pub(crate) struct CodeViewerWidget {
    state: CodeViewerState,
}

impl CodeViewerWidget {
    pub(crate) fn new(snippet: CodeSnippet) -> Self {
        Self {
            state: CodeViewerState::new(snippet),
        }
    }

    /// Reduce an intent into state updates and timer tasks.
    pub(crate) fn reduce(
        &mut self,
        intent: CodeViewerIntent,
        ctx: &CodeViewerCtx<'_>,
    ) -> Task<CodeViewerIntent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> CodeViewerViewModel<'_> {
        CodeViewerViewModel {
            blocks: self.state.blocks(),
            active_tab: self.state.active_tab(),
            copied: self.state.is_copied(),
            shows_tab_strip: self.state.shows_tab_strip(),
        }
    }

    /// Cancel any pending feedback reset before the viewer goes away.
    pub(crate) fn teardown(&mut self) {
        if let Some(token) = self.state.cancel_feedback() {
            log::debug!("cancelled copy feedback reset {token:?}");
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_token(&self) -> Option<model::CopyToken> {
        self.state.pending_token()
    }

    #[cfg(test)]
    pub(crate) fn pending_handle(&self) -> Option<iced::task::Handle> {
        self.state.pending_handle()
    }
}
