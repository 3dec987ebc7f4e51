use iced::Task;

use super::event::CodeViewerIntent;
use super::model::CopyToken;
use super::services::{self, ClipboardWriter};
use super::state::CodeViewerState;

/// Runtime context for code viewer reduction.
pub(crate) struct CodeViewerCtx<'a> {
    pub(crate) clipboard: &'a dyn ClipboardWriter,
}

/// Reduce a code viewer intent into state updates and timer tasks.
pub(super) fn reduce(
    state: &mut CodeViewerState,
    intent: CodeViewerIntent,
    ctx: &CodeViewerCtx<'_>,
) -> Task<CodeViewerIntent> {
    match intent {
        CodeViewerIntent::SelectTab { index } => {
            if !state.select_tab(index) {
                log::debug!(
                    "ignored tab selection {index} of {}",
                    state.blocks().len()
                );
            }
            Task::none()
        },
        CodeViewerIntent::Copy => reduce_copy(state, ctx),
        CodeViewerIntent::FeedbackElapsed { token } => {
            if !state.finish_feedback(token) {
                log::debug!("stale copy feedback reset {token:?} ignored");
            }
            Task::none()
        },
    }
}

/// Copy the displayed block and (re)schedule the feedback reset.
fn reduce_copy(
    state: &mut CodeViewerState,
    ctx: &CodeViewerCtx<'_>,
) -> Task<CodeViewerIntent> {
    if let Err(err) = ctx.clipboard.write_text(state.active_code()) {
        log::debug!("copy to clipboard failed: {err}");
        return Task::none();
    }

    let token = CopyToken::next();
    let (task, handle) = Task::perform(
        services::feedback_elapsed(token),
        |token| CodeViewerIntent::FeedbackElapsed { token },
    )
    .abortable();

    state.begin_feedback(token, handle);
    task
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::futures::StreamExt;
    use iced::futures::stream::BoxStream;
    use iced_runtime::Action;
    use iced_runtime::task::into_stream;
    use tokio_test::{assert_pending, assert_ready, task};

    use super::CodeViewerCtx;
    use crate::widgets::code_viewer::services::FakeClipboard;
    use crate::widgets::code_viewer::{
        CodeBlock, CodeSnippet, CodeViewerError, CodeViewerIntent,
        CodeViewerWidget,
    };

    fn install_tabs() -> CodeSnippet {
        CodeSnippet::tabbed(vec![
            CodeBlock::new("npm", "npm install focca"),
            CodeBlock::new("yarn", "yarn add focca"),
        ])
        .expect("two tabs should be accepted")
    }

    fn ctx(clipboard: &FakeClipboard) -> CodeViewerCtx<'_> {
        CodeViewerCtx { clipboard }
    }

    #[test]
    fn given_install_tabs_when_second_selected_then_yarn_command_is_shown() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());
        assert_eq!(widget.vm().code(), "npm install focca");

        let _task = widget
            .reduce(CodeViewerIntent::SelectTab { index: 1 }, &ctx(&clipboard));

        let vm = widget.vm();
        assert_eq!(vm.active_tab, 1);
        assert_eq!(vm.code(), "yarn add focca");
        assert!(vm.shows_tab_strip);
    }

    #[test]
    fn given_selected_tab_when_copied_then_only_active_code_is_written() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());
        let _select = widget
            .reduce(CodeViewerIntent::SelectTab { index: 1 }, &ctx(&clipboard));

        let _copy = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));

        assert_eq!(clipboard.written(), vec![String::from("yarn add focca")]);
        assert!(widget.vm().copied);
    }

    #[test]
    fn given_code_with_whitespace_when_copied_then_text_is_verbatim() {
        let code = "\n  const a = 1;\n\tconst b = 2;  \n";
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(CodeSnippet::single(code));

        let _copy = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));

        assert_eq!(widget.vm().code(), code);
        assert_eq!(clipboard.written(), vec![String::from(code)]);
    }

    #[test]
    fn given_out_of_range_tab_when_selected_then_selection_is_unchanged() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());

        let _task = widget
            .reduce(CodeViewerIntent::SelectTab { index: 2 }, &ctx(&clipboard));

        assert_eq!(widget.vm().active_tab, 0);
        assert_eq!(widget.vm().code(), "npm install focca");
    }

    #[test]
    fn given_single_tab_when_rendered_then_no_tab_strip_is_shown() {
        let snippet = CodeSnippet::tabbed(vec![CodeBlock::new(
            "Bash",
            "npx focca migrate",
        )])
        .expect("one tab should be accepted");
        let widget = CodeViewerWidget::new(snippet);

        assert!(!widget.vm().shows_tab_strip);

        let untabbed = CodeViewerWidget::new(CodeSnippet::single("x"));
        assert!(!untabbed.vm().shows_tab_strip);
    }

    #[test]
    fn given_empty_tab_list_when_built_then_snippet_is_rejected() {
        assert_eq!(
            CodeSnippet::tabbed(Vec::new()),
            Err(CodeViewerError::EmptyTabs)
        );
    }

    #[test]
    fn given_denied_clipboard_when_copied_then_flag_stays_off() {
        let clipboard = FakeClipboard::denied();
        let mut widget = CodeViewerWidget::new(install_tabs());

        let _copy = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));

        assert!(!widget.vm().copied);
        assert_eq!(widget.pending_token(), None);
    }

    /// Next intent produced by a reduction task, or `None` once its stream
    /// has ended without output.
    fn next_intent<'a>(
        stream: &'a mut BoxStream<'static, Action<CodeViewerIntent>>,
    ) -> task::Spawn<impl Future<Output = Option<CodeViewerIntent>> + 'a> {
        task::spawn(async move {
            match stream.next().await {
                Some(Action::Output(intent)) => Some(intent),
                _ => None,
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn given_copy_when_2000ms_elapse_then_flag_resets_exactly_then() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());

        let copy = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));
        assert!(widget.vm().copied);
        let mut timer =
            into_stream(copy).expect("copy should schedule a reset");

        let mut reset = next_intent(&mut timer);
        assert_pending!(reset.poll());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_pending!(reset.poll());
        assert!(widget.vm().copied);

        tokio::time::advance(Duration::from_millis(1)).await;
        let intent = assert_ready!(reset.poll()).expect("reset should fire");
        assert!(matches!(intent, CodeViewerIntent::FeedbackElapsed { .. }));

        let _reset = widget.reduce(intent, &ctx(&clipboard));
        assert!(!widget.vm().copied);
    }

    #[tokio::test(start_paused = true)]
    async fn given_second_copy_after_500ms_when_timers_run_then_flag_stays_on_until_2500ms()
     {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());

        let first = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));
        let first_token =
            widget.pending_token().expect("first reset should be pending");
        let mut first_timer =
            into_stream(first).expect("first copy should schedule a reset");
        let mut first_reset = next_intent(&mut first_timer);
        assert_pending!(first_reset.poll());

        tokio::time::advance(Duration::from_millis(500)).await;
        let second = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));
        let second_token =
            widget.pending_token().expect("second reset should be pending");
        assert_ne!(first_token, second_token);

        // The replaced timer ends without producing an intent.
        assert!(assert_ready!(first_reset.poll()).is_none());

        let mut second_timer =
            into_stream(second).expect("second copy should schedule a reset");
        let mut second_reset = next_intent(&mut second_timer);
        assert_pending!(second_reset.poll());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_pending!(second_reset.poll());
        assert!(widget.vm().copied);

        tokio::time::advance(Duration::from_millis(1)).await;
        let intent =
            assert_ready!(second_reset.poll()).expect("reset should fire");
        assert!(matches!(
            intent,
            CodeViewerIntent::FeedbackElapsed { token } if token == second_token
        ));

        let _reset = widget.reduce(intent, &ctx(&clipboard));
        assert!(!widget.vm().copied);
    }

    #[test]
    fn given_replaced_reset_when_its_token_arrives_late_then_flag_stays_on() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());
        let _first = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));
        let stale = widget.pending_token().expect("reset should be pending");
        let _second = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));

        let _late = widget.reduce(
            CodeViewerIntent::FeedbackElapsed { token: stale },
            &ctx(&clipboard),
        );

        assert!(widget.vm().copied);
    }

    #[test]
    fn given_pending_reset_when_torn_down_then_timer_is_aborted() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());
        let _copy = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));
        let token = widget.pending_token().expect("reset should be pending");
        let handle = widget.pending_handle().expect("handle should be stored");

        widget.teardown();

        assert!(handle.is_aborted());
        assert!(!widget.vm().copied);

        let _late = widget.reduce(
            CodeViewerIntent::FeedbackElapsed { token },
            &ctx(&clipboard),
        );
        assert!(!widget.vm().copied);
    }

    #[test]
    fn given_no_pending_reset_when_torn_down_twice_then_nothing_happens() {
        let mut widget = CodeViewerWidget::new(install_tabs());

        widget.teardown();
        widget.teardown();

        assert!(!widget.vm().copied);
    }

    #[test]
    fn given_dropped_viewer_when_reset_pending_then_timer_is_aborted() {
        let clipboard = FakeClipboard::default();
        let mut widget = CodeViewerWidget::new(install_tabs());
        let _copy = widget.reduce(CodeViewerIntent::Copy, &ctx(&clipboard));
        let handle = widget.pending_handle().expect("handle should be stored");

        drop(widget);

        assert!(handle.is_aborted());
    }
}
