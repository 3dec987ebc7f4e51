use iced::Task;

use super::event::{ContentEffect, ContentEvent, ContentIntent};
use super::state::ContentState;
use crate::widgets::code_viewer::CodeViewerCtx;
use crate::widgets::code_viewer::services::ClipboardWriter;

/// Runtime context for content reduction.
pub(crate) struct ContentCtx<'a> {
    pub(crate) clipboard: &'a dyn ClipboardWriter,
}

/// Reduce a content intent into code viewer updates and effect events.
pub(super) fn reduce(
    state: &mut ContentState,
    intent: ContentIntent,
    ctx: &ContentCtx<'_>,
) -> Task<ContentEvent> {
    match intent {
        ContentIntent::CodeViewer { index, intent } => {
            let Some(viewer) = state.viewer_mut(index) else {
                log::debug!("code viewer intent for unknown index {index}");
                return Task::none();
            };

            let ctx = CodeViewerCtx {
                clipboard: ctx.clipboard,
            };
            viewer.reduce(intent, &ctx).map(move |intent| {
                ContentEvent::Intent(ContentIntent::CodeViewer { index, intent })
            })
        },
        ContentIntent::LinkPressed { target } => {
            Task::done(ContentEvent::Effect(ContentEffect::Navigate { target }))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::ContentCtx;
    use crate::content::Page;
    use crate::widgets::code_viewer::CodeViewerIntent;
    use crate::widgets::code_viewer::services::FakeClipboard;
    use crate::widgets::content::{ContentIntent, ContentWidget};

    fn page() -> Page {
        Page::new("Install")
            .paragraph("Pick a package manager.")
            .tabs([("npm", "npm install focca"), ("yarn", "yarn add focca")])
            .section("Migrate")
            .code("npx focca migrate")
    }

    fn copy(index: usize) -> ContentIntent {
        ContentIntent::CodeViewer {
            index,
            intent: CodeViewerIntent::Copy,
        }
    }

    #[test]
    fn given_page_with_snippets_when_mounted_then_one_viewer_per_snippet() {
        let widget = ContentWidget::mount(page());
        let vm = widget.vm();

        assert_eq!(widget.title(), "Install");
        assert_eq!(vm.viewers.len(), 2);
        assert_eq!(vm.viewers[0].code(), "npm install focca");
        assert_eq!(vm.viewers[1].code(), "npx focca migrate");
    }

    #[test]
    fn given_two_viewers_when_second_copied_then_only_it_shows_feedback() {
        let clipboard = FakeClipboard::default();
        let ctx = ContentCtx {
            clipboard: &clipboard,
        };
        let mut widget = ContentWidget::mount(page());

        let _copy = widget.reduce(copy(1), &ctx);

        let vm = widget.vm();
        assert!(!vm.viewers[0].copied);
        assert!(vm.viewers[1].copied);
        assert_eq!(clipboard.written(), vec![String::from("npx focca migrate")]);
    }

    #[test]
    fn given_unknown_viewer_index_when_reduced_then_nothing_changes() {
        let clipboard = FakeClipboard::default();
        let ctx = ContentCtx {
            clipboard: &clipboard,
        };
        let mut widget = ContentWidget::mount(page());

        let _copy = widget.reduce(copy(7), &ctx);

        assert!(clipboard.written().is_empty());
        assert!(widget.vm().viewers.iter().all(|viewer| !viewer.copied));
    }

    #[test]
    fn given_pending_feedback_when_torn_down_then_every_flag_is_cleared() {
        let clipboard = FakeClipboard::default();
        let ctx = ContentCtx {
            clipboard: &clipboard,
        };
        let mut widget = ContentWidget::mount(page());
        let _first = widget.reduce(copy(0), &ctx);
        let _second = widget.reduce(copy(1), &ctx);

        widget.teardown();

        assert!(widget.vm().viewers.iter().all(|viewer| !viewer.copied));
    }
}
