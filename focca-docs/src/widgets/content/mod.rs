mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{ContentEffect, ContentEvent, ContentIntent};
use iced::Task;
pub(crate) use model::ContentViewModel;
pub(crate) use reducer::ContentCtx;
use state::ContentState;

use crate::content::Page;

/// Page content widget: prose blocks plus one code viewer per snippet.
///
/// A new instance is mounted on every navigation; the previous one must be
/// torn down first so its copy feedback timers stop.
pub(crate) struct ContentWidget {
    state: ContentState,
}

impl ContentWidget {
    pub(crate) fn mount(page: Page) -> Self {
        Self {
            state: ContentState::mount(page),
        }
    }

    pub(crate) fn title(&self) -> &str {
        self.state.page().title()
    }

    /// Reduce an intent into code viewer updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: ContentIntent,
        ctx: &ContentCtx<'_>,
    ) -> Task<ContentEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Cancel pending copy feedback of every code viewer.
    pub(crate) fn teardown(&mut self) {
        self.state.teardown();
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> ContentViewModel<'_> {
        let page = self.state.page();

        ContentViewModel {
            title: page.title(),
            blocks: page.blocks(),
            viewers: self.state.viewers().iter().map(|viewer| viewer.vm()).collect(),
        }
    }
}
