mod event;
mod model;
mod reducer;
mod state;

pub(crate) use event::PageShellIntent;
pub(crate) use model::{PageShellViewModel, SidebarVisibility};
use state::PageShellState;

/// Page shell widget owning the sidebar visibility flag.
///
/// A fresh instance is mounted for every page, so navigation always starts
/// with the overlay hidden.
pub(crate) struct PageShellWidget {
    state: PageShellState,
}

impl PageShellWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PageShellState::default(),
        }
    }

    /// Reduce an intent into the visibility flag.
    pub(crate) fn reduce(&mut self, intent: PageShellIntent) {
        reducer::reduce(&mut self.state, intent);
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PageShellViewModel {
        PageShellViewModel {
            sidebar: self.state.sidebar(),
        }
    }
}
