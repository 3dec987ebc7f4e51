mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use focca_ui_menu::MenuTree;
use iced::Task;
pub(crate) use model::{RESOURCES, SIDEBAR_WIDTH, SidebarViewModel};
use state::SidebarState;

/// Sidebar widget: logo, documentation menu and resource links.
///
/// It never owns the visibility flag; the page shell passes the resolved
/// placement in when rendering.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    pub(crate) fn new(tree: &MenuTree) -> Self {
        Self {
            state: SidebarState::new(tree),
        }
    }

    /// Reduce an intent into menu updates and effect events.
    pub(crate) fn reduce(&mut self, intent: SidebarIntent) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel<'_> {
        SidebarViewModel {
            menu: self.state.menu().iter().map(|node| node.vm()).collect(),
            resources: RESOURCES,
        }
    }
}
