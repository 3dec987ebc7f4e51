mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{MenuEffect, MenuIntent};
use focca_ui_menu::MenuNode;
use iced::Task;
pub(crate) use model::{MenuNodeViewModel, NodeAddress};
#[cfg(test)]
pub(crate) use model::PressOutcome;
use state::MenuNodeState;

/// One top-level navigation entry with its own collapsible subtree.
///
/// Every mounted node in the subtree owns an independent expanded flag that
/// starts collapsed.
pub(crate) struct MenuNodeWidget {
    state: MenuNodeState,
}

impl MenuNodeWidget {
    /// Mount `node` as the top-level entry at `position`.
    pub(crate) fn new(position: usize, node: MenuNode) -> Self {
        Self {
            state: MenuNodeState::new(position, node),
        }
    }

    /// Reduce an intent into local flag updates and navigation effects.
    pub(crate) fn reduce(&mut self, intent: MenuIntent) -> Task<MenuEffect> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model of the mounted subtree.
    pub(crate) fn vm(&self) -> MenuNodeViewModel<'_> {
        self.state.vm(None, 0)
    }

    #[cfg(test)]
    pub(crate) fn apply(&mut self, intent: MenuIntent) -> PressOutcome {
        reducer::apply(&mut self.state, intent)
    }

    #[cfg(test)]
    pub(crate) fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Address of the first node matching `ids`, starting at this node.
    #[cfg(test)]
    pub(crate) fn address_of(&self, ids: &[&str]) -> NodeAddress {
        NodeAddress::find_from(
            self.state.position(),
            std::slice::from_ref(self.state.node()),
            ids,
        )
    }

    #[cfg(test)]
    pub(crate) fn is_mounted(&self, ids: &[&str]) -> bool {
        self.state.is_mounted(self.address_of(ids).steps())
    }

    #[cfg(test)]
    pub(crate) fn expanded_at(&self, ids: &[&str]) -> Option<bool> {
        self.state.expanded_at(self.address_of(ids).steps())
    }
}
