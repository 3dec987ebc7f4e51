use focca_ui_menu::MenuTree;

use crate::widgets::menu::{MenuNodeWidget, NodeAddress};

/// Sidebar state: one menu node widget per top-level entry.
pub(super) struct SidebarState {
    menu: Vec<MenuNodeWidget>,
}

impl SidebarState {
    pub(super) fn new(tree: &MenuTree) -> Self {
        Self {
            menu: tree
                .roots()
                .iter()
                .cloned()
                .enumerate()
                .map(|(position, node)| MenuNodeWidget::new(position, node))
                .collect(),
        }
    }

    pub(super) fn menu(&self) -> &[MenuNodeWidget] {
        &self.menu
    }

    /// Top-level node an address starts at, by sibling position.
    pub(super) fn menu_node_mut(
        &mut self,
        address: &NodeAddress,
    ) -> Option<&mut MenuNodeWidget> {
        self.menu.get_mut(address.root_position()?)
    }
}
