use focca_ui_menu::{MenuNode, RowAction};

use super::model::{MenuNodeViewModel, NodeAddress, PressOutcome};

/// Runtime state of one mounted menu node.
///
/// Child states exist only while the node is expanded, so collapsing a node
/// drops its whole subtree and every descendant comes back collapsed.
#[derive(Debug)]
pub(super) struct MenuNodeState {
    position: usize,
    node: MenuNode,
    expanded: bool,
    children: Vec<MenuNodeState>,
}

impl MenuNodeState {
    /// Mount `node` as the sibling at `position`.
    pub(super) fn new(position: usize, node: MenuNode) -> Self {
        Self {
            position,
            node,
            expanded: false,
            children: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(super) fn node(&self) -> &MenuNode {
        &self.node
    }

    #[cfg(test)]
    pub(super) fn position(&self) -> usize {
        self.position
    }

    #[cfg(test)]
    pub(super) fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Return whether the node at `steps` is currently mounted.
    #[cfg(test)]
    pub(super) fn is_mounted(&self, steps: &[(usize, String)]) -> bool {
        self.locate(steps).is_some()
    }

    /// Return the expanded flag of a mounted node.
    #[cfg(test)]
    pub(super) fn expanded_at(&self, steps: &[(usize, String)]) -> Option<bool> {
        self.locate(steps).map(|state| state.expanded)
    }

    /// Apply a press on the row of the node at `steps`.
    pub(super) fn press_row(&mut self, steps: &[(usize, String)]) -> PressOutcome {
        let Some(state) = self.locate_mut(steps) else {
            return PressOutcome::Ignored;
        };

        match state.node.row_action() {
            RowAction::Toggle => {
                let expanded = !state.expanded;
                state.set_expanded(expanded);
                PressOutcome::Toggled { expanded }
            },
            RowAction::Navigate(target) => PressOutcome::Navigate {
                target: target.to_owned(),
            },
            RowAction::None => PressOutcome::Ignored,
        }
    }

    /// Apply a press on the separate target link of a group.
    pub(super) fn press_target(
        &mut self,
        steps: &[(usize, String)],
    ) -> PressOutcome {
        let Some(state) = self.locate(steps) else {
            return PressOutcome::Ignored;
        };

        match state.node.target() {
            Some(target) => PressOutcome::Navigate {
                target: target.to_owned(),
            },
            None => PressOutcome::Ignored,
        }
    }

    pub(super) fn vm(
        &self,
        parent: Option<&NodeAddress>,
        depth: usize,
    ) -> MenuNodeViewModel<'_> {
        let id = self.node.id();
        let address = match parent {
            Some(parent) => parent.child(self.position, id),
            None => NodeAddress::root(self.position, id),
        };

        let children = self
            .children
            .iter()
            .map(|child| child.vm(Some(&address), depth + 1))
            .collect();

        MenuNodeViewModel {
            node: &self.node,
            address,
            depth,
            expanded: self.expanded,
            children,
        }
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.children = if expanded {
            self.node
                .children()
                .iter()
                .cloned()
                .enumerate()
                .map(|(position, node)| MenuNodeState::new(position, node))
                .collect()
        } else {
            Vec::new()
        };
    }

    fn matches(&self, (position, id): &(usize, String)) -> bool {
        *position == self.position && id == self.node.id()
    }

    fn locate(&self, steps: &[(usize, String)]) -> Option<&MenuNodeState> {
        let (head, rest) = steps.split_first()?;
        if !self.matches(head) {
            return None;
        }

        match rest.first() {
            None => Some(self),
            Some((next, _)) => self.children.get(*next)?.locate(rest),
        }
    }

    fn locate_mut(
        &mut self,
        steps: &[(usize, String)],
    ) -> Option<&mut MenuNodeState> {
        let (head, rest) = steps.split_first()?;
        if !self.matches(head) {
            return None;
        }

        match rest.first() {
            None => Some(self),
            Some((next, _)) => self.children.get_mut(*next)?.locate_mut(rest),
        }
    }
}
