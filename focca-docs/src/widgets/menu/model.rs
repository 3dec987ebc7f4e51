use focca_ui_menu::MenuNode;

/// Address of a node from its top-level entry down.
///
/// Sibling ids may repeat in a configured menu, so every step pairs the
/// sibling position with the id; a step only matches when both agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeAddress {
    steps: Vec<(usize, String)>,
}

impl NodeAddress {
    /// Address of a top-level node.
    pub(crate) fn root(position: usize, id: &str) -> Self {
        Self {
            steps: vec![(position, id.to_owned())],
        }
    }

    /// Address of the child at `position` below this node.
    pub(crate) fn child(&self, position: usize, id: &str) -> Self {
        let mut steps = self.steps.clone();
        steps.push((position, id.to_owned()));
        Self { steps }
    }

    pub(crate) fn steps(&self) -> &[(usize, String)] {
        &self.steps
    }

    /// Sibling position of the top-level node.
    pub(crate) fn root_position(&self) -> Option<usize> {
        self.steps.first().map(|(position, _)| *position)
    }

    /// Address of the first node matching `ids` level by level. Unknown ids
    /// produce an address that matches nothing.
    #[cfg(test)]
    pub(crate) fn find(roots: &[MenuNode], ids: &[&str]) -> Self {
        Self::find_from(0, roots, ids)
    }

    /// Like [`NodeAddress::find`] for a slice of top-level nodes that starts
    /// at sibling position `offset`.
    #[cfg(test)]
    pub(crate) fn find_from(
        offset: usize,
        roots: &[MenuNode],
        ids: &[&str],
    ) -> Self {
        let mut siblings = roots;
        let mut offset = offset;
        let mut steps = Vec::with_capacity(ids.len());
        for id in ids {
            match siblings.iter().position(|node| node.id() == *id) {
                Some(position) => {
                    steps.push((offset + position, (*id).to_owned()));
                    offset = 0;
                    siblings = siblings[position].children();
                },
                None => {
                    steps.push((usize::MAX, (*id).to_owned()));
                    offset = 0;
                    siblings = &[];
                },
            }
        }
        Self { steps }
    }

    #[cfg(test)]
    pub(crate) fn ids(&self) -> Vec<&str> {
        self.steps.iter().map(|(_, id)| id.as_str()).collect()
    }
}

/// Result of pressing somewhere inside a node's subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PressOutcome {
    /// An expandable node flipped its flag.
    Toggled { expanded: bool },
    /// A navigable target was activated.
    Navigate { target: String },
    /// The press addressed an inert label or an unknown node.
    Ignored,
}

/// Read-only view of one mounted node and its mounted descendants.
#[derive(Debug, Clone)]
pub(crate) struct MenuNodeViewModel<'a> {
    pub(crate) node: &'a MenuNode,
    pub(crate) address: NodeAddress,
    pub(crate) depth: usize,
    pub(crate) expanded: bool,
    /// Empty unless `expanded`.
    pub(crate) children: Vec<MenuNodeViewModel<'a>>,
}
