use super::model::NodeAddress;

/// Intent events handled by a menu node.
///
/// Addresses start at the top-level node that receives the intent.
#[derive(Debug, Clone)]
pub(crate) enum MenuIntent {
    /// The row of a node was pressed.
    RowPressed { address: NodeAddress },
    /// The separate link of a group carrying a target was pressed.
    TargetPressed { address: NodeAddress },
}

impl MenuIntent {
    /// Address of the pressed node.
    pub(crate) fn address(&self) -> &NodeAddress {
        match self {
            Self::RowPressed { address } | Self::TargetPressed { address } => {
                address
            },
        }
    }
}

/// Effect events produced by the menu reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEffect {
    Navigate { target: String },
}
