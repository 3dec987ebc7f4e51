use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of node ids from a top-level entry to the target node.
///
/// Ids are only required to be unique among siblings, so a full path is
/// needed to address a node inside the forest.
pub type MenuPath = Vec<String>;

/// Raw menu entry as written in a menu definition.
///
/// The shape is duck-typed: an entry is a link when it carries `href`, a
/// group when it carries a non-empty `subItems` list, and both at once is
/// allowed. `target` and `children` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    #[serde(default, alias = "target", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(
        default,
        alias = "children",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_items: Option<Vec<MenuEntry>>,
}

impl MenuEntry {
    /// Create a navigable entry without children.
    pub fn link(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            href: Some(href.to_owned()),
            sub_items: None,
        }
    }

    /// Create a grouping entry without its own target.
    pub fn group(id: &str, label: &str, sub_items: Vec<MenuEntry>) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            href: None,
            sub_items: Some(sub_items),
        }
    }
}

/// One entry of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// Navigable entry without children.
    Leaf {
        id: String,
        label: String,
        target: String,
    },
    /// Expandable entry with at least one child and an optional own target.
    Group {
        id: String,
        label: String,
        target: Option<String>,
        children: Vec<MenuNode>,
    },
    /// Entry with neither target nor children, shown as plain text.
    Label { id: String, label: String },
}

/// What pressing the row of a node should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction<'a> {
    /// Flip the locally owned expanded flag.
    Toggle,
    /// Navigate to the given target.
    Navigate(&'a str),
    /// Nothing, the row is inert.
    None,
}

impl MenuNode {
    /// Create a leaf node.
    pub fn leaf(id: &str, label: &str, target: &str) -> Self {
        Self::Leaf {
            id: id.to_owned(),
            label: label.to_owned(),
            target: target.to_owned(),
        }
    }

    /// Create a group node.
    ///
    /// An empty `children` list does not make a group, the node degrades to
    /// a plain label instead.
    pub fn group(id: &str, label: &str, children: Vec<MenuNode>) -> Self {
        if children.is_empty() {
            return Self::Label {
                id: id.to_owned(),
                label: label.to_owned(),
            };
        }

        Self::Group {
            id: id.to_owned(),
            label: label.to_owned(),
            target: None,
            children,
        }
    }

    /// Attach a navigation target to the node.
    pub fn with_target(self, target: &str) -> Self {
        match self {
            Self::Leaf { id, label, .. } | Self::Label { id, label } => {
                Self::Leaf {
                    id,
                    label,
                    target: target.to_owned(),
                }
            },
            Self::Group {
                id,
                label,
                children,
                ..
            } => Self::Group {
                id,
                label,
                target: Some(target.to_owned()),
                children,
            },
        }
    }

    /// Return the sibling-unique id.
    pub fn id(&self) -> &str {
        match self {
            Self::Leaf { id, .. }
            | Self::Group { id, .. }
            | Self::Label { id, .. } => id,
        }
    }

    /// Return the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. }
            | Self::Group { label, .. }
            | Self::Label { label, .. } => label,
        }
    }

    /// Return the navigation target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Leaf { target, .. } => Some(target),
            Self::Group { target, .. } => target.as_deref(),
            Self::Label { .. } => None,
        }
    }

    /// Return ordered children (empty for leaves and labels).
    pub fn children(&self) -> &[MenuNode] {
        match self {
            Self::Group { children, .. } => children,
            Self::Leaf { .. } | Self::Label { .. } => &[],
        }
    }

    /// Whether the node has children and shows a disclosure control.
    pub fn is_expandable(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.is_expandable()
    }

    /// Resolve the action triggered by pressing the node's row.
    pub fn row_action(&self) -> RowAction<'_> {
        match self {
            Self::Group { .. } => RowAction::Toggle,
            Self::Leaf { target, .. } => RowAction::Navigate(target),
            Self::Label { .. } => RowAction::None,
        }
    }
}

impl From<MenuEntry> for MenuNode {
    fn from(entry: MenuEntry) -> Self {
        let label = if entry.label.trim().is_empty() {
            entry.id.clone()
        } else {
            entry.label
        };
        let children: Vec<MenuNode> = entry
            .sub_items
            .unwrap_or_default()
            .into_iter()
            .map(MenuNode::from)
            .collect();

        match (children.is_empty(), entry.href) {
            (false, target) => Self::Group {
                id: entry.id,
                label,
                target,
                children,
            },
            (true, Some(target)) => Self::Leaf {
                id: entry.id,
                label,
                target,
            },
            (true, None) => Self::Label { id: entry.id, label },
        }
    }
}

/// Problems found in a menu definition.
///
/// None of them prevents rendering; they are reported so that the
/// definition can be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuIssue {
    #[error("duplicate sibling id `{id}` under {parent:?}")]
    DuplicateId { parent: MenuPath, id: String },
    #[error("entry {path:?} has an empty label")]
    EmptyLabel { path: MenuPath },
    #[error("entry {path:?} has neither a target nor children")]
    Inert { path: MenuPath },
}

/// Ordered, immutable forest of menu nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Create a tree from already built nodes.
    pub fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    /// Build a tree from raw definition entries.
    pub fn from_entries(entries: Vec<MenuEntry>) -> Self {
        Self::new(entries.into_iter().map(MenuNode::from).collect())
    }

    /// Parse a JSON array of entries into a tree.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<MenuEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Return top-level nodes in definition order.
    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    /// Return whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a node by its id path.
    pub fn find(&self, path: &[String]) -> Option<&MenuNode> {
        find_node(&self.roots, path)
    }
}

/// Collect definition problems, depth first, in definition order.
pub fn validate_entries(entries: &[MenuEntry]) -> Vec<MenuIssue> {
    let mut issues = Vec::new();
    let mut path = Vec::new();
    collect_issues(entries, &mut path, &mut issues);
    issues
}

fn collect_issues(
    entries: &[MenuEntry],
    path: &mut Vec<String>,
    issues: &mut Vec<MenuIssue>,
) {
    for (index, entry) in entries.iter().enumerate() {
        let seen_before = entries[..index]
            .iter()
            .any(|sibling| sibling.id == entry.id);
        if seen_before {
            issues.push(MenuIssue::DuplicateId {
                parent: path.clone(),
                id: entry.id.clone(),
            });
        }

        path.push(entry.id.clone());

        if entry.label.trim().is_empty() {
            issues.push(MenuIssue::EmptyLabel { path: path.clone() });
        }

        let children = entry.sub_items.as_deref().unwrap_or_default();
        if children.is_empty() && entry.href.is_none() {
            issues.push(MenuIssue::Inert { path: path.clone() });
        }

        collect_issues(children, path, issues);
        path.pop();
    }
}

fn find_node<'a>(nodes: &'a [MenuNode], path: &[String]) -> Option<&'a MenuNode> {
    let (head, tail) = path.split_first()?;
    let node = nodes.iter().find(|node| node.id() == head)?;

    if tail.is_empty() {
        return Some(node);
    }

    find_node(node.children(), tail)
}
