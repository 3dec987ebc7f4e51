use crate::widgets::menu::MenuIntent;

/// Intent events handled by the sidebar.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Intent addressed to one of the top-level menu nodes.
    Menu(MenuIntent),
    LogoPressed,
    ResourcePressed { target: String },
    ScrimPressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    Navigate { target: String },
    /// Ask the page shell to hide the narrow overlay.
    Dismiss,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
