/// Intent events handled by the page shell.
#[derive(Debug, Clone)]
pub(crate) enum PageShellIntent {
    /// Header menu control was pressed.
    ToggleSidebar,
    /// Scrim was pressed or a navigation happened.
    DismissSidebar,
}
