use super::model::SidebarVisibility;

/// Page shell state: the single flag gating the narrow sidebar overlay.
#[derive(Debug, Default)]
pub(super) struct PageShellState {
    sidebar: SidebarVisibility,
}

impl PageShellState {
    pub(super) fn sidebar(&self) -> SidebarVisibility {
        self.sidebar
    }

    pub(super) fn set_sidebar(&mut self, visibility: SidebarVisibility) {
        self.sidebar = visibility;
    }
}
