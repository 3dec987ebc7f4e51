/// Visibility of the sidebar overlay on narrow viewports.
///
/// Wide viewports ignore this flag and always show the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SidebarVisibility {
    #[default]
    Hidden,
    Visible,
}

impl SidebarVisibility {
    /// Flip between hidden and visible.
    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    /// Force the hidden state.
    pub(crate) fn dismiss(self) -> Self {
        Self::Hidden
    }
}

/// View model for the page shell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageShellViewModel {
    pub(crate) sidebar: SidebarVisibility,
}
