/// Intent events handled by the site header.
#[derive(Debug, Clone)]
pub(crate) enum ChromeIntent {
    LogoPressed,
    ToggleSidebar,
}

/// Effect events produced by the header reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChromeEffect {
    Navigate { target: String },
    ToggleSidebar,
}

/// Header event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the header.
    Intent(ChromeIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
