use crate::widgets::code_viewer::CodeViewerIntent;

/// Intent events handled by the page content.
#[derive(Debug, Clone)]
pub(crate) enum ContentIntent {
    /// Intent addressed to the code viewer at `index` in page order.
    CodeViewer {
        index: usize,
        intent: CodeViewerIntent,
    },
    LinkPressed {
        target: String,
    },
}

/// Effect events produced by the content reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentEffect {
    Navigate { target: String },
}

/// Content event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ContentEvent {
    /// Intent event reduced by the content widget.
    Intent(ContentIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ContentEffect),
}
